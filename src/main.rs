use clap::Parser;
use tracing_subscriber::EnvFilter;

use cag::{app_context::AppContext, config::AppConfig, server};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = AppConfig::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    config.validate()?;

    let ctx = AppContext::from_config(config).await?;
    server::serve(ctx).await
}
