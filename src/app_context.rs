//! Shared per-process components.
//!
//! Created once at startup and `Arc`-cloned into every handler via axum
//! state.

use std::{sync::Arc, time::Duration};

use crate::{
    config::AppConfig,
    core::{GeminiClient, ImageSpool},
};

pub struct AppContext {
    pub config: AppConfig,
    pub client: GeminiClient,
    pub spool: ImageSpool,
}

impl AppContext {
    pub async fn from_config(config: AppConfig) -> anyhow::Result<Arc<Self>> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .build()?;
        let client = GeminiClient::new(
            http,
            &config.upstream_url,
            &config.api_key,
            &config.model,
            config.temperature,
        );
        let spool = ImageSpool::open(&config.scratch_dir).await?;
        Ok(Arc::new(Self {
            config,
            client,
            spool,
        }))
    }
}
