//! Gateway configuration.
//!
//! All knobs come from the CLI with env fallbacks. Validation runs once at
//! startup; a missing API key is a boot failure, not a per-request 500.

use std::path::PathBuf;

use clap::Parser;
use thiserror::Error;
use url::Url;

use crate::core::client::DEFAULT_BASE_URL;

#[derive(Debug, Clone, Parser)]
#[command(
    name = "crop-advisory-gateway",
    about = "HTTP relay forwarding farmer queries to a hosted multimodal model",
    version
)]
pub struct AppConfig {
    /// Bind address.
    #[arg(long, env = "CAG_HOST", default_value = "0.0.0.0")]
    pub host: String,

    /// Bind port.
    #[arg(long, env = "CAG_PORT", default_value_t = 8080)]
    pub port: u16,

    /// Gemini API key.
    #[arg(long, env = "GEMINI_API_KEY", hide_env_values = true, default_value = "")]
    pub api_key: String,

    /// Model identifier.
    #[arg(long, env = "CAG_MODEL", default_value = "gemini-2.5-flash")]
    pub model: String,

    /// Sampling temperature passed upstream.
    #[arg(long, env = "CAG_TEMPERATURE", default_value_t = 0.2)]
    pub temperature: f32,

    /// Upstream API base URL.
    #[arg(long, env = "CAG_UPSTREAM_URL", default_value = DEFAULT_BASE_URL)]
    pub upstream_url: String,

    /// Scratch directory for spooled uploads.
    #[arg(long, env = "CAG_SCRATCH_DIR", default_value = "temp_images")]
    pub scratch_dir: PathBuf,

    /// Upstream request timeout in seconds.
    #[arg(long, env = "CAG_REQUEST_TIMEOUT_SECS", default_value_t = 60)]
    pub request_timeout_secs: u64,

    /// Maximum accepted request body in megabytes.
    #[arg(long, env = "CAG_MAX_BODY_MB", default_value_t = 16)]
    pub max_body_mb: usize,

    /// Bearer token required on the advisory routes. Unset leaves them open.
    #[arg(long, env = "CAG_AUTH_TOKEN", hide_env_values = true)]
    pub auth_token: Option<String>,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Gemini API key is not configured (set GEMINI_API_KEY)")]
    MissingApiKey,

    #[error("invalid upstream URL: {0}")]
    InvalidUpstreamUrl(String),

    #[error("temperature {0} outside supported range 0.0..=2.0")]
    TemperatureOutOfRange(f32),

    #[error("max body size must be nonzero")]
    ZeroBodyLimit,
}

impl AppConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.api_key.trim().is_empty() {
            return Err(ConfigError::MissingApiKey);
        }
        Url::parse(&self.upstream_url)
            .map_err(|err| ConfigError::InvalidUpstreamUrl(err.to_string()))?;
        if !(0.0..=2.0).contains(&self.temperature) {
            return Err(ConfigError::TemperatureOutOfRange(self.temperature));
        }
        if self.max_body_mb == 0 {
            return Err(ConfigError::ZeroBodyLimit);
        }
        Ok(())
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    pub fn max_body_bytes(&self) -> usize {
        self.max_body_mb * 1024 * 1024
    }
}
