//! Gateway error types.
//!
//! One flat enum for everything that can fail while relaying a request.
//! The HTTP mapping lives in `routers::error`.

use thiserror::Error;

pub type GatewayResult<T> = Result<T, GatewayError>;

#[derive(Debug, Error)]
pub enum GatewayError {
    #[error("Query string cannot be empty.")]
    EmptyQuery,

    #[error("Missing multipart field: {0}")]
    MissingField(&'static str),

    #[error("Malformed multipart payload: {0}")]
    Multipart(String),

    #[error("Invalid value for {field}: {reason}")]
    InvalidField {
        field: &'static str,
        reason: String,
    },

    #[error("Upstream request failed: {0}")]
    Upstream(#[from] reqwest::Error),

    #[error("Upstream returned {status}: {message}")]
    UpstreamStatus { status: u16, message: String },

    #[error("Model response was blocked: {reason}")]
    Blocked { reason: String },

    #[error("Model response contained no text")]
    EmptyCompletion,

    #[error(transparent)]
    Io(#[from] std::io::Error),
}
