//! HTTP mapping for gateway errors.
//!
//! Every failure surfaces to the client as `{"error": "<message>"}` with an
//! appropriate status code. Messages that may carry upstream error text are
//! sanitized so API-key material never reaches clients.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;

use crate::core::GatewayError;

#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

pub fn create_error(status: StatusCode, message: impl Into<String>) -> Response {
    (
        status,
        Json(ErrorBody {
            error: message.into(),
        }),
    )
        .into_response()
}

pub fn bad_request(message: impl Into<String>) -> Response {
    create_error(StatusCode::BAD_REQUEST, message)
}

pub fn unauthorized(message: impl Into<String>) -> Response {
    create_error(StatusCode::UNAUTHORIZED, message)
}

pub fn internal_error(message: impl Into<String>) -> Response {
    create_error(StatusCode::INTERNAL_SERVER_ERROR, message)
}

pub fn bad_gateway(message: impl Into<String>) -> Response {
    create_error(StatusCode::BAD_GATEWAY, message)
}

static KEY_PARAM_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)\bkey=[A-Za-z0-9_\-]+").unwrap());
static GOOG_KEY_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\bAIza[0-9A-Za-z_\-]{10,}").unwrap());

/// Strip API-key material from error text before it reaches clients.
/// - `key=...` query-parameter patterns
/// - bare `AIza...` Google API key tokens
pub fn sanitize_message(message: &str) -> String {
    let sanitized = KEY_PARAM_RE.replace_all(message, "key=[redacted]");
    let sanitized = GOOG_KEY_RE.replace_all(&sanitized, "[redacted]");
    sanitized.into_owned()
}

/// Client-safe rendering of a gateway error.
pub fn client_message(err: &GatewayError) -> String {
    sanitize_message(&err.to_string())
}

impl IntoResponse for GatewayError {
    fn into_response(self) -> Response {
        let status = match &self {
            GatewayError::EmptyQuery
            | GatewayError::MissingField(_)
            | GatewayError::Multipart(_)
            | GatewayError::InvalidField { .. } => StatusCode::BAD_REQUEST,
            GatewayError::Upstream(_) | GatewayError::UpstreamStatus { .. } => {
                StatusCode::BAD_GATEWAY
            }
            GatewayError::Blocked { .. }
            | GatewayError::EmptyCompletion
            | GatewayError::Io(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        if status.is_server_error() {
            tracing::error!(error = %self, "request failed");
        } else {
            tracing::warn!(error = %self, "request rejected");
        }

        create_error(status, client_message(&self))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sanitize_key_query_param() {
        let message = "POST https://example.test/v1beta/models/x:generateContent?key=AIzaSyFakeKey123 failed";
        let result = sanitize_message(message);
        assert!(!result.contains("AIza"));
        assert!(result.contains("key=[redacted]"));
        assert!(result.contains("generateContent"));
    }

    #[test]
    fn test_sanitize_bare_google_key() {
        let message = "API key AIzaSyD4t4fakefakefake is not valid";
        let result = sanitize_message(message);
        assert!(!result.contains("AIzaSy"));
        assert!(result.contains("[redacted] is not valid"));
    }

    #[test]
    fn test_sanitize_plain_message_passthrough() {
        assert_eq!(
            sanitize_message("Quota exceeded for this model"),
            "Quota exceeded for this model"
        );
    }

    #[test]
    fn test_error_statuses() {
        let cases = [
            (GatewayError::EmptyQuery, StatusCode::BAD_REQUEST),
            (
                GatewayError::MissingField("file"),
                StatusCode::BAD_REQUEST,
            ),
            (
                GatewayError::UpstreamStatus {
                    status: 429,
                    message: "quota".to_string(),
                },
                StatusCode::BAD_GATEWAY,
            ),
            (GatewayError::EmptyCompletion, StatusCode::INTERNAL_SERVER_ERROR),
        ];
        for (err, expected) in cases {
            assert_eq!(err.into_response().status(), expected);
        }
    }
}
