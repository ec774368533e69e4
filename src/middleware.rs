//! Request-level middleware.

use std::sync::Arc;

use axum::{
    extract::{Request, State},
    http::header::AUTHORIZATION,
    middleware::Next,
    response::Response,
};
use subtle::ConstantTimeEq;

use crate::{app_context::AppContext, routers::error};

/// Bearer-token gate for the advisory routes.
///
/// A no-op when no token is configured. Comparison is constant-time.
pub async fn bearer_auth(
    State(ctx): State<Arc<AppContext>>,
    request: Request,
    next: Next,
) -> Response {
    let Some(expected) = ctx.config.auth_token.as_deref() else {
        return next.run(request).await;
    };

    let provided = request
        .headers()
        .get(AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.strip_prefix("Bearer "));

    match provided {
        Some(token) if bool::from(token.as_bytes().ct_eq(expected.as_bytes())) => {
            next.run(request).await
        }
        _ => {
            tracing::warn!("rejected request with missing or invalid bearer token");
            error::unauthorized("Missing or invalid bearer token")
        }
    }
}
