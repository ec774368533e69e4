//! Router assembly and serve loop.

use std::{sync::Arc, time::Duration};

use axum::{
    extract::DefaultBodyLimit,
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use serde_json::{json, Value};
use tower_http::{
    cors::CorsLayer,
    request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

use crate::{app_context::AppContext, middleware, routers};

/// Build the full application router.
///
/// The advisory routes sit behind the optional bearer-token gate; `/health`
/// stays open for probes.
pub fn build_router(ctx: Arc<AppContext>) -> Router {
    let advisory_routes = Router::new()
        .route("/text-advisory", get(routers::advisory::text_advisory))
        .route("/image-advisory", post(routers::advisory::image_advisory))
        .route("/detect-disease", post(routers::disease::detect_disease))
        .route(
            "/evaluate-answer",
            post(routers::evaluation::evaluate_answer),
        )
        .route("/evaluate-batch", post(routers::evaluation::evaluate_batch))
        .layer(axum::middleware::from_fn_with_state(
            ctx.clone(),
            middleware::bearer_auth,
        ));

    // Give the HTTP layer a little headroom over the upstream timeout so
    // upstream timeouts surface as 502s, not blanket 408s.
    let request_timeout = Duration::from_secs(ctx.config.request_timeout_secs + 10);
    let body_limit = ctx.config.max_body_bytes();

    Router::new()
        .route("/health", get(health))
        .merge(advisory_routes)
        .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
        .layer(PropagateRequestIdLayer::x_request_id())
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .layer(TimeoutLayer::with_status_code(
            StatusCode::REQUEST_TIMEOUT,
            request_timeout,
        ))
        .layer(DefaultBodyLimit::max(body_limit))
        .with_state(ctx)
}

async fn health() -> Json<Value> {
    Json(json!({"status": "ok"}))
}

pub async fn serve(ctx: Arc<AppContext>) -> anyhow::Result<()> {
    let addr = ctx.config.bind_addr();
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!(%addr, model = %ctx.config.model, "crop advisory gateway listening");
    axum::serve(listener, build_router(ctx)).await?;
    Ok(())
}
