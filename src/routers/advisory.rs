//! Advisory routes: text advisory and image-based navigation guidance.

use std::sync::Arc;

use axum::{
    extract::{Multipart, Query, State},
    Json,
};
use validator::Validate;

use advisory_protocol::advisory::{AdvisoryResponse, TextAdvisoryParams};

use crate::{
    app_context::AppContext,
    core::{prompts, GatewayError},
    routers::upload,
};

/// `GET /text-advisory` — text-based crop and soil advisory.
pub async fn text_advisory(
    State(ctx): State<Arc<AppContext>>,
    Query(params): Query<TextAdvisoryParams>,
) -> Result<Json<AdvisoryResponse>, GatewayError> {
    params.validate().map_err(|_| GatewayError::EmptyQuery)?;

    let prompt = prompts::render(prompts::ADVISORY_TEMPLATE, &[("query", &params.user_query)]);
    let advisory = ctx.client.generate_text(&prompt).await?;

    tracing::info!(query = %params.user_query, "served text advisory");
    Ok(Json(AdvisoryResponse { advisory }))
}

/// `POST /image-advisory` — app navigation guidance from a screenshot.
pub async fn image_advisory(
    State(ctx): State<Arc<AppContext>>,
    Query(params): Query<TextAdvisoryParams>,
    multipart: Multipart,
) -> Result<Json<AdvisoryResponse>, GatewayError> {
    params.validate().map_err(|_| GatewayError::EmptyQuery)?;

    let file = upload::read_single_image(multipart).await?;
    let prompt = prompts::render(
        prompts::IMAGE_ADVISORY_TEMPLATE,
        &[("query", &params.user_query)],
    );
    let advisory = upload::relay_with_image(&ctx, &prompt, &file).await?;

    tracing::info!(query = %params.user_query, file = %file.display_name(), "served image advisory");
    Ok(Json(AdvisoryResponse { advisory }))
}
