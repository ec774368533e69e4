//! Disease-detection route.

use std::sync::Arc;

use axum::{
    extract::{Multipart, Query, State},
    Json,
};

use advisory_protocol::advisory::{DiseaseParams, DiseaseReport};

use crate::{
    app_context::AppContext,
    core::{prompts, GatewayError},
    routers::upload,
};

/// `POST /detect-disease` — diagnose a crop photo, answering in the
/// requested language.
pub async fn detect_disease(
    State(ctx): State<Arc<AppContext>>,
    Query(params): Query<DiseaseParams>,
    multipart: Multipart,
) -> Result<Json<DiseaseReport>, GatewayError> {
    let file = upload::read_single_image(multipart).await?;
    let prompt = prompts::render(prompts::DISEASE_TEMPLATE, &[("language", &params.lang)]);
    let diagnosis = upload::relay_with_image(&ctx, &prompt, &file).await?;

    tracing::info!(language = %params.lang, file = %file.display_name(), "served disease diagnosis");
    Ok(Json(DiseaseReport {
        diagnosis,
        language: params.lang,
    }))
}
