//! Answer-sheet evaluation routes.
//!
//! Single evaluation grades one uploaded sheet against a question and a
//! marks ceiling. Batch evaluation is deliberately a sequential loop over
//! the single case: one upstream call at a time, results kept in arrival
//! order, per-sheet failures recorded inline instead of aborting the batch.

use std::sync::Arc;

use axum::{
    extract::{Multipart, State},
    Json,
};

use advisory_protocol::evaluation::{
    BatchEvaluationResponse, EvaluationResponse, EvaluationResult,
};

use crate::{
    app_context::AppContext,
    core::{prompts, GatewayError, GatewayResult},
    routers::{error, upload},
};

struct EvaluationForm {
    question: String,
    max_marks: u32,
    uploads: Vec<upload::UploadedFile>,
}

async fn read_evaluation_form(mut multipart: Multipart) -> GatewayResult<EvaluationForm> {
    let mut question = None;
    let mut max_marks = None;
    let mut uploads = Vec::new();

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|err| GatewayError::Multipart(err.to_string()))?
    {
        let name = field.name().map(str::to_string);
        match name.as_deref() {
            Some("question") => {
                question = Some(
                    field
                        .text()
                        .await
                        .map_err(|err| GatewayError::Multipart(err.to_string()))?,
                );
            }
            Some("max_marks") => {
                let raw = field
                    .text()
                    .await
                    .map_err(|err| GatewayError::Multipart(err.to_string()))?;
                max_marks = Some(raw.trim().parse::<u32>().map_err(|_| {
                    GatewayError::InvalidField {
                        field: "max_marks",
                        reason: format!("'{raw}' is not a whole number"),
                    }
                })?);
            }
            _ if field.file_name().is_some() => {
                let filename = field
                    .file_name()
                    .filter(|name| !name.is_empty())
                    .map(str::to_string);
                let content_type = field.content_type().map(str::to_string);
                let bytes = field
                    .bytes()
                    .await
                    .map_err(|err| GatewayError::Multipart(err.to_string()))?;
                if bytes.is_empty() {
                    return Err(GatewayError::InvalidField {
                        field: "file",
                        reason: "empty upload".to_string(),
                    });
                }
                uploads.push(upload::UploadedFile {
                    filename,
                    content_type,
                    bytes,
                });
            }
            _ => {}
        }
    }

    let question = question
        .filter(|q| !q.trim().is_empty())
        .ok_or(GatewayError::MissingField("question"))?;
    let max_marks = max_marks.ok_or(GatewayError::MissingField("max_marks"))?;
    if max_marks == 0 {
        return Err(GatewayError::InvalidField {
            field: "max_marks",
            reason: "must be at least 1".to_string(),
        });
    }
    if uploads.is_empty() {
        return Err(GatewayError::MissingField("file"));
    }

    Ok(EvaluationForm {
        question,
        max_marks,
        uploads,
    })
}

async fn evaluate_one(
    ctx: &AppContext,
    question: &str,
    max_marks: u32,
    file: &upload::UploadedFile,
) -> GatewayResult<String> {
    let marks = max_marks.to_string();
    let prompt = prompts::render(
        prompts::EVALUATION_TEMPLATE,
        &[("question", question), ("max_marks", &marks)],
    );
    upload::relay_with_image(ctx, &prompt, file).await
}

fn sheet_name(file: &upload::UploadedFile, index: usize) -> String {
    file.filename
        .clone()
        .unwrap_or_else(|| format!("sheet-{}", index + 1))
}

/// `POST /evaluate-answer` — grade one answer-sheet image.
pub async fn evaluate_answer(
    State(ctx): State<Arc<AppContext>>,
    multipart: Multipart,
) -> Result<Json<EvaluationResponse>, GatewayError> {
    let form = read_evaluation_form(multipart).await?;
    if form.uploads.len() != 1 {
        return Err(GatewayError::InvalidField {
            field: "file",
            reason: format!("expected exactly one image, got {}", form.uploads.len()),
        });
    }
    let mut uploads = form.uploads;
    let file = uploads.pop().ok_or(GatewayError::MissingField("file"))?;

    let evaluation = evaluate_one(&ctx, &form.question, form.max_marks, &file).await?;

    tracing::info!(file = %file.display_name(), max_marks = form.max_marks, "served evaluation");
    Ok(Json(EvaluationResponse { evaluation }))
}

/// `POST /evaluate-batch` — grade several sheets in one sequential pass.
pub async fn evaluate_batch(
    State(ctx): State<Arc<AppContext>>,
    multipart: Multipart,
) -> Result<Json<BatchEvaluationResponse>, GatewayError> {
    let form = read_evaluation_form(multipart).await?;

    let mut results = Vec::with_capacity(form.uploads.len());
    for (index, file) in form.uploads.iter().enumerate() {
        let name = sheet_name(file, index);
        match evaluate_one(&ctx, &form.question, form.max_marks, file).await {
            Ok(text) => results.push(EvaluationResult::success(name, text)),
            Err(err) => {
                tracing::error!(sheet = %name, error = %err, "batch evaluation item failed");
                results.push(EvaluationResult::failure(name, error::client_message(&err)));
            }
        }
    }

    let failed = results.iter().filter(|r| r.error.is_some()).count();
    let evaluated = results.len() - failed;

    tracing::info!(total = results.len(), failed, "served batch evaluation");
    Ok(Json(BatchEvaluationResponse {
        results,
        evaluated,
        failed,
    }))
}
