//! Multipart upload helpers shared by the image routes.

use axum::extract::Multipart;
use bytes::Bytes;

use crate::{
    app_context::AppContext,
    core::{GatewayError, GatewayResult, SpooledImage},
};

pub(crate) struct UploadedFile {
    /// Filename as sent by the client; `None` when the part carried none.
    pub filename: Option<String>,
    pub content_type: Option<String>,
    pub bytes: Bytes,
}

impl UploadedFile {
    /// Name for spooling and logs.
    pub fn display_name(&self) -> &str {
        self.filename.as_deref().unwrap_or("upload")
    }
}

/// Pull the single image part out of a multipart body.
///
/// Accepts a part named `file` or the first part carrying a filename.
pub(crate) async fn read_single_image(mut multipart: Multipart) -> GatewayResult<UploadedFile> {
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|err| GatewayError::Multipart(err.to_string()))?
    {
        let is_file = field.name() == Some("file") || field.file_name().is_some();
        if !is_file {
            continue;
        }

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
        return Ok(UploadedFile {
            filename,
            content_type,
            bytes,
        });
    }
    Err(GatewayError::MissingField("file"))
}

/// Spool → encode → invoke → best-effort cleanup, shared by every image route.
pub(crate) async fn relay_with_image(
    ctx: &AppContext,
    prompt: &str,
    upload: &UploadedFile,
) -> GatewayResult<String> {
    let image = ctx
        .spool
        .stash(
            upload.display_name(),
            upload.content_type.clone(),
            &upload.bytes,
        )
        .await?;
    let outcome = invoke(ctx, prompt, &image).await;
    image.discard().await;
    outcome
}

async fn invoke(ctx: &AppContext, prompt: &str, image: &SpooledImage) -> GatewayResult<String> {
    let encoded = image.to_base64().await?;
    ctx.client
        .generate_with_image(prompt, image.mime_type(), &encoded)
        .await
}
