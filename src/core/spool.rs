//! Scratch storage for uploaded images.
//!
//! Uploads are written to a scratch directory under a collision-free name,
//! read back for base64 encoding, and removed once the upstream call
//! finishes. Removal is best-effort: a leftover file is logged, never
//! surfaced to the client.

use std::{
    io,
    path::{Path, PathBuf},
};

use base64::{engine::general_purpose::STANDARD, Engine as _};
use tokio::fs;
use uuid::Uuid;

use super::error::GatewayResult;

/// Fallback when the upload carries no content type.
pub const DEFAULT_MIME: &str = "image/jpeg";

#[derive(Debug, Clone)]
pub struct ImageSpool {
    root: PathBuf,
}

impl ImageSpool {
    /// Open the spool, creating the scratch directory if needed.
    pub async fn open(root: impl Into<PathBuf>) -> io::Result<Self> {
        let root = root.into();
        fs::create_dir_all(&root).await?;
        Ok(Self { root })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Persist an upload and hand back a handle to the spooled file.
    pub async fn stash(
        &self,
        filename: &str,
        mime_type: Option<String>,
        bytes: &[u8],
    ) -> GatewayResult<SpooledImage> {
        let path = self
            .root
            .join(format!("{}-{}", Uuid::new_v4(), safe_name(filename)));
        fs::write(&path, bytes).await?;
        tracing::debug!(path = %path.display(), size = bytes.len(), "spooled upload");
        Ok(SpooledImage {
            path,
            mime_type: mime_type.unwrap_or_else(|| DEFAULT_MIME.to_string()),
        })
    }
}

/// Reduce a client-supplied filename to a single safe path component.
fn safe_name(filename: &str) -> String {
    let base = Path::new(filename)
        .file_name()
        .and_then(|name| name.to_str())
        .unwrap_or("upload");
    base.chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || matches!(c, '.' | '-' | '_') {
                c
            } else {
                '_'
            }
        })
        .collect()
}

/// A spooled upload on disk.
#[derive(Debug)]
pub struct SpooledImage {
    path: PathBuf,
    mime_type: String,
}

impl SpooledImage {
    pub fn mime_type(&self) -> &str {
        &self.mime_type
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the spooled bytes back, base64-encoded for inline transport.
    pub async fn to_base64(&self) -> GatewayResult<String> {
        let bytes = fs::read(&self.path).await?;
        Ok(STANDARD.encode(bytes))
    }

    /// Remove the scratch file. Failure is logged, never surfaced.
    pub async fn discard(self) {
        if let Err(err) = fs::remove_file(&self.path).await {
            tracing::warn!(
                path = %self.path.display(),
                error = %err,
                "failed to remove spooled image"
            );
        }
    }
}
