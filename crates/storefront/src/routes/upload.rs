//! Product image upload.
//!
//! Accepts a multipart form with a `product` file field, stores it under
//! the configured upload directory with a timestamped name, and returns the
//! public URL it will be served from (the `/images` static mount).

use std::path::Path;

use axum::{Json, extract::Multipart, extract::State};
use chrono::Utc;
use serde::Serialize;

use crate::error::{AppError, Result};
use crate::state::AppState;

/// Name of the multipart field carrying the image.
const FILE_FIELD: &str = "product";

/// Response for a successful upload.
#[derive(Debug, Serialize)]
pub struct UploadResponse {
    /// On the wire this endpoint reports the integer `1`, not a boolean.
    pub success: u8,
    pub image_url: String,
}

/// Derive the stored filename: `product_<millis><original extension>`.
fn stored_filename(original: Option<&str>) -> String {
    let ext = original
        .map(Path::new)
        .and_then(Path::extension)
        .and_then(|e| e.to_str())
        .map(|e| format!(".{e}"))
        .unwrap_or_default();

    format!("{FILE_FIELD}_{}{ext}", Utc::now().timestamp_millis())
}

/// Handle a multipart image upload.
pub async fn upload(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<UploadResponse>> {
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::BadRequest(e.to_string()))?
    {
        if field.name() != Some(FILE_FIELD) {
            continue;
        }

        let filename = stored_filename(field.file_name());
        let data = field
            .bytes()
            .await
            .map_err(|e| AppError::BadRequest(e.to_string()))?;

        let dir = &state.config().upload_dir;
        tokio::fs::create_dir_all(dir)
            .await
            .map_err(|e| AppError::Internal(format!("creating upload dir: {e}")))?;
        tokio::fs::write(dir.join(&filename), &data)
            .await
            .map_err(|e| AppError::Internal(format!("writing upload: {e}")))?;

        let base = state.config().base_url.trim_end_matches('/');
        return Ok(Json(UploadResponse {
            success: 1,
            image_url: format!("{base}/images/{filename}"),
        }));
    }

    Err(AppError::BadRequest(format!(
        "missing file field '{FILE_FIELD}'"
    )))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stored_filename_keeps_extension() {
        let name = stored_filename(Some("shirt.png"));
        assert!(name.starts_with("product_"));
        assert!(name.ends_with(".png"));
    }

    #[test]
    fn test_stored_filename_without_extension() {
        let name = stored_filename(None);
        assert!(name.starts_with("product_"));
        assert!(!name.contains('.'));
    }
}
