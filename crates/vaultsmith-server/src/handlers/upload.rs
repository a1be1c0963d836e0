//! Schema image upload handler: multipart file -> OCR -> stored extraction.

use axum::extract::{Multipart, State};
use axum::Json;
use tracing::info;

use crate::error::ApiError;
use crate::ocr;
use crate::schema::upload::UploadResponse;
use crate::state::AppState;

const ALLOWED_EXTENSIONS: [&str; 5] = ["png", "jpg", "jpeg", "pdf", "gif"];

/// Extracted-text preview length in the upload response.
const PREVIEW_CHARS: usize = 500;

/// Accepts a schema image, runs OCR, and stores the extracted text.
///
/// `POST /api/upload` (multipart, field `file`)
pub async fn upload_schema(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<UploadResponse>, ApiError> {
    let mut file: Option<(String, Vec<u8>)> = None;
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|err| ApiError::BadRequest(format!("invalid multipart request: {}", err)))?
    {
        if field.name() == Some("file") {
            let filename = field.file_name().unwrap_or_default().to_string();
            let bytes = field
                .bytes()
                .await
                .map_err(|err| ApiError::BadRequest(format!("failed to read upload: {}", err)))?;
            file = Some((filename, bytes.to_vec()));
        }
    }

    let Some((filename, bytes)) = file else {
        return Err(ApiError::BadRequest("no file uploaded".to_string()));
    };
    if filename.is_empty() {
        return Err(ApiError::BadRequest("no file selected".to_string()));
    }
    if !allowed_file(&filename) {
        return Err(ApiError::BadRequest(
            "invalid file type. Allowed: PNG, JPG, JPEG, PDF, GIF".to_string(),
        ));
    }

    // The provider call happens before the service lock is taken.
    let extracted = ocr::extract_text(&state.config.ocr, &filename, bytes).await?;

    let ocr_id = {
        let mut service = state.service.lock().await;
        service.record_extraction(&filename, &extracted)?
    };
    info!(%ocr_id, %filename, chars = extracted.chars().count(), "stored OCR extraction");

    Ok(Json(UploadResponse {
        success: true,
        ocr_id,
        extracted_text: preview(&extracted, PREVIEW_CHARS),
    }))
}

/// Extension allow-list check, case-insensitive.
fn allowed_file(filename: &str) -> bool {
    filename
        .rsplit_once('.')
        .map(|(_, ext)| ALLOWED_EXTENSIONS.contains(&ext.to_ascii_lowercase().as_str()))
        .unwrap_or(false)
}

fn preview(text: &str, limit: usize) -> String {
    if text.chars().count() <= limit {
        return text.to_string();
    }
    text.chars().take(limit).collect::<String>() + "..."
}
