//! Knowledge document upload handler.

use axum::extract::{Multipart, State};
use axum::Json;
use tracing::info;

use crate::error::ApiError;
use crate::schema::knowledge::KnowledgeUploadResponse;
use crate::state::AppState;

/// Stores a DV 2.1 methodology document for grounded generation.
///
/// `POST /api/knowledge/upload` (multipart, field `file`)
pub async fn upload_knowledge(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<KnowledgeUploadResponse>, ApiError> {
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
    let content = String::from_utf8_lossy(&bytes).into_owned();

    {
        let mut service = state.service.lock().await;
        service.record_knowledge(&filename, &content)?;
    }
    info!(%filename, chars = content.chars().count(), "stored knowledge document");

    Ok(Json(KnowledgeUploadResponse {
        success: true,
        message: "Knowledge document uploaded".to_string(),
    }))
}
