//! Model listing and lookup handlers.

use axum::extract::{Path, State};
use axum::Json;

use vaultsmith_storage::ModelId;

use crate::error::ApiError;
use crate::schema::models::{GetModelResponse, ModelListResponse};
use crate::state::AppState;

/// Lists all stored models, newest first.
///
/// `GET /api/models`
pub async fn list_models(
    State(state): State<AppState>,
) -> Result<Json<ModelListResponse>, ApiError> {
    let service = state.service.lock().await;
    let models = service.list_models()?;
    Ok(Json(ModelListResponse { models }))
}

/// Returns one stored model document by id.
///
/// `GET /api/models/{id}`
pub async fn get_model(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<GetModelResponse>, ApiError> {
    let service = state.service.lock().await;
    let model = service.model_document(ModelId(id))?;
    Ok(Json(GetModelResponse {
        success: true,
        model,
    }))
}
