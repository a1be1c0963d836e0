//! Model generation handler: stored OCR text -> LLM -> repair -> persist.

use axum::extract::State;
use axum::Json;
use serde_json::Value;
use tracing::{info, warn};

use vaultsmith_check::validate_and_repair;
use vaultsmith_storage::OcrId;

use crate::error::ApiError;
use crate::llm;
use crate::schema::diagnostics::DiagnosticWarning;
use crate::schema::generate::{GenerateRequest, GenerateResponse};
use crate::state::AppState;

/// Generates a Data Vault model from a stored OCR extraction.
///
/// `POST /api/generate`
///
/// The LLM's response is repaired before persistence, so every stored model
/// satisfies the edge invariants. A structurally unusable response maps to
/// 422; the caller may retry the generation, this handler never does.
pub async fn generate_model(
    State(state): State<AppState>,
    Json(req): Json<GenerateRequest>,
) -> Result<Json<GenerateResponse>, ApiError> {
    let ocr_id = OcrId(req.ocr_id);

    // Resolve the extraction first so an unknown id is a 404 regardless of
    // provider configuration.
    let record = {
        let service = state.service.lock().await;
        service.extraction(ocr_id)?
    };

    let knowledge = if req.grounded {
        let doc = {
            let service = state.service.lock().await;
            service.latest_knowledge()?
        };
        if doc.is_none() {
            warn!("grounded generation requested but no knowledge document is stored");
        }
        doc.map(|d| d.content)
    } else {
        None
    };

    // Provider call with no lock held.
    let content =
        llm::generate_model(&state.config.llm, &record.extracted_text, knowledge.as_deref())
            .await?;
    let stripped = llm::strip_code_fences(&content);
    let doc: Value = serde_json::from_str(&stripped).map_err(|err| {
        ApiError::Upstream(format!("model response was not valid JSON: {}", err))
    })?;

    let repaired = validate_and_repair(doc, state.config.validation_policy())?;
    for warning in &repaired.warnings {
        warn!(code = warning.code(), "model repair: {}", warning);
    }

    let model_id = {
        let mut service = state.service.lock().await;
        service.persist_model(ocr_id, &repaired.model, req.grounded)?
    };
    info!(
        %model_id,
        %ocr_id,
        nodes = repaired.model.nodes.len(),
        added_edges = repaired.added_edges,
        grounded = req.grounded,
        "stored generated model"
    );

    let model = serde_json::to_value(&repaired.model)
        .map_err(|err| ApiError::InternalError(format!("failed to serialize model: {}", err)))?;

    Ok(Json(GenerateResponse {
        success: true,
        model_id,
        model,
        warnings: repaired.warnings.iter().map(DiagnosticWarning::from).collect(),
    }))
}
