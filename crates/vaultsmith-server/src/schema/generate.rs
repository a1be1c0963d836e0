//! Schema types for the model generation endpoint.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use vaultsmith_storage::ModelId;

use super::diagnostics::DiagnosticWarning;

/// Request to generate a model from a stored OCR extraction.
#[derive(Debug, Clone, Deserialize)]
pub struct GenerateRequest {
    /// Id of the OCR extraction to model.
    pub ocr_id: i64,
    /// Ground the generation in the most recent knowledge document.
    #[serde(default)]
    pub grounded: bool,
}

/// Response carrying the repaired, persisted model document.
#[derive(Debug, Clone, Serialize)]
pub struct GenerateResponse {
    /// Always `true` for successful responses.
    pub success: bool,
    /// Id the model was persisted under.
    pub model_id: ModelId,
    /// The repaired model document.
    pub model: Value,
    /// Non-fatal issues found while repairing the document.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub warnings: Vec<DiagnosticWarning>,
}
