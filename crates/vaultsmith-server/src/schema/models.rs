//! Schema types for the model listing and lookup endpoints.

use serde::Serialize;
use serde_json::Value;

use vaultsmith_storage::ModelSummary;

/// Response listing stored models, newest first.
#[derive(Debug, Clone, Serialize)]
pub struct ModelListResponse {
    /// Stored models joined with their source filename.
    pub models: Vec<ModelSummary>,
}

/// Response carrying one stored model document.
#[derive(Debug, Clone, Serialize)]
pub struct GetModelResponse {
    /// Always `true` for successful responses.
    pub success: bool,
    /// The stored model document.
    pub model: Value,
}
