//! Schema types for the knowledge document upload endpoint.

use serde::Serialize;

/// Response for a stored knowledge document.
#[derive(Debug, Clone, Serialize)]
pub struct KnowledgeUploadResponse {
    /// Always `true` for successful responses.
    pub success: bool,
    /// Human-readable confirmation.
    pub message: String,
}
