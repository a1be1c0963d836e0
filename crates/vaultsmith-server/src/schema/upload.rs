//! Schema types for the schema-image upload endpoint.

use serde::Serialize;

use vaultsmith_storage::OcrId;

/// Response for a successful upload + OCR extraction.
#[derive(Debug, Clone, Serialize)]
pub struct UploadResponse {
    /// Always `true` for successful responses.
    pub success: bool,
    /// Id of the stored extraction, used by `/api/generate`.
    pub ocr_id: OcrId,
    /// Preview of the extracted text (first 500 characters).
    pub extracted_text: String,
}
