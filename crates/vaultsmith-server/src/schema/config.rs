//! Schema types for the configuration check endpoint.

use serde::Serialize;

/// Which provider keys are configured.
#[derive(Debug, Clone, Serialize)]
pub struct ConfigCheckResponse {
    /// `OCR_SPACE_KEY` is set.
    pub ocr_configured: bool,
    /// `GROQ_API_KEY` is set.
    pub groq_configured: bool,
}
