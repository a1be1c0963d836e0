//! OCR.space client for schema image text extraction.
//!
//! Posts the uploaded image as multipart form data and unwraps the parsed
//! text from the provider's envelope. Provider failures map to
//! [`ApiError::Upstream`]; a missing key is the caller's configuration
//! problem and maps to [`ApiError::BadRequest`].

use std::time::Duration;

use serde::Deserialize;
use serde_json::Value;

use crate::config::OcrConfig;
use crate::error::ApiError;

/// Provider-side processing window. OCR of a large scan is slow.
const OCR_TIMEOUT: Duration = Duration::from_secs(120);

#[derive(Debug, Deserialize)]
struct OcrParseResponse {
    #[serde(rename = "IsErroredOnProcessing", default)]
    is_errored_on_processing: bool,
    #[serde(rename = "ErrorMessage", default)]
    error_message: Option<Value>,
    #[serde(rename = "ParsedResults", default)]
    parsed_results: Vec<OcrParsedResult>,
}

#[derive(Debug, Deserialize)]
struct OcrParsedResult {
    #[serde(rename = "ParsedText", default)]
    parsed_text: String,
}

/// Extracts text from an uploaded schema image via OCR.space.
pub async fn extract_text(
    config: &OcrConfig,
    filename: &str,
    bytes: Vec<u8>,
) -> Result<String, ApiError> {
    let Some(api_key) = config.api_key.as_deref() else {
        return Err(ApiError::BadRequest(
            "OCR_SPACE_KEY is not configured".to_string(),
        ));
    };

    let part = reqwest::multipart::Part::bytes(bytes).file_name(filename.to_string());
    let form = reqwest::multipart::Form::new()
        .part("file", part)
        .text("apikey", api_key.to_string())
        .text("language", "eng")
        .text("isOverlayRequired", "false")
        .text("detectOrientation", "true")
        .text("scale", "true")
        .text("OCREngine", "2");

    let client = reqwest::Client::builder()
        .timeout(OCR_TIMEOUT)
        .build()
        .map_err(|err| ApiError::InternalError(format!("failed to build HTTP client: {}", err)))?;

    let response = client
        .post(config.endpoint.as_str())
        .multipart(form)
        .send()
        .await
        .map_err(|err| ApiError::Upstream(format!("OCR request failed: {}", err)))?;

    let status = response.status();
    let body = response
        .text()
        .await
        .map_err(|err| ApiError::Upstream(format!("OCR response read failed: {}", err)))?;

    if !status.is_success() {
        return Err(ApiError::Upstream(format!(
            "OCR request failed ({}): {}",
            status, body
        )));
    }

    let parsed: OcrParseResponse = serde_json::from_str(&body)
        .map_err(|err| ApiError::Upstream(format!("OCR response parse failed: {}", err)))?;

    parsed_text(parsed)
}

/// Unwraps the extracted text from the provider envelope.
fn parsed_text(response: OcrParseResponse) -> Result<String, ApiError> {
    if response.is_errored_on_processing {
        return Err(ApiError::Upstream(format!(
            "OCR processing failed: {}",
            error_message_text(response.error_message.as_ref())
        )));
    }

    let Some(first) = response.parsed_results.first() else {
        return Err(ApiError::Upstream("no OCR results returned".to_string()));
    };

    if first.parsed_text.is_empty() {
        return Err(ApiError::Upstream(
            "OCR extracted empty text - try a clearer image".to_string(),
        ));
    }

    Ok(first.parsed_text.clone())
}

/// The provider reports `ErrorMessage` as either a string or a list of
/// strings.
fn error_message_text(message: Option<&Value>) -> String {
    match message {
        Some(Value::String(s)) => s.clone(),
        Some(Value::Array(items)) => items
            .iter()
            .filter_map(Value::as_str)
            .collect::<Vec<_>>()
            .join("; "),
        _ => "OCR processing failed".to_string(),
    }
}
