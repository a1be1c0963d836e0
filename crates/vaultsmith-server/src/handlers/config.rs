//! Configuration check handler.

use axum::extract::State;
use axum::Json;

use crate::schema::config::ConfigCheckResponse;
use crate::state::AppState;

/// Reports which provider API keys are configured.
///
/// `GET /api/config/check`
pub async fn check_config(State(state): State<AppState>) -> Json<ConfigCheckResponse> {
    Json(ConfigCheckResponse {
        ocr_configured: state.config.ocr.api_key.is_some(),
        groq_configured: state.config.llm.api_key.is_some(),
    })
}
