//! Router assembly for the vaultsmith HTTP API.
//!
//! [`build_router`] wires all handler functions to their routes with
//! CORS and tracing middleware layers.

use axum::extract::DefaultBodyLimit;
use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::state::AppState;

/// Uploads are capped at 16 MiB, matching the OCR provider's limits.
const MAX_UPLOAD_BYTES: usize = 16 * 1024 * 1024;

/// Builds the complete axum router with all API routes.
///
/// Routes use axum 0.8 `/{param}` path syntax. CORS is permissive and
/// TraceLayer provides request-level logging via tracing.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::page::index))
        .route("/api/config/check", get(handlers::config::check_config))
        .route("/api/upload", post(handlers::upload::upload_schema))
        .route("/api/generate", post(handlers::generate::generate_model))
        .route(
            "/api/knowledge/upload",
            post(handlers::knowledge::upload_knowledge),
        )
        .route("/api/models", get(handlers::models::list_models))
        .route("/api/models/{id}", get(handlers::models::get_model))
        .layer(DefaultBodyLimit::max(MAX_UPLOAD_BYTES))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
