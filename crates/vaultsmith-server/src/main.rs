//! Binary entrypoint for the vaultsmith HTTP server.
//!
//! Reads configuration from environment variables:
//! - `VAULTSMITH_DB_PATH`: SQLite database file path (default: "vaultsmith.db")
//! - `VAULTSMITH_PORT`: Server listen port (default: "5000")
//! - `OCR_SPACE_KEY` / `GROQ_API_KEY`: provider API keys

use vaultsmith_server::config::Config;
use vaultsmith_server::router::build_router;
use vaultsmith_server::state::AppState;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt::init();

    let config = Config::from_env();
    let addr = format!("0.0.0.0:{}", config.port);
    tracing::info!(
        ocr_configured = config.ocr.api_key.is_some(),
        groq_configured = config.llm.api_key.is_some(),
        strict_validation = config.strict_validation,
        "vaultsmith server starting on {}",
        addr
    );

    let state = AppState::new(config)
        .expect("Failed to initialize application state");

    let app = build_router(state);

    let listener = tokio::net::TcpListener::bind(&addr).await.unwrap();
    axum::serve(listener, app).await.unwrap();
}
