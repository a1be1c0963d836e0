//! Application state with shared `ModelService` for concurrent access.
//!
//! [`AppState`] wraps the service in `Arc<tokio::sync::Mutex<>>` for use with
//! axum handlers. Uses `tokio::sync::Mutex` (async-aware) instead of
//! `std::sync::Mutex` (blocking) so handlers await the lock without blocking
//! the tokio runtime.
//!
//! Note: `tokio::sync::RwLock` would allow concurrent reads, but
//! `ModelService` contains `rusqlite::Connection` which is `!Sync`,
//! preventing it from being held behind an `RwLock`. Handlers keep lock
//! scopes short and never hold the lock across a provider call.

use std::sync::Arc;

use crate::config::Config;
use crate::error::ApiError;
use crate::service::ModelService;

/// Shared application state for the HTTP server.
#[derive(Clone)]
pub struct AppState {
    /// The shared persistence service (async Mutex -- non-blocking await).
    pub service: Arc<tokio::sync::Mutex<ModelService>>,
    /// Immutable server configuration.
    pub config: Arc<Config>,
}

impl AppState {
    /// Creates a new `AppState` with a `ModelService` backed by the SQLite
    /// database path in `config`.
    pub fn new(config: Config) -> Result<Self, ApiError> {
        let service = ModelService::new(&config.db_path)?;
        Ok(AppState {
            service: Arc::new(tokio::sync::Mutex::new(service)),
            config: Arc::new(config),
        })
    }

    /// Creates a new `AppState` with an in-memory database (for testing).
    pub fn in_memory(config: Config) -> Result<Self, ApiError> {
        let service = ModelService::in_memory()?;
        Ok(AppState {
            service: Arc::new(tokio::sync::Mutex::new(service)),
            config: Arc::new(config),
        })
    }
}
