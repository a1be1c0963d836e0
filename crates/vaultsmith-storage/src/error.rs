//! Storage error types for vaultsmith-storage.

use thiserror::Error;

/// Errors produced by storage operations.
#[derive(Debug, Error)]
pub enum StorageError {
    /// The underlying SQLite operation failed.
    #[error("database error: {0}")]
    Database(#[from] rusqlite::Error),

    /// Applying schema migrations failed.
    #[error("migration error: {0}")]
    Migration(String),

    /// JSON serialization or deserialization failed.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// An OCR result with the given id was not found.
    #[error("ocr result not found: {0}")]
    OcrResultNotFound(i64),

    /// A model with the given id was not found.
    #[error("model not found: {0}")]
    ModelNotFound(i64),
}
