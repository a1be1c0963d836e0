//! ModelService: the coordinator between HTTP handlers and the
//! check/storage crates.
//!
//! Handlers are thin wrappers that delegate to these methods. Provider calls
//! (OCR, LLM) happen in the handlers *between* service calls so the service
//! lock is never held across network I/O.

use serde_json::Value;

use vaultsmith_core::DvModel;
use vaultsmith_storage::{
    KnowledgeDoc, ModelId, ModelStore, ModelSummary, OcrId, OcrRecord, SqliteStore,
};

use crate::error::ApiError;

/// The central service for persistence of extractions, models, and
/// knowledge documents.
pub struct ModelService {
    store: SqliteStore,
}

impl ModelService {
    /// Creates a new ModelService, opening a SQLite database at `db_path`.
    pub fn new(db_path: &str) -> Result<Self, ApiError> {
        let store = SqliteStore::new(db_path)
            .map_err(|e| ApiError::InternalError(format!("failed to open database: {}", e)))?;
        Ok(ModelService { store })
    }

    /// Creates a new ModelService with an in-memory database (for testing).
    pub fn in_memory() -> Result<Self, ApiError> {
        let store = SqliteStore::in_memory()
            .map_err(|e| ApiError::InternalError(format!("failed to open database: {}", e)))?;
        Ok(ModelService { store })
    }

    /// Persists an OCR extraction.
    pub fn record_extraction(&mut self, filename: &str, text: &str) -> Result<OcrId, ApiError> {
        Ok(self.store.insert_ocr_result(filename, text)?)
    }

    /// Loads a stored OCR extraction.
    pub fn extraction(&self, id: OcrId) -> Result<OcrRecord, ApiError> {
        Ok(self.store.get_ocr_result(id)?)
    }

    /// Persists a repaired model document.
    pub fn persist_model(
        &mut self,
        ocr_id: OcrId,
        model: &DvModel,
        grounded: bool,
    ) -> Result<ModelId, ApiError> {
        let model_json = serde_json::to_string(model)
            .map_err(|e| ApiError::InternalError(format!("failed to serialize model: {}", e)))?;
        Ok(self.store.insert_model(ocr_id, &model_json, grounded)?)
    }

    /// Loads a stored model document, parsed back from its JSON text.
    pub fn model_document(&self, id: ModelId) -> Result<Value, ApiError> {
        let stored = self.store.get_model(id)?;
        serde_json::from_str(&stored.model_json)
            .map_err(|e| ApiError::InternalError(format!("stored model is not valid JSON: {}", e)))
    }

    /// Lists stored models, newest first.
    pub fn list_models(&self) -> Result<Vec<ModelSummary>, ApiError> {
        Ok(self.store.list_models()?)
    }

    /// Persists a knowledge document.
    pub fn record_knowledge(&mut self, name: &str, content: &str) -> Result<i64, ApiError> {
        Ok(self.store.insert_knowledge_doc(name, content)?)
    }

    /// Returns the most recently uploaded knowledge document, if any.
    pub fn latest_knowledge(&self) -> Result<Option<KnowledgeDoc>, ApiError> {
        Ok(self.store.latest_knowledge_doc()?)
    }
}
