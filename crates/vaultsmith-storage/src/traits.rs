//! The [`ModelStore`] trait defining the storage contract.
//!
//! Handlers and the CLI depend on this trait rather than on a concrete
//! backend. Models are write-once: there is deliberately no update or delete
//! for `dv_models` rows.

use crate::error::StorageError;
use crate::types::{KnowledgeDoc, ModelId, ModelSummary, OcrId, OcrRecord, StoredModel};

/// Storage contract for OCR extractions, models, and knowledge documents.
pub trait ModelStore {
    /// Persists an OCR extraction and returns its id.
    fn insert_ocr_result(
        &mut self,
        filename: &str,
        extracted_text: &str,
    ) -> Result<OcrId, StorageError>;

    /// Loads a stored OCR extraction.
    fn get_ocr_result(&self, id: OcrId) -> Result<OcrRecord, StorageError>;

    /// Persists a repaired model document (as JSON text) and returns its id.
    fn insert_model(
        &mut self,
        ocr_id: OcrId,
        model_json: &str,
        grounded: bool,
    ) -> Result<ModelId, StorageError>;

    /// Loads a stored model row.
    fn get_model(&self, id: ModelId) -> Result<StoredModel, StorageError>;

    /// Lists stored models, newest first, joined with the source filename.
    fn list_models(&self) -> Result<Vec<ModelSummary>, StorageError>;

    /// Persists a knowledge document and returns its row id.
    fn insert_knowledge_doc(&mut self, name: &str, content: &str) -> Result<i64, StorageError>;

    /// Returns the most recently uploaded knowledge document, if any.
    fn latest_knowledge_doc(&self) -> Result<Option<KnowledgeDoc>, StorageError>;
}
