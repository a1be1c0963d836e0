//! Storage-layer identity and row types.
//!
//! Ids are defined here (not in vaultsmith-core) because identity is a
//! storage concern: an extraction or a model only gains an id when persisted.
//! The inner `i64` aligns with SQLite's `INTEGER PRIMARY KEY`.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Unique identifier for a stored OCR extraction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct OcrId(pub i64);

impl fmt::Display for OcrId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "OcrId({})", self.0)
    }
}

/// Unique identifier for a stored model document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ModelId(pub i64);

impl fmt::Display for ModelId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ModelId({})", self.0)
    }
}

/// A stored OCR extraction.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OcrRecord {
    /// Extraction identifier.
    pub id: OcrId,
    /// Original upload filename.
    pub filename: String,
    /// Text the OCR service extracted.
    pub extracted_text: String,
    /// RFC 3339 creation timestamp.
    pub created_at: String,
}

/// Summary of a stored model (for listing), joined with the source filename.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModelSummary {
    /// Model identifier.
    pub id: ModelId,
    /// The OCR extraction this model was generated from.
    pub ocr_id: OcrId,
    /// Filename of the originating upload.
    pub filename: String,
    /// Whether generation was grounded by a knowledge document.
    pub grounded: bool,
    /// RFC 3339 creation timestamp.
    pub created_at: String,
}

/// A stored model row, with the document still as JSON text.
#[derive(Debug, Clone)]
pub struct StoredModel {
    /// Model identifier.
    pub id: ModelId,
    /// The OCR extraction this model was generated from.
    pub ocr_id: OcrId,
    /// The repaired document, serialized.
    pub model_json: String,
    /// Whether generation was grounded by a knowledge document.
    pub grounded: bool,
    /// RFC 3339 creation timestamp.
    pub created_at: String,
}

/// A stored methodology document used for grounded generation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KnowledgeDoc {
    /// Row identifier.
    pub id: i64,
    /// Original upload filename.
    pub name: String,
    /// Document text.
    pub content: String,
    /// RFC 3339 upload timestamp.
    pub uploaded_at: String,
}
