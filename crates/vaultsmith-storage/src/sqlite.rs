//! SQLite implementation of [`ModelStore`].
//!
//! [`SqliteStore`] persists rows in a SQLite database with WAL mode and
//! automatic schema migrations. Model documents are stored as JSON TEXT
//! columns, written once and never updated.

use chrono::Utc;
use rusqlite::{params, Connection, OptionalExtension};

use crate::error::StorageError;
use crate::traits::ModelStore;
use crate::types::{KnowledgeDoc, ModelId, ModelSummary, OcrId, OcrRecord, StoredModel};

/// SQLite-backed implementation of [`ModelStore`].
pub struct SqliteStore {
    conn: Connection,
}

impl SqliteStore {
    /// Opens (or creates) a SQLite database at `path`.
    pub fn new(path: &str) -> Result<Self, StorageError> {
        let conn = crate::schema::open_database(path)?;
        Ok(SqliteStore { conn })
    }

    /// Opens an in-memory SQLite database (for testing).
    pub fn in_memory() -> Result<Self, StorageError> {
        let conn = crate::schema::open_in_memory()?;
        Ok(SqliteStore { conn })
    }

    /// Verifies an OCR result exists, returning an error if not.
    fn assert_ocr_exists(&self, id: OcrId) -> Result<(), StorageError> {
        let exists: bool = self.conn.query_row(
            "SELECT EXISTS(SELECT 1 FROM ocr_results WHERE id = ?1)",
            params![id.0],
            |row| row.get(0),
        )?;
        if !exists {
            return Err(StorageError::OcrResultNotFound(id.0));
        }
        Ok(())
    }
}

fn now_rfc3339() -> String {
    Utc::now().to_rfc3339()
}

impl ModelStore for SqliteStore {
    fn insert_ocr_result(
        &mut self,
        filename: &str,
        extracted_text: &str,
    ) -> Result<OcrId, StorageError> {
        self.conn.execute(
            "INSERT INTO ocr_results (filename, extracted_text, created_at) VALUES (?1, ?2, ?3)",
            params![filename, extracted_text, now_rfc3339()],
        )?;
        Ok(OcrId(self.conn.last_insert_rowid()))
    }

    fn get_ocr_result(&self, id: OcrId) -> Result<OcrRecord, StorageError> {
        self.conn
            .query_row(
                "SELECT id, filename, extracted_text, created_at FROM ocr_results WHERE id = ?1",
                params![id.0],
                |row| {
                    Ok(OcrRecord {
                        id: OcrId(row.get(0)?),
                        filename: row.get(1)?,
                        extracted_text: row.get(2)?,
                        created_at: row.get(3)?,
                    })
                },
            )
            .optional()?
            .ok_or(StorageError::OcrResultNotFound(id.0))
    }

    fn insert_model(
        &mut self,
        ocr_id: OcrId,
        model_json: &str,
        grounded: bool,
    ) -> Result<ModelId, StorageError> {
        self.assert_ocr_exists(ocr_id)?;
        self.conn.execute(
            "INSERT INTO dv_models (ocr_id, model_json, grounded, created_at)
             VALUES (?1, ?2, ?3, ?4)",
            params![ocr_id.0, model_json, grounded as i64, now_rfc3339()],
        )?;
        Ok(ModelId(self.conn.last_insert_rowid()))
    }

    fn get_model(&self, id: ModelId) -> Result<StoredModel, StorageError> {
        self.conn
            .query_row(
                "SELECT id, ocr_id, model_json, grounded, created_at
                 FROM dv_models WHERE id = ?1",
                params![id.0],
                |row| {
                    Ok(StoredModel {
                        id: ModelId(row.get(0)?),
                        ocr_id: OcrId(row.get(1)?),
                        model_json: row.get(2)?,
                        grounded: row.get::<_, i64>(3)? != 0,
                        created_at: row.get(4)?,
                    })
                },
            )
            .optional()?
            .ok_or(StorageError::ModelNotFound(id.0))
    }

    fn list_models(&self) -> Result<Vec<ModelSummary>, StorageError> {
        let mut stmt = self.conn.prepare(
            "SELECT m.id, m.ocr_id, o.filename, m.grounded, m.created_at
             FROM dv_models m
             JOIN ocr_results o ON m.ocr_id = o.id
             ORDER BY m.created_at DESC, m.id DESC",
        )?;
        let rows = stmt.query_map([], |row| {
            Ok(ModelSummary {
                id: ModelId(row.get(0)?),
                ocr_id: OcrId(row.get(1)?),
                filename: row.get(2)?,
                grounded: row.get::<_, i64>(3)? != 0,
                created_at: row.get(4)?,
            })
        })?;
        let mut models = Vec::new();
        for row in rows {
            models.push(row?);
        }
        Ok(models)
    }

    fn insert_knowledge_doc(&mut self, name: &str, content: &str) -> Result<i64, StorageError> {
        self.conn.execute(
            "INSERT INTO knowledge_docs (name, content, uploaded_at) VALUES (?1, ?2, ?3)",
            params![name, content, now_rfc3339()],
        )?;
        Ok(self.conn.last_insert_rowid())
    }

    fn latest_knowledge_doc(&self) -> Result<Option<KnowledgeDoc>, StorageError> {
        let doc = self
            .conn
            .query_row(
                "SELECT id, name, content, uploaded_at
                 FROM knowledge_docs ORDER BY uploaded_at DESC, id DESC LIMIT 1",
                [],
                |row| {
                    Ok(KnowledgeDoc {
                        id: row.get(0)?,
                        name: row.get(1)?,
                        content: row.get(2)?,
                        uploaded_at: row.get(3)?,
                    })
                },
            )
            .optional()?;
        Ok(doc)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store() -> SqliteStore {
        SqliteStore::in_memory().expect("failed to open in-memory store")
    }

    #[test]
    fn ocr_result_roundtrip() {
        let mut store = store();
        let id = store.insert_ocr_result("erd.png", "CUSTOMER(customer_id)").unwrap();
        let record = store.get_ocr_result(id).unwrap();
        assert_eq!(record.id, id);
        assert_eq!(record.filename, "erd.png");
        assert_eq!(record.extracted_text, "CUSTOMER(customer_id)");
        assert!(!record.created_at.is_empty());
    }

    #[test]
    fn missing_ocr_result_is_not_found() {
        let store = store();
        let err = store.get_ocr_result(OcrId(42)).unwrap_err();
        assert!(matches!(err, StorageError::OcrResultNotFound(42)));
    }

    #[test]
    fn model_roundtrip() {
        let mut store = store();
        let ocr_id = store.insert_ocr_result("erd.png", "text").unwrap();
        let json = r#"{"nodes":[{"id":"Hub_A","type":"hub"}],"edges":[]}"#;
        let id = store.insert_model(ocr_id, json, true).unwrap();

        let model = store.get_model(id).unwrap();
        assert_eq!(model.ocr_id, ocr_id);
        assert_eq!(model.model_json, json);
        assert!(model.grounded);
    }

    #[test]
    fn model_requires_existing_ocr_result() {
        let mut store = store();
        let err = store.insert_model(OcrId(7), "{}", false).unwrap_err();
        assert!(matches!(err, StorageError::OcrResultNotFound(7)));
    }

    #[test]
    fn missing_model_is_not_found() {
        let store = store();
        let err = store.get_model(ModelId(1)).unwrap_err();
        assert!(matches!(err, StorageError::ModelNotFound(1)));
    }

    #[test]
    fn list_models_newest_first_with_filename() {
        let mut store = store();
        let ocr_a = store.insert_ocr_result("a.png", "a").unwrap();
        let ocr_b = store.insert_ocr_result("b.png", "b").unwrap();
        let first = store.insert_model(ocr_a, "{}", false).unwrap();
        let second = store.insert_model(ocr_b, "{}", true).unwrap();

        let models = store.list_models().unwrap();
        assert_eq!(models.len(), 2);
        assert_eq!(models[0].id, second);
        assert_eq!(models[0].filename, "b.png");
        assert!(models[0].grounded);
        assert_eq!(models[1].id, first);
        assert_eq!(models[1].filename, "a.png");
    }

    #[test]
    fn latest_knowledge_doc_wins() {
        let mut store = store();
        assert!(store.latest_knowledge_doc().unwrap().is_none());

        store.insert_knowledge_doc("dv21-v1.md", "old guidance").unwrap();
        store.insert_knowledge_doc("dv21-v2.md", "new guidance").unwrap();

        let doc = store.latest_knowledge_doc().unwrap().unwrap();
        assert_eq!(doc.name, "dv21-v2.md");
        assert_eq!(doc.content, "new guidance");
    }
}
