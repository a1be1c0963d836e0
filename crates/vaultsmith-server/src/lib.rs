//! HTTP server for the vaultsmith modeling backend.
//!
//! Request flow: axum router -> handler -> [`service::ModelService`] for
//! persistence, with the OCR and LLM collaborators called from handlers via
//! the [`ocr`] and [`llm`] clients. Generated documents pass through
//! `vaultsmith_check::validate_and_repair` before they are stored.

pub mod config;
pub mod error;
pub mod handlers;
pub mod llm;
pub mod ocr;
pub mod router;
pub mod schema;
pub mod service;
pub mod state;
