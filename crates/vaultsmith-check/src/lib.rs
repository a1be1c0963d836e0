//! Validation and repair for generated Data Vault model documents.
//!
//! The generator upstream is an LLM and cannot be fully trusted: it omits
//! edges it was instructed to produce, references nodes that do not exist,
//! and occasionally returns something that is not a model at all. This crate
//! draws the line between the two cases:
//!
//! - [`validate_and_repair`] rejects structurally unusable documents with a
//!   [`MalformedModel`] error, and
//! - repairs structurally plausible ones, inserting the edges implied by
//!   satellite `parent` and link `connects` fields and reporting non-fatal
//!   issues as [`RepairWarning`]s.
//!
//! The repair pass is pure: no I/O, no shared state, single pass over nodes
//! and edges, and idempotent (repairing a repaired document is a no-op).

pub mod diagnostics;
pub mod error;
pub mod repair;

pub use diagnostics::RepairWarning;
pub use error::MalformedModel;
pub use repair::{validate_and_repair, RepairedModel, ValidationPolicy};
