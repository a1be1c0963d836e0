//! The single fatal error kind for model validation.
//!
//! Uses `thiserror` for structured, matchable variants. Every variant means
//! the same thing to the caller: the document is structurally unusable and
//! repair cannot proceed. Everything less severe is a
//! [`RepairWarning`](crate::diagnostics::RepairWarning), not an error.

use thiserror::Error;

/// A generated document that cannot be treated as a model.
#[derive(Debug, Error)]
pub enum MalformedModel {
    /// The decoded value is not a JSON object.
    #[error("model is not a JSON object")]
    NotAnObject,

    /// The object has no `nodes` field.
    #[error("model is missing a \"nodes\" field")]
    MissingNodes,

    /// The `nodes` field is not an array.
    #[error("model field \"nodes\" is not an array")]
    NodesNotAnArray,

    /// The `nodes` array is empty.
    #[error("model has an empty \"nodes\" array")]
    EmptyNodes,

    /// A node element is not a JSON object.
    #[error("node at index {index} is not an object")]
    NodeNotAnObject { index: usize },

    /// A node lacks a non-empty string `id`.
    #[error("node at index {index} is missing a non-empty \"id\"")]
    MissingId { index: usize },

    /// A node lacks a `type` field.
    #[error("node \"{id}\" is missing a \"type\" field")]
    MissingType { id: String },

    /// A node's `type` is not `hub`, `link`, or `satellite`.
    #[error("node \"{id}\" has unrecognized type \"{kind}\"")]
    UnknownType { id: String, kind: String },

    /// Strict policy: a node id does not carry the prefix its kind requires.
    #[error("{kind} node \"{id}\" does not start with \"{expected}\"")]
    PrefixMismatch {
        id: String,
        kind: String,
        expected: &'static str,
    },

    /// Strict policy: a node lacks the `reasoning` field.
    #[error("node \"{id}\" is missing a \"reasoning\" field")]
    MissingReasoning { id: String },

    /// The document passed shape checks but still failed to decode as a
    /// model (for example, an edge without `from`/`to`, or `connects`
    /// holding non-strings).
    #[error("model failed to decode: {0}")]
    Decode(#[from] serde_json::Error),
}
