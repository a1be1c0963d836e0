//! Diagnostic types for API warning reporting.

use serde::Serialize;

use vaultsmith_check::RepairWarning;

/// A non-blocking diagnostic warning.
///
/// Warnings are informational -- a repaired model that produced warnings is
/// still persisted and returned.
#[derive(Debug, Clone, Serialize)]
pub struct DiagnosticWarning {
    /// Machine-readable warning code.
    pub code: String,
    /// Human-readable warning description.
    pub message: String,
}

impl From<&RepairWarning> for DiagnosticWarning {
    fn from(warning: &RepairWarning) -> Self {
        DiagnosticWarning {
            code: warning.code().to_string(),
            message: warning.to_string(),
        }
    }
}
