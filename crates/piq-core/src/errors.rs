//! Cross-cutting error types for ProspectIQ.
//!
//! Domain-specific errors (e.g., `HistoryError`, `AgentError`) are defined in
//! their respective crates. They converge in `piq-cli` through `anyhow`.

use thiserror::Error;

/// Errors that can be raised by any ProspectIQ crate.
#[derive(Debug, Error)]
pub enum CoreError {
    /// A value is not one of the fixed employee-size buckets.
    #[error("Invalid employee size '{0}' (expected one of: 1-10, 11-50, 51-200, 201-500, 501-1000, 1001-5000, 5000+)")]
    InvalidEmployeeSize(String),

    /// A required input was empty or otherwise unusable.
    #[error("Validation error: {0}")]
    Validation(String),

    /// JSON encoding or decoding failed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
