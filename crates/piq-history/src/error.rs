//! History persistence error types.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum HistoryError {
    /// Reading or writing the backing file failed.
    #[error("I/O error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The encoded history does not fit the storage quota.
    #[error("storage quota exceeded for '{key}': {needed} bytes > {quota} bytes")]
    QuotaExceeded {
        key: String,
        needed: usize,
        quota: usize,
    },

    /// Encoding or decoding the history payload failed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// The stored payload is valid JSON but not an array.
    #[error("stored history for '{key}' is not an array")]
    NotAnArray { key: String },
}
