//! # piq-export
//!
//! File exports for ProspectIQ results.
//!
//! - [`spreadsheet`]: lead lists as a SpreadsheetML 2003 workbook (`.xls`)
//! - [`json`]: pretty-printed intelligence reports and lead results
//! - [`filename`]: the suggested file names for both
//!
//! Everything here is pure except [`write_file`].

pub mod filename;
pub mod json;
pub mod spreadsheet;

mod error;

use std::path::Path;

pub use error::ExportError;

/// Write an export to `path`, creating parent directories as needed.
///
/// # Errors
///
/// Returns [`ExportError::Io`] if the directory or file cannot be written.
pub fn write_file(path: &Path, bytes: &[u8]) -> Result<(), ExportError> {
    let io_err = |source| ExportError::Io {
        path: path.to_path_buf(),
        source,
    };
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(io_err)?;
    }
    std::fs::write(path, bytes).map_err(io_err)?;
    tracing::debug!(path = %path.display(), bytes = bytes.len(), "export written");
    Ok(())
}
