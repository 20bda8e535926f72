//! Pretty-printed JSON exports.

use piq_core::entities::{IntelligenceReport, LeadFinderResult};
use serde::Serialize;

use crate::error::ExportError;

/// Serialize any export payload with two-space indentation.
///
/// # Errors
///
/// Returns [`ExportError::Json`] if serialization fails.
pub fn to_pretty<T: Serialize>(value: &T) -> Result<Vec<u8>, ExportError> {
    let mut bytes = serde_json::to_vec_pretty(value)?;
    bytes.push(b'\n');
    Ok(bytes)
}

/// # Errors
///
/// Returns [`ExportError::Json`] if serialization fails.
pub fn report(report: &IntelligenceReport) -> Result<Vec<u8>, ExportError> {
    to_pretty(report)
}

/// # Errors
///
/// Returns [`ExportError::Json`] if serialization fails.
pub fn leads(result: &LeadFinderResult) -> Result<Vec<u8>, ExportError> {
    to_pretty(result)
}

#[cfg(test)]
mod tests {
    use piq_core::sample::sample_report;
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn report_export_decodes_back_to_same_report() {
        let original = sample_report();
        let bytes = report(&original).unwrap();
        let decoded: IntelligenceReport = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(decoded, original);
    }

    #[test]
    fn absent_fields_are_null() {
        let bytes = leads(&LeadFinderResult::default()).unwrap();
        let value: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert!(value["summary"].is_null());
        assert_eq!(value["companies"], serde_json::json!([]));
        assert!(String::from_utf8(bytes).unwrap().contains("\n  \"search_query\""));
    }
}
