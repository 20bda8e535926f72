//! Fixed sample datasets for previewing output without a remote call.
//!
//! Samples are never written to history.

use crate::entities::{IntelligenceReport, LeadFinderResult};

const SAMPLE_REPORT_JSON: &str = include_str!("../fixtures/sample_report.json");
const SAMPLE_LEADS_JSON: &str = include_str!("../fixtures/sample_leads.json");

/// The "Acme Corp" demonstration report.
#[must_use]
pub fn sample_report() -> IntelligenceReport {
    decode(SAMPLE_REPORT_JSON)
}

/// A demonstration lead search for CTOs at 51-200 employee companies.
#[must_use]
pub fn sample_leads() -> LeadFinderResult {
    decode(SAMPLE_LEADS_JSON)
}

fn decode<T: serde::de::DeserializeOwned + Default>(raw: &str) -> T {
    serde_json::from_str(raw).unwrap_or_else(|error| {
        tracing::warn!(%error, "embedded sample failed to decode");
        T::default()
    })
}
