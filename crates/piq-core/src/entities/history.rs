use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::{IntelligenceReport, LeadFinderResult};

/// A persisted snapshot of one company-research query.
///
/// Identity key: `company_name`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct HistoryEntry {
    pub company_name: String,
    pub timestamp: DateTime<Utc>,
    pub data: IntelligenceReport,
}

impl HistoryEntry {
    /// Capture a report under the name the agent reported, falling back to
    /// the name the user typed.
    #[must_use]
    pub fn capture(query_name: &str, report: &IntelligenceReport, timestamp: DateTime<Utc>) -> Self {
        let company_name = report
            .company_name()
            .map_or_else(|| query_name.trim().to_string(), str::to_string);
        Self {
            company_name,
            timestamp,
            data: report.clone(),
        }
    }
}

/// A persisted snapshot of one lead search.
///
/// Identity key: the (`designation`, `employee_size`) pair.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct LeadHistoryEntry {
    pub designation: String,
    pub employee_size: String,
    pub timestamp: DateTime<Utc>,
    pub data: LeadFinderResult,
}

impl LeadHistoryEntry {
    #[must_use]
    pub fn capture(
        designation: &str,
        employee_size: &str,
        result: &LeadFinderResult,
        timestamp: DateTime<Utc>,
    ) -> Self {
        Self {
            designation: designation.trim().to_string(),
            employee_size: employee_size.trim().to_string(),
            timestamp,
            data: result.clone(),
        }
    }
}
