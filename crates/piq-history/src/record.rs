//! What a history store needs to know about its entries.

use chrono::{DateTime, Utc};
use piq_core::entities::{HistoryEntry, LeadHistoryEntry};
use serde::Serialize;
use serde::de::DeserializeOwned;

/// Storage key of the company-research history.
pub const INTEL_HISTORY_KEY: &str = "prospectiq_history";

/// Storage key of the lead-search history.
pub const LEAD_HISTORY_KEY: &str = "prospectiq_lead_history";

/// An entry that can live in a [`HistoryStore`](crate::HistoryStore).
pub trait HistoryRecord: Clone + Serialize + DeserializeOwned {
    /// Key the list is persisted under.
    const STORAGE_KEY: &'static str;

    /// Deduplication key. Two entries with equal identity never coexist.
    type Key: PartialEq;

    fn identity(&self) -> Self::Key;

    /// Human-readable label, also the text history filtering matches against.
    fn label(&self) -> String;

    fn timestamp(&self) -> DateTime<Utc>;
}

impl HistoryRecord for HistoryEntry {
    const STORAGE_KEY: &'static str = INTEL_HISTORY_KEY;
    type Key = String;

    fn identity(&self) -> String {
        self.company_name.clone()
    }

    fn label(&self) -> String {
        self.company_name.clone()
    }

    fn timestamp(&self) -> DateTime<Utc> {
        self.timestamp
    }
}

impl HistoryRecord for LeadHistoryEntry {
    const STORAGE_KEY: &'static str = LEAD_HISTORY_KEY;
    type Key = (String, String);

    fn identity(&self) -> (String, String) {
        (self.designation.clone(), self.employee_size.clone())
    }

    fn label(&self) -> String {
        format!("{} · {}", self.designation, self.employee_size)
    }

    fn timestamp(&self) -> DateTime<Utc> {
        self.timestamp
    }
}

#[cfg(test)]
mod tests {
    use chrono::Utc;
    use piq_core::entities::{IntelligenceReport, LeadFinderResult};

    use super::*;

    #[test]
    fn lead_identity_is_designation_and_size() {
        let a = LeadHistoryEntry::capture("CTO", "51-200", &LeadFinderResult::default(), Utc::now());
        let b = LeadHistoryEntry::capture("CTO", "11-50", &LeadFinderResult::default(), Utc::now());
        assert_ne!(a.identity(), b.identity());
        assert_eq!(a.label(), "CTO · 51-200");
    }

    #[test]
    fn intel_identity_is_company_name() {
        let entry = HistoryEntry::capture("Acme", &IntelligenceReport::default(), Utc::now());
        assert_eq!(entry.identity(), "Acme");
        assert_eq!(entry.label(), "Acme");
    }
}
