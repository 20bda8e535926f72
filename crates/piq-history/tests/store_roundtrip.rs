use chrono::{TimeZone, Utc};
use piq_core::entities::{
    CompanyOverview, HistoryEntry, IntelligenceReport, LeadFinderResult, LeadHistoryEntry,
};
use piq_history::{
    FileStorage, HISTORY_CAP, INTEL_HISTORY_KEY, IntelHistory, LEAD_HISTORY_KEY, LeadHistory,
    MemoryStorage, Storage,
};
use pretty_assertions::assert_eq;

fn report(name: &str) -> IntelligenceReport {
    IntelligenceReport {
        company_overview: Some(CompanyOverview {
            company_name: Some(name.to_string()),
            industry: Some("Software".into()),
            ..Default::default()
        }),
        tech_summary: Some(format!("{name} runs on Rust")),
        ..Default::default()
    }
}

fn intel(name: &str, minute: u32) -> HistoryEntry {
    let ts = Utc.with_ymd_and_hms(2026, 1, 2, 3, minute, 0).unwrap();
    HistoryEntry::capture(name, &report(name), ts)
}

#[test]
fn file_store_survives_reopen() {
    let tmp = tempfile::TempDir::new().unwrap();
    let storage = FileStorage::new(tmp.path());

    let mut store = IntelHistory::open(storage.clone());
    store.record(intel("Acme", 1));
    store.record(intel("Globex", 2));
    store.record(intel("Acme", 3));
    let expected = store.entries().to_vec();

    let reopened = IntelHistory::open(storage);
    assert_eq!(reopened.entries(), expected.as_slice());
    assert_eq!(reopened.len(), 2);
    assert_eq!(reopened.entries()[0].company_name, "Acme");
    assert_eq!(reopened.entries()[0].timestamp.format("%M").to_string(), "03");
}

#[test]
fn persisted_list_never_exceeds_cap() {
    let storage = MemoryStorage::new();
    let mut store = IntelHistory::open(&storage);
    for i in 0..(HISTORY_CAP + 10) {
        store.record(intel(&format!("Company {i}"), 0));
    }
    assert_eq!(store.len(), HISTORY_CAP);

    let raw = storage.read(INTEL_HISTORY_KEY).unwrap().unwrap();
    let stored: Vec<serde_json::Value> = serde_json::from_str(&raw).unwrap();
    assert_eq!(stored.len(), HISTORY_CAP);
    assert_eq!(stored[0]["companyName"], "Company 59");
}

#[test]
fn oversized_stored_list_is_capped_on_load() {
    let storage = MemoryStorage::new();
    let many: Vec<HistoryEntry> = (0..70).map(|i| intel(&format!("C{i}"), 0)).collect();
    storage.insert_raw(INTEL_HISTORY_KEY, &serde_json::to_string(&many).unwrap());

    let store = IntelHistory::open(&storage);
    assert_eq!(store.len(), HISTORY_CAP);
    assert_eq!(store.entries()[0].company_name, "C0");
}

#[test]
fn corrupt_file_starts_empty_and_recovers() {
    let tmp = tempfile::TempDir::new().unwrap();
    let storage = FileStorage::new(tmp.path());
    std::fs::write(storage.path_for(INTEL_HISTORY_KEY), "{not json").unwrap();

    let mut store = IntelHistory::open(storage.clone());
    assert!(store.is_empty());

    store.record(intel("Acme", 0));
    assert_eq!(IntelHistory::open(storage).len(), 1);
}

#[test]
fn quota_failure_keeps_memory_state() {
    let storage = MemoryStorage::with_quota(16);
    let mut store = IntelHistory::open(&storage);
    store.record(intel("Acme", 0));

    assert_eq!(store.len(), 1);
    assert!(storage.raw(INTEL_HISTORY_KEY).is_none());
}

#[test]
fn intel_and_lead_histories_are_independent() {
    let storage = MemoryStorage::new();
    let ts = Utc.with_ymd_and_hms(2026, 1, 2, 3, 4, 5).unwrap();

    let mut intel_store = IntelHistory::open(&storage);
    let mut lead_store = LeadHistory::open(&storage);
    intel_store.record(intel("Acme", 0));
    lead_store.record(LeadHistoryEntry::capture("CTO", "51-200", &LeadFinderResult::default(), ts));
    lead_store.record(LeadHistoryEntry::capture("CTO", "11-50", &LeadFinderResult::default(), ts));
    lead_store.record(LeadHistoryEntry::capture("CTO", "51-200", &LeadFinderResult::default(), ts));

    assert_eq!(intel_store.len(), 1);
    assert_eq!(lead_store.len(), 2);
    assert_eq!(lead_store.entries()[0].employee_size, "51-200");
    assert!(storage.raw(LEAD_HISTORY_KEY).is_some());

    intel_store.remove(0);
    assert_eq!(LeadHistory::open(&storage).len(), 2);
    assert!(IntelHistory::open(&storage).is_empty());
}
