use piq_core::entities::{HistoryEntry, LeadHistoryEntry};

use crate::record::HistoryRecord;
use crate::storage::Storage;
use crate::{ops, persist};

/// A capped, most-recent-first history backed by a [`Storage`].
///
/// The in-memory list is authoritative. Every mutation is written through to
/// storage on a best-effort basis; a failed write is logged and the session
/// carries on with the in-memory state.
#[derive(Debug)]
pub struct HistoryStore<E, S> {
    storage: S,
    entries: Vec<E>,
}

/// Company-research history.
pub type IntelHistory<S> = HistoryStore<HistoryEntry, S>;

/// Lead-search history.
pub type LeadHistory<S> = HistoryStore<LeadHistoryEntry, S>;

impl<E: HistoryRecord, S: Storage> HistoryStore<E, S> {
    /// Load whatever `storage` holds for this entry type.
    pub fn open(storage: S) -> Self {
        let entries = persist::load(&storage);
        tracing::debug!(key = E::STORAGE_KEY, count = entries.len(), "history loaded");
        Self { storage, entries }
    }

    #[must_use]
    pub fn entries(&self) -> &[E] {
        &self.entries
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<&E> {
        self.entries.get(index)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Insert `entry` at the front, replacing any entry with the same identity.
    pub fn record(&mut self, entry: E) {
        self.entries = ops::upsert_front(&self.entries, entry, E::identity);
        persist::save(&self.storage, &self.entries);
    }

    /// Remove the entry at `index`. Returns `false` when out of range.
    pub fn remove(&mut self, index: usize) -> bool {
        if index >= self.entries.len() {
            return false;
        }
        self.entries = ops::remove(&self.entries, index);
        persist::save(&self.storage, &self.entries);
        true
    }

    /// Entries whose label contains `query`, case-insensitively, paired with
    /// their position in the full list. A blank query matches everything.
    #[must_use]
    pub fn filter(&self, query: &str) -> Vec<(usize, &E)> {
        let needle = query.trim().to_lowercase();
        self.entries
            .iter()
            .enumerate()
            .filter(|(_, entry)| needle.is_empty() || entry.label().to_lowercase().contains(&needle))
            .collect()
    }

    #[must_use]
    pub fn storage(&self) -> &S {
        &self.storage
    }
}

#[cfg(test)]
mod tests {
    use chrono::Utc;
    use piq_core::entities::IntelligenceReport;

    use super::*;
    use crate::storage::MemoryStorage;

    fn entry(name: &str) -> HistoryEntry {
        HistoryEntry::capture(name, &IntelligenceReport::default(), Utc::now())
    }

    #[test]
    fn filter_keeps_original_indices() {
        let mut store = IntelHistory::open(MemoryStorage::new());
        store.record(entry("Globex"));
        store.record(entry("Acme Corp"));
        store.record(entry("Initech"));

        let hits: Vec<usize> = store.filter("ACME").into_iter().map(|(i, _)| i).collect();
        assert_eq!(hits, vec![1]);
        assert_eq!(store.filter("  ").len(), 3);
        assert!(store.filter("umbrella").is_empty());
    }

    #[test]
    fn remove_out_of_range_is_noop() {
        let mut store = IntelHistory::open(MemoryStorage::new());
        store.record(entry("Acme"));
        assert!(!store.remove(5));
        assert_eq!(store.len(), 1);
        assert!(store.remove(0));
        assert!(store.is_empty());
    }
}
