//! Tolerant load and best-effort save of a history list.
//!
//! Loading never fails: a missing key, unreadable storage, malformed JSON or a
//! non-array payload all yield an empty list. Elements that do not decode are
//! skipped individually. Saving has a fallible form ([`try_save`]) and a form
//! that only logs ([`save`]).

use serde_json::Value;

use crate::error::HistoryError;
use crate::ops::capped;
use crate::record::HistoryRecord;
use crate::storage::Storage;

/// Load the list stored under `E::STORAGE_KEY`, capped at
/// [`HISTORY_CAP`](crate::HISTORY_CAP).
pub fn load<E: HistoryRecord, S: Storage>(storage: &S) -> Vec<E> {
    match try_load(storage) {
        Ok(entries) => entries,
        Err(error) => {
            tracing::warn!(key = E::STORAGE_KEY, %error, "discarding unreadable history");
            Vec::new()
        }
    }
}

fn try_load<E: HistoryRecord, S: Storage>(storage: &S) -> Result<Vec<E>, HistoryError> {
    let Some(raw) = storage.read(E::STORAGE_KEY)? else {
        return Ok(Vec::new());
    };
    let Value::Array(items) = serde_json::from_str::<Value>(&raw)? else {
        return Err(HistoryError::NotAnArray {
            key: E::STORAGE_KEY.to_string(),
        });
    };

    let total = items.len();
    let entries: Vec<E> = items
        .into_iter()
        .filter_map(|item| serde_json::from_value(item).ok())
        .collect();
    if entries.len() < total {
        tracing::warn!(
            key = E::STORAGE_KEY,
            skipped = total - entries.len(),
            "skipped malformed history entries"
        );
    }
    Ok(capped(&entries).to_vec())
}

/// Persist `entries` (capped) under `E::STORAGE_KEY`.
///
/// # Errors
///
/// Returns [`HistoryError`] if encoding fails or the backend rejects the write.
pub fn try_save<E: HistoryRecord, S: Storage>(storage: &S, entries: &[E]) -> Result<(), HistoryError> {
    let encoded = serde_json::to_string(capped(entries))?;
    storage.write(E::STORAGE_KEY, &encoded)
}

/// Persist `entries`, logging and discarding any failure.
pub fn save<E: HistoryRecord, S: Storage>(storage: &S, entries: &[E]) {
    if let Err(error) = try_save(storage, entries) {
        tracing::warn!(key = E::STORAGE_KEY, %error, "failed to persist history");
    }
}
