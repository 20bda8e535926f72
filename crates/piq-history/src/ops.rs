//! Pure list operations shared by both history stores.
//!
//! None of these touch storage; they take a list and return a new one.

use crate::HISTORY_CAP;

/// Put `new_entry` first, followed by every prior entry whose identity
/// differs from it. The result is capped at [`HISTORY_CAP`], evicting the
/// oldest entries.
#[must_use]
pub fn upsert_front<E, K, F>(entries: &[E], new_entry: E, identity: F) -> Vec<E>
where
    E: Clone,
    K: PartialEq,
    F: Fn(&E) -> K,
{
    let key = identity(&new_entry);
    let mut next = Vec::with_capacity((entries.len() + 1).min(HISTORY_CAP));
    next.push(new_entry);
    next.extend(
        entries
            .iter()
            .filter(|entry| identity(entry) != key)
            .take(HISTORY_CAP - 1)
            .cloned(),
    );
    next
}

/// Drop the element at `index`. Out-of-range indices return the input
/// unchanged.
#[must_use]
pub fn remove<E: Clone>(entries: &[E], index: usize) -> Vec<E> {
    if index >= entries.len() {
        return entries.to_vec();
    }
    entries
        .iter()
        .enumerate()
        .filter(|(i, _)| *i != index)
        .map(|(_, entry)| entry.clone())
        .collect()
}

/// The first [`HISTORY_CAP`] entries.
#[must_use]
pub fn capped<E>(entries: &[E]) -> &[E] {
    &entries[..entries.len().min(HISTORY_CAP)]
}
