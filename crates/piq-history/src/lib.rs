//! # piq-history
//!
//! Capped, deduplicating, most-recent-first history of past queries.
//!
//! Two independent stores exist, each under its own storage key:
//! - intel history ([`HistoryEntry`], identity = company name)
//! - lead history ([`LeadHistoryEntry`], identity = designation + employee size)
//!
//! Both use the same insertion rule ([`ops::upsert_front`]) and differ only in
//! their identity function. Persistence failures never reach the caller: the
//! in-memory list stays authoritative for the session.
//!
//! [`HistoryEntry`]: piq_core::entities::HistoryEntry
//! [`LeadHistoryEntry`]: piq_core::entities::LeadHistoryEntry

pub mod ops;
pub mod persist;
pub mod record;
pub mod storage;

mod error;
mod store;

pub use error::HistoryError;
pub use record::{HistoryRecord, INTEL_HISTORY_KEY, LEAD_HISTORY_KEY};
pub use storage::{FileStorage, MemoryStorage, Storage};
pub use store::{HistoryStore, IntelHistory, LeadHistory};

/// Maximum number of entries kept per store.
pub const HISTORY_CAP: usize = 50;
