//! # piq-view
//!
//! Presentation-side transformations over ProspectIQ reports. Every function
//! here borrows its input and returns a new view; nothing mutates a report.
//!
//! - [`contacts`]: sortable contact table
//! - [`tech`]: technology grouping and confidence tiers
//! - [`leads`]: industry filter and summary counts
//! - [`markdown`]: the heading/list/bold subset used in market positioning
//! - [`state`]: per-surface search state with stale-result suppression

pub mod contacts;
pub mod leads;
pub mod markdown;
pub mod state;
pub mod tech;
