//! # piq-core
//!
//! Core types and error types for ProspectIQ.
//!
//! This crate provides the foundational types shared across all ProspectIQ crates:
//! - Report entities for company intelligence and lead searches
//! - History entry snapshots persisted by `piq-history`
//! - Tolerant field decoders for agent-produced JSON
//! - Display defaults for absent fields
//! - The normalized outcome of one agent call
//! - Validated search inputs
//! - Fixed sample datasets for previews

pub mod display;
pub mod entities;
pub mod enums;
pub mod errors;
pub mod lenient;
pub mod outcome;
pub mod query;
pub mod sample;
