//! Search state for the intel and lead surfaces.
//!
//! Each [`Surface`] holds the last query, the report on display, the last
//! failure and whether a search is in flight. A search is started with
//! [`Surface::begin`], which hands out a [`Ticket`]; the agent's answer is
//! applied with [`Surface::resolve`] and only lands if the ticket is still
//! current. Anything that replaces the displayed report in the meantime
//! (loading from history, clearing) invalidates the outstanding ticket.

use std::borrow::Cow;

use piq_core::entities::{IntelligenceReport, LeadFinderResult};
use piq_core::outcome::{Failure, Outcome};
use piq_core::query::{IntelQuery, LeadQuery};
use piq_core::sample;
use thiserror::Error;

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum StateError {
    #[error("a search is already in progress")]
    Busy,

    #[error("there is no previous search to retry")]
    NothingToRetry,
}

/// Proof that a search was started at a particular generation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ticket(u64);

/// What [`Surface::resolve`] did with an outcome.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolution {
    /// The ticket was superseded; the outcome was dropped.
    Stale,
    /// A decoded report is now on display.
    Report,
    /// The payload was unusable; an empty report is on display.
    Placeholder,
    /// The search failed; the failure is on display.
    Failed,
}

#[derive(Debug)]
pub struct Surface<Q, R> {
    generation: u64,
    pending: bool,
    query: Option<Q>,
    report: Option<R>,
    error: Option<Failure>,
}

impl<Q, R> Default for Surface<Q, R> {
    fn default() -> Self {
        Self {
            generation: 0,
            pending: false,
            query: None,
            report: None,
            error: None,
        }
    }
}

impl<Q: Clone, R: Default> Surface<Q, R> {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a search for `query`, clearing the displayed report and error.
    ///
    /// # Errors
    ///
    /// Returns [`StateError::Busy`] while another search on this surface is
    /// pending.
    pub fn begin(&mut self, query: Q) -> Result<Ticket, StateError> {
        if self.pending {
            return Err(StateError::Busy);
        }
        self.generation += 1;
        self.pending = true;
        self.query = Some(query);
        self.report = None;
        self.error = None;
        Ok(Ticket(self.generation))
    }

    /// Re-issue the last query.
    ///
    /// # Errors
    ///
    /// Returns [`StateError::Busy`] while a search is pending, or
    /// [`StateError::NothingToRetry`] if no query was ever submitted.
    pub fn retry(&mut self) -> Result<(Ticket, Q), StateError> {
        let query = self.query.clone().ok_or(StateError::NothingToRetry)?;
        let ticket = self.begin(query.clone())?;
        Ok((ticket, query))
    }

    /// Apply the outcome of the search that `ticket` started.
    pub fn resolve(&mut self, ticket: Ticket, outcome: Outcome<R>) -> Resolution {
        if !self.pending || ticket.0 != self.generation {
            tracing::debug!(ticket = ticket.0, current = self.generation, "dropping stale result");
            return Resolution::Stale;
        }
        self.pending = false;
        match outcome {
            Outcome::Report(report) => {
                self.report = Some(report);
                Resolution::Report
            }
            Outcome::Unusable { raw } => {
                tracing::warn!(bytes = raw.len(), "agent result was not a JSON object");
                self.report = Some(R::default());
                Resolution::Placeholder
            }
            Outcome::Failed(failure) => {
                self.error = Some(failure);
                Resolution::Failed
            }
        }
    }

    /// Display `report` directly, as when picking a history entry. Any
    /// pending search is superseded.
    pub fn load(&mut self, report: R, query: Option<Q>) {
        self.generation += 1;
        self.pending = false;
        self.report = Some(report);
        self.error = None;
        if query.is_some() {
            self.query = query;
        }
    }

    /// Drop the displayed report and error, superseding any pending search.
    pub fn clear(&mut self) {
        self.generation += 1;
        self.pending = false;
        self.report = None;
        self.error = None;
    }

    #[must_use]
    pub const fn is_pending(&self) -> bool {
        self.pending
    }

    #[must_use]
    pub const fn report(&self) -> Option<&R> {
        self.report.as_ref()
    }

    #[must_use]
    pub const fn error(&self) -> Option<&Failure> {
        self.error.as_ref()
    }

    #[must_use]
    pub const fn query(&self) -> Option<&Q> {
        self.query.as_ref()
    }
}

/// Both surfaces plus the sample-data toggle.
#[derive(Debug, Default)]
pub struct AppState {
    pub intel: Surface<IntelQuery, IntelligenceReport>,
    pub leads: Surface<LeadQuery, LeadFinderResult>,
    sample_mode: bool,
}

impl AppState {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub const fn sample_mode(&self) -> bool {
        self.sample_mode
    }

    pub const fn set_sample_mode(&mut self, on: bool) {
        self.sample_mode = on;
    }

    /// The report to show: the sample while sample mode is on, otherwise the
    /// intel surface's report.
    #[must_use]
    pub fn displayed_report(&self) -> Option<Cow<'_, IntelligenceReport>> {
        if self.sample_mode {
            Some(Cow::Owned(sample::sample_report()))
        } else {
            self.intel.report().map(Cow::Borrowed)
        }
    }

    #[must_use]
    pub fn displayed_leads(&self) -> Option<Cow<'_, LeadFinderResult>> {
        if self.sample_mode {
            Some(Cow::Owned(sample::sample_leads()))
        } else {
            self.leads.report().map(Cow::Borrowed)
        }
    }
}
