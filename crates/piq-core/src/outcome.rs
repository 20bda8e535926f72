//! The normalized outcome of one agent call.
//!
//! `piq-agent` produces an [`Outcome`]; everything downstream consumes it.
//! No untyped agent payload crosses this boundary.

use std::fmt;

use serde::Serialize;

/// Why no report was produced.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "message", rename_all = "snake_case")]
pub enum Failure {
    /// The remote capability ran but could not produce a report.
    Application(String),
    /// The call itself did not complete.
    Transport(String),
}

impl Failure {
    #[must_use]
    pub fn message(&self) -> &str {
        match self {
            Self::Application(message) | Self::Transport(message) => message,
        }
    }

    #[must_use]
    pub const fn is_transport(&self) -> bool {
        matches!(self, Self::Transport(_))
    }
}

impl fmt::Display for Failure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

/// Result of normalizing one agent response into a report of type `T`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome<T> {
    /// The payload decoded into a report.
    Report(T),
    /// The call succeeded but the payload was not a JSON object.
    Unusable { raw: String },
    /// No payload was produced.
    Failed(Failure),
}

impl<T> Outcome<T> {
    #[must_use]
    pub const fn is_report(&self) -> bool {
        matches!(self, Self::Report(_))
    }

    /// Transform the report payload, keeping other variants.
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Outcome<U> {
        match self {
            Self::Report(report) => Outcome::Report(f(report)),
            Self::Unusable { raw } => Outcome::Unusable { raw },
            Self::Failed(failure) => Outcome::Failed(failure),
        }
    }
}
