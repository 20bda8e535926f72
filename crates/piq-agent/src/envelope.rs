//! The response envelope and its classification.

use piq_core::display;
use piq_core::lenient;
use piq_core::outcome::{Failure, Outcome};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::normalize;

/// Message shown when a failed call carries no explanation of its own.
pub const APPLICATION_FALLBACK: &str = "Failed to get intelligence report. Please try again.";

/// Message shown when a transport failure has no diagnostic text.
pub const TRANSPORT_FALLBACK: &str = "An unexpected error occurred.";

/// Request body of `POST /agent/invoke`.
#[derive(Debug, Clone, Serialize)]
pub struct InvokeRequest<'a> {
    pub message: &'a str,
    pub agent_id: &'a str,
}

/// `{"success", "response": {"status", "result", "message"}, "error"}`
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Envelope {
    #[serde(default)]
    pub success: bool,
    #[serde(default, deserialize_with = "lenient::object")]
    pub response: Option<EnvelopeResponse>,
    #[serde(default, deserialize_with = "lenient::text")]
    pub error: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct EnvelopeResponse {
    #[serde(default, deserialize_with = "lenient::text")]
    pub status: Option<String>,
    #[serde(default)]
    pub result: Option<Value>,
    #[serde(default, deserialize_with = "lenient::text")]
    pub message: Option<String>,
}

/// One agent call, classified.
#[derive(Debug, Clone, PartialEq)]
pub enum AgentOutcome {
    /// The call succeeded and carried a result (an object or a string).
    Success(Value),
    /// The call produced no usable result.
    Failure(Failure),
}

impl AgentOutcome {
    /// Turn a transport error into a failure outcome.
    #[must_use]
    pub fn transport(diagnostic: &str) -> Self {
        let message = display::or(Some(diagnostic.trim()), TRANSPORT_FALLBACK);
        Self::Failure(Failure::Transport(message.to_string()))
    }

    /// Decode a success into a report of type `T`.
    #[must_use]
    pub fn normalize<T: DeserializeOwned>(self) -> Outcome<T> {
        match self {
            Self::Success(result) => normalize::normalize(result),
            Self::Failure(failure) => Outcome::Failed(failure),
        }
    }
}

impl From<Envelope> for AgentOutcome {
    /// `success` with a non-empty `result` is a success. Anything else is an
    /// application failure explained by `error`, then `response.message`,
    /// then [`APPLICATION_FALLBACK`].
    fn from(envelope: Envelope) -> Self {
        let Envelope {
            success,
            response,
            error,
        } = envelope;
        let EnvelopeResponse {
            result, message, ..
        } = response.unwrap_or_default();

        match result.filter(has_content) {
            Some(result) if success => Self::Success(result),
            _ => {
                let message = display::present(error.as_deref())
                    .or_else(|| display::present(message.as_deref()))
                    .unwrap_or(APPLICATION_FALLBACK);
                Self::Failure(Failure::Application(message.to_string()))
            }
        }
    }
}

fn has_content(result: &Value) -> bool {
    match result {
        Value::Null => false,
        Value::String(s) => !s.is_empty(),
        _ => true,
    }
}
