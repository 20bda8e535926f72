//! Turning an agent `result` into a typed report.
//!
//! The agent returns either a JSON object or a string that should contain
//! one. Objects decode tolerantly; strings are parsed first. Anything that
//! does not end up as an object is [`Outcome::Unusable`].

use piq_core::outcome::Outcome;
use serde::de::DeserializeOwned;
use serde_json::Value;

#[must_use]
pub fn normalize<T: DeserializeOwned>(result: Value) -> Outcome<T> {
    match result {
        Value::Object(_) => decode(result),
        Value::String(raw) => match serde_json::from_str::<Value>(&raw) {
            Ok(parsed @ Value::Object(_)) => decode(parsed),
            _ => Outcome::Unusable { raw },
        },
        other => Outcome::Unusable {
            raw: other.to_string(),
        },
    }
}

fn decode<T: DeserializeOwned>(object: Value) -> Outcome<T> {
    let raw = object.to_string();
    match serde_json::from_value(object) {
        Ok(report) => Outcome::Report(report),
        Err(error) => {
            tracing::warn!(%error, "agent result did not decode");
            Outcome::Unusable { raw }
        }
    }
}
