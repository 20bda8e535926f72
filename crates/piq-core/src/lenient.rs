//! Tolerant field decoders for agent-produced JSON.
//!
//! The agent is free to omit fields, send `null`, or use the wrong JSON type.
//! These decoders never fail on a well-formed JSON value; they degrade to
//! "absent" instead, so a report always decodes.
//!
//! Use them with `#[serde(default, deserialize_with = "...")]`.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Decode a free-text field.
///
/// Strings are kept, numbers and booleans are converted to their textual
/// form, everything else is absent.
pub fn text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(text_from_value(Value::deserialize(deserializer)?))
}

/// Decode a list of objects.
///
/// A non-array becomes an empty list. Elements that are not objects, or that
/// fail to decode, are dropped.
pub fn list<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    Ok(list_from_value(Value::deserialize(deserializer)?))
}

/// Decode an optional nested object. Anything but an object is absent.
pub fn object<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    Ok(object_from_value(Value::deserialize(deserializer)?))
}

/// Decode a non-negative count from an integer or a numeric string.
pub fn count<'de, D>(deserializer: D) -> Result<Option<u64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(match value {
        Value::Number(n) => n.as_u64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    })
}

#[must_use]
pub fn text_from_value(value: Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Null | Value::Array(_) | Value::Object(_) => None,
    }
}

#[must_use]
pub fn list_from_value<T: DeserializeOwned>(value: Value) -> Vec<T> {
    let Value::Array(items) = value else {
        return Vec::new();
    };
    items.into_iter().filter_map(object_from_value).collect()
}

#[must_use]
pub fn object_from_value<T: DeserializeOwned>(value: Value) -> Option<T> {
    if !value.is_object() {
        return None;
    }
    match serde_json::from_value(value) {
        Ok(decoded) => Some(decoded),
        Err(error) => {
            tracing::debug!(%error, "dropping undecodable object");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use serde::Deserialize;
    use serde_json::json;

    use super::*;

    #[derive(Debug, Default, Deserialize, PartialEq)]
    struct Probe {
        #[serde(default, deserialize_with = "text")]
        label: Option<String>,
        #[serde(default, deserialize_with = "list")]
        items: Vec<Item>,
        #[serde(default, deserialize_with = "count")]
        total: Option<u64>,
    }

    #[derive(Debug, Deserialize, PartialEq)]
    struct Item {
        #[serde(default, deserialize_with = "text")]
        name: Option<String>,
    }

    #[test]
    fn text_accepts_scalars() {
        let probe: Probe = serde_json::from_value(json!({"label": 2015})).unwrap();
        assert_eq!(probe.label.as_deref(), Some("2015"));
        let probe: Probe = serde_json::from_value(json!({"label": true})).unwrap();
        assert_eq!(probe.label.as_deref(), Some("true"));
    }

    #[test]
    fn text_drops_null_and_containers() {
        for raw in [json!(null), json!([1, 2]), json!({"a": 1})] {
            let probe: Probe = serde_json::from_value(json!({ "label": raw })).unwrap();
            assert_eq!(probe.label, None);
        }
    }

    #[test]
    fn list_tolerates_wrong_type() {
        let probe: Probe = serde_json::from_value(json!({"items": "not a list"})).unwrap();
        assert!(probe.items.is_empty());
        let probe: Probe = serde_json::from_value(json!({"items": null})).unwrap();
        assert!(probe.items.is_empty());
    }

    #[test]
    fn list_drops_non_object_elements() {
        let probe: Probe =
            serde_json::from_value(json!({"items": [{"name": "a"}, null, "b", 3, {"name": "c"}]}))
                .unwrap();
        let names: Vec<_> = probe.items.iter().map(|i| i.name.as_deref()).collect();
        assert_eq!(names, vec![Some("a"), Some("c")]);
    }

    #[test]
    fn count_accepts_numeric_strings() {
        let probe: Probe = serde_json::from_value(json!({"total": "42"})).unwrap();
        assert_eq!(probe.total, Some(42));
        let probe: Probe = serde_json::from_value(json!({"total": -3})).unwrap();
        assert_eq!(probe.total, None);
        let probe: Probe = serde_json::from_value(json!({"total": "many"})).unwrap();
        assert_eq!(probe.total, None);
    }

    #[test]
    fn missing_fields_use_defaults() {
        let probe: Probe = serde_json::from_value(json!({})).unwrap();
        assert_eq!(probe, Probe::default());
    }
}
