//! Fixed enumerations shared across ProspectIQ.
//!
//! Enums serialize to the literal labels the agent and the persisted history
//! use (`"confirmed"`, `"51-200"`, ...).

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::errors::CoreError;

// ---------------------------------------------------------------------------
// ConfidenceTier
// ---------------------------------------------------------------------------

/// Reliability tier of a detected technology.
///
/// The agent reports confidence as free text. Only the case-folded value is
/// consulted; anything other than the three known labels is `Unknown`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum ConfidenceTier {
    Confirmed,
    Likely,
    Possible,
    Unknown,
}

impl ConfidenceTier {
    /// Classify a raw confidence label. Absent labels are `Unknown`.
    #[must_use]
    pub fn from_label(label: Option<&str>) -> Self {
        let Some(label) = label else {
            return Self::Unknown;
        };
        match label.to_lowercase().as_str() {
            "confirmed" => Self::Confirmed,
            "likely" => Self::Likely,
            "possible" => Self::Possible,
            _ => Self::Unknown,
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Confirmed => "confirmed",
            Self::Likely => "likely",
            Self::Possible => "possible",
            Self::Unknown => "unknown",
        }
    }
}

impl fmt::Display for ConfidenceTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// EmployeeSize
// ---------------------------------------------------------------------------

/// Employee-count bucket accepted by the lead search.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
pub enum EmployeeSize {
    #[serde(rename = "1-10")]
    Micro,
    #[serde(rename = "11-50")]
    Small,
    #[serde(rename = "51-200")]
    Medium,
    #[serde(rename = "201-500")]
    Large,
    #[serde(rename = "501-1000")]
    XLarge,
    #[serde(rename = "1001-5000")]
    Enterprise,
    #[serde(rename = "5000+")]
    Giant,
}

impl EmployeeSize {
    /// Every bucket, smallest first.
    pub const ALL: [Self; 7] = [
        Self::Micro,
        Self::Small,
        Self::Medium,
        Self::Large,
        Self::XLarge,
        Self::Enterprise,
        Self::Giant,
    ];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Micro => "1-10",
            Self::Small => "11-50",
            Self::Medium => "51-200",
            Self::Large => "201-500",
            Self::XLarge => "501-1000",
            Self::Enterprise => "1001-5000",
            Self::Giant => "5000+",
        }
    }
}

impl fmt::Display for EmployeeSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EmployeeSize {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        Self::ALL
            .into_iter()
            .find(|size| size.as_str() == trimmed)
            .ok_or_else(|| CoreError::InvalidEmployeeSize(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(Some("confirmed"), ConfidenceTier::Confirmed)]
    #[case(Some("CONFIRMED"), ConfidenceTier::Confirmed)]
    #[case(Some("Likely"), ConfidenceTier::Likely)]
    #[case(Some("possible"), ConfidenceTier::Possible)]
    #[case(Some("rumoured"), ConfidenceTier::Unknown)]
    #[case(Some(""), ConfidenceTier::Unknown)]
    #[case(Some(" confirmed"), ConfidenceTier::Unknown)]
    #[case(None, ConfidenceTier::Unknown)]
    fn confidence_tier_from_label(#[case] label: Option<&str>, #[case] expected: ConfidenceTier) {
        assert_eq!(ConfidenceTier::from_label(label), expected);
    }

    #[test]
    fn employee_size_parses_every_bucket() {
        for size in EmployeeSize::ALL {
            assert_eq!(size.as_str().parse::<EmployeeSize>().unwrap(), size);
        }
    }

    #[test]
    fn employee_size_rejects_unknown_literal() {
        let err = "10-20".parse::<EmployeeSize>().unwrap_err();
        assert!(matches!(err, CoreError::InvalidEmployeeSize(ref raw) if raw == "10-20"));
    }

    #[test]
    fn employee_size_serializes_as_literal() {
        let json = serde_json::to_string(&EmployeeSize::Giant).unwrap();
        assert_eq!(json, "\"5000+\"");
        let back: EmployeeSize = serde_json::from_str("\"51-200\"").unwrap();
        assert_eq!(back, EmployeeSize::Medium);
    }
}
