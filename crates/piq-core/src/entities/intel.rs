use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::lenient;

/// A named executive listed in the company overview.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Leader {
    #[serde(default, deserialize_with = "lenient::text")]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "lenient::text")]
    pub title: Option<String>,
}

/// Firmographic summary of the researched company.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct CompanyOverview {
    #[serde(default, deserialize_with = "lenient::text")]
    pub company_name: Option<String>,
    #[serde(default, deserialize_with = "lenient::text")]
    pub description: Option<String>,
    #[serde(default, deserialize_with = "lenient::text")]
    pub industry: Option<String>,
    #[serde(default, deserialize_with = "lenient::text")]
    pub revenue_estimate: Option<String>,
    #[serde(default, deserialize_with = "lenient::text")]
    pub employee_count: Option<String>,
    #[serde(default, deserialize_with = "lenient::text")]
    pub founding_year: Option<String>,
    #[serde(default, deserialize_with = "lenient::text")]
    pub headquarters: Option<String>,
    #[serde(default, deserialize_with = "lenient::text")]
    pub website_url: Option<String>,
    #[serde(default, deserialize_with = "lenient::text")]
    pub company_type: Option<String>,
    #[serde(default, deserialize_with = "lenient::list")]
    pub leadership: Vec<Leader>,
}

/// A person at the company. Identity is positional; duplicates are allowed.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Contact {
    #[serde(default, deserialize_with = "lenient::text")]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "lenient::text")]
    pub title: Option<String>,
    #[serde(default, deserialize_with = "lenient::text")]
    pub email: Option<String>,
    #[serde(default, deserialize_with = "lenient::text")]
    pub phone: Option<String>,
    #[serde(default, deserialize_with = "lenient::text")]
    pub linkedin_url: Option<String>,
    #[serde(default, deserialize_with = "lenient::text")]
    pub twitter_handle: Option<String>,
    #[serde(default, deserialize_with = "lenient::text")]
    pub other_profiles: Option<String>,
}

impl Contact {
    /// Twitter handle and other profiles joined for the "social" column.
    ///
    /// Returns `None` when both are absent or empty.
    #[must_use]
    pub fn social(&self) -> Option<String> {
        let parts: Vec<&str> = [self.twitter_handle.as_deref(), self.other_profiles.as_deref()]
            .into_iter()
            .flatten()
            .filter(|part| !part.is_empty())
            .collect();
        if parts.is_empty() {
            None
        } else {
            Some(parts.join(", "))
        }
    }
}

/// A technology detected in the company's stack.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct TechItem {
    #[serde(default, deserialize_with = "lenient::text")]
    pub technology_name: Option<String>,
    #[serde(default, deserialize_with = "lenient::text")]
    pub category: Option<String>,
    #[serde(default, deserialize_with = "lenient::text")]
    pub confidence: Option<String>,
}

/// A recent press item. `date` is free text, not necessarily ISO-8601.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct NewsItem {
    #[serde(default, deserialize_with = "lenient::text")]
    pub headline: Option<String>,
    #[serde(default, deserialize_with = "lenient::text")]
    pub source: Option<String>,
    #[serde(default, deserialize_with = "lenient::text")]
    pub date: Option<String>,
    #[serde(default, deserialize_with = "lenient::text")]
    pub summary: Option<String>,
}

/// A funding round. `amount` is free text (e.g. `"$75M"`), `investors` is
/// comma-joined.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct FundingRound {
    #[serde(default, deserialize_with = "lenient::text")]
    pub round_type: Option<String>,
    #[serde(default, deserialize_with = "lenient::text")]
    pub amount: Option<String>,
    #[serde(default, deserialize_with = "lenient::text")]
    pub date: Option<String>,
    #[serde(default, deserialize_with = "lenient::text")]
    pub investors: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Competitor {
    #[serde(default, deserialize_with = "lenient::text")]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "lenient::text")]
    pub notes: Option<String>,
}

/// The normalized result of one company-research call.
///
/// `market_positioning` may carry the markdown subset understood by
/// `piq_view::markdown`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct IntelligenceReport {
    #[serde(default, deserialize_with = "lenient::object")]
    pub company_overview: Option<CompanyOverview>,
    #[serde(default, deserialize_with = "lenient::list")]
    pub contacts: Vec<Contact>,
    #[serde(default, deserialize_with = "lenient::list")]
    pub tech_stack: Vec<TechItem>,
    #[serde(default, deserialize_with = "lenient::text")]
    pub tech_summary: Option<String>,
    #[serde(default, deserialize_with = "lenient::list")]
    pub recent_news: Vec<NewsItem>,
    #[serde(default, deserialize_with = "lenient::list")]
    pub funding_rounds: Vec<FundingRound>,
    #[serde(default, deserialize_with = "lenient::list")]
    pub competitors: Vec<Competitor>,
    #[serde(default, deserialize_with = "lenient::text")]
    pub market_positioning: Option<String>,
}

impl IntelligenceReport {
    /// The company name reported by the agent, if present and non-empty.
    #[must_use]
    pub fn company_name(&self) -> Option<&str> {
        self.company_overview
            .as_ref()
            .and_then(|overview| overview.company_name.as_deref())
            .filter(|name| !name.is_empty())
    }

    /// Number of items shown in the market-intelligence section.
    #[must_use]
    pub fn market_item_count(&self) -> usize {
        self.recent_news.len() + self.funding_rounds.len() + self.competitors.len()
    }

    /// True when no section carries any data.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self == &Self::default()
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use serde_json::json;

    use super::*;

    #[test]
    fn partial_report_defaults_missing_lists() {
        let report: IntelligenceReport =
            serde_json::from_value(json!({"company_overview": {"company_name": "X"}})).unwrap();
        assert_eq!(report.company_name(), Some("X"));
        assert!(report.contacts.is_empty());
        assert!(report.tech_stack.is_empty());
        assert!(report.recent_news.is_empty());
        assert!(report.funding_rounds.is_empty());
        assert!(report.competitors.is_empty());
        assert_eq!(report.market_positioning, None);
    }

    #[test]
    fn malformed_sections_degrade() {
        let report: IntelligenceReport = serde_json::from_value(json!({
            "company_overview": "Acme",
            "contacts": {"name": "not a list"},
            "tech_stack": [{"technology_name": "Rust", "confidence": 7}],
            "tech_summary": null,
            "market_positioning": ["a", "b"],
        }))
        .unwrap();
        assert_eq!(report.company_overview, None);
        assert!(report.contacts.is_empty());
        assert_eq!(report.tech_stack[0].confidence.as_deref(), Some("7"));
        assert_eq!(report.tech_summary, None);
        assert_eq!(report.market_positioning, None);
    }

    #[test]
    fn blank_company_name_is_absent() {
        let report: IntelligenceReport =
            serde_json::from_value(json!({"company_overview": {"company_name": ""}})).unwrap();
        assert_eq!(report.company_name(), None);
    }

    #[test]
    fn social_joins_non_empty_parts() {
        let contact = Contact {
            twitter_handle: Some("@jane".into()),
            other_profiles: Some(String::new()),
            ..Default::default()
        };
        assert_eq!(contact.social().as_deref(), Some("@jane"));

        let contact = Contact {
            twitter_handle: Some("@jane".into()),
            other_profiles: Some("GitHub: jane".into()),
            ..Default::default()
        };
        assert_eq!(contact.social().as_deref(), Some("@jane, GitHub: jane"));
        assert_eq!(Contact::default().social(), None);
    }

    #[test]
    fn default_report_is_empty() {
        assert!(IntelligenceReport::default().is_empty());
        let report = IntelligenceReport {
            tech_summary: Some("cloud".into()),
            ..Default::default()
        };
        assert!(!report.is_empty());
    }
}
