use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::lenient;

/// Geography every lead search is constrained to.
pub const LEAD_GEOGRAPHY: &str = "India";

/// One company returned by a lead search.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct LeadCompany {
    #[serde(default, deserialize_with = "lenient::text")]
    pub company_name: Option<String>,
    #[serde(default, deserialize_with = "lenient::text")]
    pub industry: Option<String>,
    #[serde(default, deserialize_with = "lenient::text")]
    pub city: Option<String>,
    #[serde(default, deserialize_with = "lenient::text")]
    pub employee_size_range: Option<String>,
    #[serde(default, deserialize_with = "lenient::text")]
    pub website: Option<String>,
    #[serde(default, deserialize_with = "lenient::text")]
    pub designation_found: Option<String>,
    #[serde(default, deserialize_with = "lenient::text")]
    pub contact_person: Option<String>,
    #[serde(default, deserialize_with = "lenient::text")]
    pub source: Option<String>,
}

/// The normalized result of one lead search.
///
/// `total_results` is whatever the agent declared; it is not required to
/// match `companies.len()`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct LeadFinderResult {
    #[serde(default, deserialize_with = "lenient::text")]
    pub search_query: Option<String>,
    #[serde(default, deserialize_with = "lenient::text")]
    pub designation: Option<String>,
    #[serde(default, deserialize_with = "lenient::text")]
    pub employee_size: Option<String>,
    #[serde(default, deserialize_with = "lenient::text")]
    pub geography: Option<String>,
    #[serde(default, deserialize_with = "lenient::count")]
    pub total_results: Option<u64>,
    #[serde(default, deserialize_with = "lenient::list")]
    pub companies: Vec<LeadCompany>,
    #[serde(default, deserialize_with = "lenient::text")]
    pub summary: Option<String>,
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn total_results_may_disagree_with_companies() {
        let result: LeadFinderResult = serde_json::from_value(json!({
            "designation": "CTO",
            "total_results": 40,
            "companies": [{"company_name": "Acme", "industry": "SaaS"}],
        }))
        .unwrap();
        assert_eq!(result.total_results, Some(40));
        assert_eq!(result.companies.len(), 1);
    }

    #[test]
    fn malformed_companies_become_empty() {
        let result: LeadFinderResult =
            serde_json::from_value(json!({"companies": "none found", "total_results": null}))
                .unwrap();
        assert!(result.companies.is_empty());
        assert_eq!(result.total_results, None);
    }
}
