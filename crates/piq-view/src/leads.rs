//! Lead list filtering and summary counts.

use std::fmt;

use piq_core::display;
use piq_core::entities::{LeadCompany, LeadFinderResult};
use serde::Serialize;

/// Sentinel accepted in place of an industry name.
pub const ALL_INDUSTRIES: &str = "all";

/// Which companies the lead table shows.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum IndustryFilter {
    #[default]
    All,
    /// Exact, case-sensitive industry match.
    Industry(String),
}

impl IndustryFilter {
    /// `"all"` (or a blank value) selects everything; anything else is an
    /// exact industry, kept verbatim so padded values match nothing.
    #[must_use]
    pub fn parse(value: &str) -> Self {
        let sentinel = value.trim();
        if sentinel.is_empty() || sentinel == ALL_INDUSTRIES {
            Self::All
        } else {
            Self::Industry(value.to_string())
        }
    }

    #[must_use]
    pub fn matches(&self, company: &LeadCompany) -> bool {
        match self {
            Self::All => true,
            Self::Industry(industry) => company.industry.as_deref() == Some(industry.as_str()),
        }
    }
}

impl fmt::Display for IndustryFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::All => f.write_str(ALL_INDUSTRIES),
            Self::Industry(industry) => f.write_str(industry),
        }
    }
}

/// Distinct non-empty industries, in first-occurrence order.
#[must_use]
pub fn industries(companies: &[LeadCompany]) -> Vec<&str> {
    let mut seen: Vec<&str> = Vec::new();
    for industry in companies
        .iter()
        .filter_map(|c| display::present(c.industry.as_deref()))
    {
        if !seen.contains(&industry) {
            seen.push(industry);
        }
    }
    seen
}

#[must_use]
pub fn filter<'a>(companies: &'a [LeadCompany], filter: &IndustryFilter) -> Vec<&'a LeadCompany> {
    companies.iter().filter(|c| filter.matches(c)).collect()
}

/// Counts shown above the lead table.
///
/// `declared_total` is what the agent claimed; `returned` is what actually
/// came back. They are reported separately because they often disagree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LeadSummary {
    pub declared_total: Option<u64>,
    pub returned: usize,
    pub industries: usize,
}

impl LeadSummary {
    #[must_use]
    pub fn of(result: &LeadFinderResult) -> Self {
        Self {
            declared_total: result.total_results,
            returned: result.companies.len(),
            industries: industries(&result.companies).len(),
        }
    }

    /// True when the agent's declared total matches the returned list.
    #[must_use]
    pub fn is_consistent(&self) -> bool {
        self.declared_total
            .is_none_or(|total| usize::try_from(total).is_ok_and(|t| t == self.returned))
    }
}
