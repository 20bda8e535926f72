//! Terminal view of a lead search.

use piq_core::display;
use piq_core::entities::{LEAD_GEOGRAPHY, LeadFinderResult};
use piq_export::spreadsheet::COLUMNS;
use piq_view::leads::{self, IndustryFilter, LeadSummary};
use serde::Serialize;

use super::table::{TableOptions, paint, render_entity_table};

pub const NO_COMPANIES: &str = "No companies found.";

/// A lead result with the industry filter applied, as printed by
/// `--format json`.
#[derive(Debug, Serialize)]
pub struct LeadView<'a> {
    #[serde(flatten)]
    pub result: &'a LeadFinderResult,
    pub industry_filter: String,
    pub shown: usize,
    pub summary: LeadSummary,
}

impl<'a> LeadView<'a> {
    #[must_use]
    pub fn new(result: &'a LeadFinderResult, filter: &IndustryFilter) -> Self {
        Self {
            result,
            industry_filter: filter.to_string(),
            shown: leads::filter(&result.companies, filter).len(),
            summary: LeadSummary::of(result),
        }
    }
}

#[must_use]
pub fn render(result: &LeadFinderResult, filter: &IndustryFilter, options: TableOptions) -> String {
    let summary = LeadSummary::of(result);
    let mut out = Vec::new();

    out.push(format!(
        "{} · {} employees · {}",
        display::or_na(result.designation.as_deref()),
        display::or_na(result.employee_size.as_deref()),
        display::or(result.geography.as_deref(), LEAD_GEOGRAPHY),
    ));

    let declared = summary
        .declared_total
        .map_or_else(|| display::NOT_AVAILABLE.to_string(), |n| n.to_string());
    let counts = format!(
        "{declared} declared · {} returned · {} industries",
        summary.returned, summary.industries
    );
    out.push(if summary.is_consistent() || !options.color {
        counts
    } else {
        paint(&counts, "33")
    });

    if let Some(text) = display::present(result.summary.as_deref()) {
        out.push(String::new());
        out.push(text.to_string());
    }

    let industries = leads::industries(&result.companies);
    if !industries.is_empty() {
        out.push(format!("Industries: {}", industries.join(", ")));
    }

    out.push(String::new());
    let shown = leads::filter(&result.companies, filter);
    if shown.is_empty() {
        out.push(NO_COMPANIES.to_string());
    } else {
        let headers: Vec<&str> = COLUMNS.iter().map(|(header, _)| *header).collect();
        let rows: Vec<Vec<String>> = shown
            .iter()
            .map(|company| {
                COLUMNS
                    .iter()
                    .map(|(_, field)| display::or_na(field(company)).to_string())
                    .collect()
            })
            .collect();
        out.push(render_entity_table(&headers, &rows, options));
    }

    if *filter != IndustryFilter::All {
        out.push(format!(
            "(industry: {filter}, {} of {})",
            shown.len(),
            summary.returned
        ));
    }

    out.join("\n")
}
