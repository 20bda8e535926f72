//! Suggested file names for exports.

use piq_core::entities::{IntelligenceReport, LEAD_GEOGRAPHY};

/// Fallback stem when a report carries no company name.
pub const REPORT_FALLBACK_STEM: &str = "report";

/// `leads_<designation>_<size>_India.xls`
#[must_use]
pub fn leads_spreadsheet(designation: &str, employee_size: &str) -> String {
    leads_stem(designation, employee_size) + ".xls"
}

/// `leads_<designation>_<size>_India.json`
#[must_use]
pub fn leads_json(designation: &str, employee_size: &str) -> String {
    leads_stem(designation, employee_size) + ".json"
}

/// `<company>_intelligence.json`, or `report_intelligence.json` when the
/// report has no company name.
#[must_use]
pub fn report_json(report: &IntelligenceReport) -> String {
    let stem = report.company_name().unwrap_or(REPORT_FALLBACK_STEM);
    format!("{}_intelligence.json", strip_separators(stem))
}

fn leads_stem(designation: &str, employee_size: &str) -> String {
    let raw = format!("leads_{designation}_{employee_size}_{LEAD_GEOGRAPHY}");
    strip_separators(&collapse_whitespace(&raw))
}

/// Replace every run of whitespace with a single `_`.
#[must_use]
pub fn collapse_whitespace(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    let mut in_run = false;
    for ch in input.chars() {
        if ch.is_whitespace() {
            if !in_run {
                out.push('_');
            }
            in_run = true;
        } else {
            out.push(ch);
            in_run = false;
        }
    }
    out
}

// Path separators would turn a name into a path.
fn strip_separators(input: &str) -> String {
    input.replace(['/', '\\'], "_")
}

#[cfg(test)]
mod tests {
    use piq_core::entities::CompanyOverview;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case("CTO", "51-200", "leads_CTO_51-200_India.xls")]
    #[case("VP  of\tSales", "5000+", "leads_VP_of_Sales_5000+_India.xls")]
    #[case("Head of HR/Ops", "11-50", "leads_Head_of_HR_Ops_11-50_India.xls")]
    fn spreadsheet_names(#[case] designation: &str, #[case] size: &str, #[case] expected: &str) {
        assert_eq!(leads_spreadsheet(designation, size), expected);
    }

    #[test]
    fn json_lead_name_shares_stem() {
        assert_eq!(leads_json("Chief Data Officer", "201-500"), "leads_Chief_Data_Officer_201-500_India.json");
    }

    #[test]
    fn report_name_uses_company_or_fallback() {
        let named = IntelligenceReport {
            company_overview: Some(CompanyOverview {
                company_name: Some("Acme Corp".into()),
                ..Default::default()
            }),
            ..Default::default()
        };
        assert_eq!(report_json(&named), "Acme Corp_intelligence.json");
        assert_eq!(report_json(&IntelligenceReport::default()), "report_intelligence.json");
    }
}
