use std::path::Path;

use piq_core::entities::LeadCompany;
use piq_export::{filename, spreadsheet};
use piq_view::leads::{self, IndustryFilter};

use super::{lead_source, write};
use crate::cli::{ExportSourceArgs, GlobalFlags};
use crate::context::AppContext;
use crate::output;

/// Export the (optionally industry-filtered) lead list as a workbook.
pub fn run(
    source: &ExportSourceArgs,
    industry: &str,
    out: Option<&Path>,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let source = lead_source(source, ctx)?;
    let filter = IndustryFilter::parse(industry);
    let companies: Vec<LeadCompany> = leads::filter(&source.result.companies, &filter)
        .into_iter()
        .cloned()
        .collect();
    if companies.is_empty() {
        output::notice(flags, "No companies match; writing a header-only sheet.");
    }

    let bytes = spreadsheet::export(&companies, &source.designation, &source.employee_size);
    let name = filename::leads_spreadsheet(&source.designation, &source.employee_size);
    write(out, &name, &bytes, flags)
}
