use std::path::Path;

use piq_export::filename;

use super::{lead_source, report_source, write};
use crate::cli::{ExportSourceArgs, GlobalFlags};
use crate::context::AppContext;

pub fn run(
    source: &ExportSourceArgs,
    leads: bool,
    out: Option<&Path>,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    if leads {
        let source = lead_source(source, ctx)?;
        let bytes = piq_export::json::leads(&source.result)?;
        let name = filename::leads_json(&source.designation, &source.employee_size);
        return write(out, &name, &bytes, flags);
    }

    let report = report_source(source, ctx)?;
    let bytes = piq_export::json::report(&report)?;
    write(out, &filename::report_json(&report), &bytes, flags)
}
