mod json;
mod xls;

use std::path::{Path, PathBuf};

use anyhow::{Context, bail};
use piq_core::display;
use piq_core::entities::{IntelligenceReport, LeadFinderResult};
use piq_core::sample;
use serde::Serialize;

use crate::cli::subcommands::ExportCommands;
use crate::cli::{ExportSourceArgs, GlobalFlags};
use crate::context::AppContext;
use crate::output;

/// Handle `piq export`.
pub fn handle(action: &ExportCommands, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    match action {
        ExportCommands::Json { source, leads, out } => {
            json::run(source, *leads, out.as_deref(), ctx, flags)
        }
        ExportCommands::Xls {
            source,
            industry,
            out,
        } => xls::run(source, industry, out.as_deref(), ctx, flags),
    }
}

/// A lead list together with the search that produced it.
struct LeadSource {
    result: LeadFinderResult,
    designation: String,
    employee_size: String,
}

fn report_source(source: &ExportSourceArgs, ctx: &AppContext) -> anyhow::Result<IntelligenceReport> {
    if source.sample {
        return Ok(sample::sample_report());
    }
    let Some(index) = source.history else {
        bail!("choose --history <index> or --sample");
    };
    ctx.intel_history
        .get(index)
        .map(|entry| entry.data.clone())
        .with_context(|| format!("no research history entry at index {index}"))
}

fn lead_source(source: &ExportSourceArgs, ctx: &AppContext) -> anyhow::Result<LeadSource> {
    if source.sample {
        let result = sample::sample_leads();
        return Ok(LeadSource {
            designation: display::or_empty(result.designation.as_deref()).to_string(),
            employee_size: display::or_empty(result.employee_size.as_deref()).to_string(),
            result,
        });
    }
    let Some(index) = source.history else {
        bail!("choose --history <index> or --sample");
    };
    let entry = ctx
        .lead_history
        .get(index)
        .with_context(|| format!("no lead history entry at index {index}"))?;
    Ok(LeadSource {
        result: entry.data.clone(),
        designation: entry.designation.clone(),
        employee_size: entry.employee_size.clone(),
    })
}

#[derive(Debug, Serialize)]
struct Written {
    path: PathBuf,
    bytes: usize,
}

/// Write `bytes` to `out`, or to `suggested` in the working directory.
fn write(out: Option<&Path>, suggested: &str, bytes: &[u8], flags: &GlobalFlags) -> anyhow::Result<()> {
    let path = out.map_or_else(|| PathBuf::from(suggested), Path::to_path_buf);
    piq_export::write_file(&path, bytes)
        .with_context(|| format!("failed to write export to {}", path.display()))?;
    let written = Written {
        path,
        bytes: bytes.len(),
    };
    output::output(&written, flags.format, |w, _| {
        format!("Wrote {} ({} bytes)", w.path.display(), w.bytes)
    })
}
