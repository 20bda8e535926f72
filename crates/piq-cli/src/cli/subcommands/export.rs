use std::path::PathBuf;

use clap::Subcommand;

use crate::cli::ExportSourceArgs;

#[derive(Clone, Debug, Subcommand)]
pub enum ExportCommands {
    /// Write a report (or lead list with --leads) as pretty JSON.
    Json {
        #[command(flatten)]
        source: ExportSourceArgs,
        /// Export from the lead history / sample leads.
        #[arg(long)]
        leads: bool,
        /// Output path (defaults to the suggested file name).
        #[arg(long)]
        out: Option<PathBuf>,
    },
    /// Write a lead list as an Excel-compatible .xls workbook.
    Xls {
        #[command(flatten)]
        source: ExportSourceArgs,
        /// Only export this industry ("all" for every industry).
        #[arg(long, default_value = "all")]
        industry: String,
        /// Output path (defaults to the suggested file name).
        #[arg(long)]
        out: Option<PathBuf>,
    },
}
