use clap::{Args, Subcommand, ValueEnum};

use crate::cli::subcommands::{ExportCommands, HistoryCommands};

/// Top-level command tree.
#[derive(Clone, Debug, Subcommand)]
pub enum Commands {
    /// Research a company and show its intelligence report.
    Research(ResearchArgs),
    /// Find companies in India with a given role and headcount.
    Leads(LeadsArgs),
    /// Browse or prune past searches.
    History {
        #[command(subcommand)]
        action: HistoryCommands,
    },
    /// Show the built-in sample report or lead list.
    Sample(SampleArgs),
    /// Export a report or lead list to a file.
    Export {
        #[command(subcommand)]
        action: ExportCommands,
    },
}

/// Contact table sort column.
#[derive(Clone, Copy, Debug, Eq, PartialEq, ValueEnum)]
pub enum ContactSortArg {
    Name,
    Title,
}

#[derive(Clone, Debug, Args)]
pub struct ResearchArgs {
    /// Company name to research.
    pub company: String,

    /// Company website domain, e.g. acmecorp.com.
    #[arg(long)]
    pub domain: Option<String>,

    /// Comma-separated names of people to look up.
    #[arg(long)]
    pub contacts: Option<String>,

    /// Sort contacts by this column.
    #[arg(long, value_enum, default_value = "name")]
    pub sort: ContactSortArg,

    /// Sort contacts in descending order.
    #[arg(long)]
    pub desc: bool,

    /// Re-issue the query this many times if it fails.
    #[arg(long, default_value_t = 0)]
    pub retries: u32,
}

#[derive(Clone, Debug, Args)]
pub struct LeadsArgs {
    /// Role to look for, e.g. CTO.
    #[arg(long)]
    pub designation: String,

    /// Employee-size bucket: 1-10, 11-50, 51-200, 201-500, 501-1000, 1001-5000, 5000+.
    #[arg(long)]
    pub size: String,

    /// Show only this industry ("all" for every industry).
    #[arg(long, default_value = "all")]
    pub industry: String,

    /// Re-issue the query this many times if it fails.
    #[arg(long, default_value_t = 0)]
    pub retries: u32,
}

#[derive(Clone, Debug, Args)]
pub struct SampleArgs {
    /// Show the sample lead list instead of the sample report.
    #[arg(long)]
    pub leads: bool,

    /// Sort contacts by this column.
    #[arg(long, value_enum, default_value = "name")]
    pub sort: ContactSortArg,

    /// Sort contacts in descending order.
    #[arg(long)]
    pub desc: bool,
}

/// Where an export takes its data from.
#[derive(Clone, Debug, Args)]
#[group(required = true, multiple = false)]
pub struct ExportSourceArgs {
    /// Export the history entry at this index (see `piq history list`).
    #[arg(long)]
    pub history: Option<usize>,

    /// Export the built-in sample data.
    #[arg(long)]
    pub sample: bool,
}
