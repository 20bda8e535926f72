use clap::Subcommand;

/// Research and lead history commands. `--leads` selects the lead history.
#[derive(Clone, Debug, Subcommand)]
pub enum HistoryCommands {
    /// List past searches, most recent first.
    List {
        /// Only entries whose label contains this text (case-insensitive).
        #[arg(long)]
        filter: Option<String>,
        #[arg(long)]
        leads: bool,
    },
    /// Show the stored result of one past search.
    Show {
        index: usize,
        #[arg(long)]
        leads: bool,
    },
    /// Delete one past search.
    Remove {
        index: usize,
        #[arg(long)]
        leads: bool,
    },
}
