use clap::Parser;

pub mod global;
pub mod root_commands;
pub mod subcommands;

pub use global::{GlobalFlags, OutputFormat};
pub use root_commands::{
    Commands, ContactSortArg, ExportSourceArgs, LeadsArgs, ResearchArgs, SampleArgs,
};

/// Top-level CLI parser for the `piq` binary.
#[derive(Debug, Parser)]
#[command(
    name = "piq",
    version,
    about = "ProspectIQ - company intelligence and lead search"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output format: json, table, raw
    #[arg(short, long, global = true, default_value = "table")]
    pub format: OutputFormat,

    /// Quiet mode (suppress notices and progress)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Verbose mode (debug logging)
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

impl Cli {
    #[must_use]
    pub fn global_flags(&self) -> GlobalFlags {
        GlobalFlags {
            format: self.format,
            quiet: self.quiet,
            verbose: self.verbose,
        }
    }
}

#[cfg(test)]
mod tests {
    use clap::{CommandFactory, Parser};
    use pretty_assertions::assert_eq;

    use super::subcommands::{ExportCommands, HistoryCommands};
    use super::{Cli, Commands, ContactSortArg, OutputFormat};

    #[test]
    fn clap_command_tree_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn format_defaults_to_table() {
        let cli = Cli::try_parse_from(["piq", "sample"]).expect("cli should parse");
        assert_eq!(cli.format, OutputFormat::Table);
    }

    #[test]
    fn global_flags_parse_before_and_after_subcommand() {
        let cli = Cli::try_parse_from(["piq", "--format", "json", "sample", "--quiet"])
            .expect("cli should parse");
        assert_eq!(cli.format, OutputFormat::Json);
        assert!(cli.quiet);
        assert!(matches!(cli.command, Commands::Sample(_)));
    }

    #[test]
    fn output_format_rejects_invalid_value() {
        assert!(Cli::try_parse_from(["piq", "--format", "xml", "sample"]).is_err());
    }

    #[test]
    fn research_takes_company_and_options() {
        let cli = Cli::try_parse_from([
            "piq",
            "research",
            "Acme Corp",
            "--domain",
            "acme.com",
            "--contacts",
            "Jane Smith, John Doe",
            "--sort",
            "title",
            "--desc",
            "--retries",
            "2",
        ])
        .expect("cli should parse");
        let Commands::Research(args) = cli.command else {
            panic!("expected research");
        };
        assert_eq!(args.company, "Acme Corp");
        assert_eq!(args.domain.as_deref(), Some("acme.com"));
        assert_eq!(args.sort, ContactSortArg::Title);
        assert!(args.desc);
        assert_eq!(args.retries, 2);
    }

    #[test]
    fn leads_requires_designation_and_size() {
        assert!(Cli::try_parse_from(["piq", "leads", "--designation", "CTO"]).is_err());
        let cli = Cli::try_parse_from(["piq", "leads", "--designation", "CTO", "--size", "51-200"])
            .expect("cli should parse");
        let Commands::Leads(args) = cli.command else {
            panic!("expected leads");
        };
        assert_eq!(args.industry, "all");
    }

    #[test]
    fn history_subcommands_parse() {
        let cli = Cli::try_parse_from(["piq", "history", "remove", "3", "--leads"]).expect("parse");
        assert!(matches!(
            cli.command,
            Commands::History {
                action: HistoryCommands::Remove { index: 3, leads: true }
            }
        ));

        let cli = Cli::try_parse_from(["piq", "history", "list", "--filter", "acme"]).expect("parse");
        assert!(matches!(
            cli.command,
            Commands::History {
                action: HistoryCommands::List { ref filter, leads: false }
            } if filter.as_deref() == Some("acme")
        ));
    }

    #[test]
    fn export_source_is_exclusive() {
        assert!(
            Cli::try_parse_from(["piq", "export", "json", "--history", "0", "--sample"]).is_err()
        );
        let cli = Cli::try_parse_from(["piq", "export", "xls", "--sample", "--industry", "SaaS"])
            .expect("parse");
        let Commands::Export {
            action: ExportCommands::Xls { source, industry, .. },
        } = cli.command
        else {
            panic!("expected export xls");
        };
        assert!(source.sample);
        assert_eq!(industry, "SaaS");
    }

    #[test]
    fn export_requires_a_source() {
        assert!(Cli::try_parse_from(["piq", "export", "xls"]).is_err());
    }
}
