use std::io::IsTerminal;
use std::sync::OnceLock;

use piq_config::GeneralConfig;

use crate::cli::{GlobalFlags, OutputFormat};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct UiPrefs {
    pub color: bool,
    pub progress: bool,
    pub term_width: Option<usize>,
}

/// Facts about the running terminal that feed [`UiPrefs`].
#[derive(Clone, Copy, Debug)]
struct Terminal {
    is_tty: bool,
    no_color: bool,
    columns: Option<usize>,
}

static UI_PREFS: OnceLock<UiPrefs> = OnceLock::new();

pub fn init(flags: &GlobalFlags, general: &GeneralConfig) {
    let terminal = Terminal {
        is_tty: std::io::stdout().is_terminal(),
        no_color: std::env::var_os("NO_COLOR").is_some(),
        columns: std::env::var("COLUMNS")
            .ok()
            .and_then(|value| value.parse::<usize>().ok()),
    };
    let _ = UI_PREFS.set(resolve(flags, general, terminal));
}

fn resolve(flags: &GlobalFlags, general: &GeneralConfig, terminal: Terminal) -> UiPrefs {
    let table = flags.format == OutputFormat::Table;
    UiPrefs {
        color: general.color && terminal.is_tty && !terminal.no_color && table && !flags.quiet,
        progress: terminal.is_tty && !flags.quiet && table,
        term_width: terminal.columns.filter(|width| *width >= 40),
    }
}

#[must_use]
pub fn prefs() -> UiPrefs {
    *UI_PREFS.get().unwrap_or(&UiPrefs {
        color: false,
        progress: false,
        term_width: None,
    })
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    fn flags(format: OutputFormat, quiet: bool) -> GlobalFlags {
        GlobalFlags {
            format,
            quiet,
            verbose: false,
        }
    }

    const TTY: Terminal = Terminal {
        is_tty: true,
        no_color: false,
        columns: Some(120),
    };

    #[test]
    fn color_on_for_interactive_table() {
        let prefs = resolve(&flags(OutputFormat::Table, false), &GeneralConfig::default(), TTY);
        assert!(prefs.color);
        assert!(prefs.progress);
        assert_eq!(prefs.term_width, Some(120));
    }

    #[rstest]
    #[case(OutputFormat::Json, false, TTY)]
    #[case(OutputFormat::Table, true, TTY)]
    #[case(OutputFormat::Table, false, Terminal { no_color: true, ..TTY })]
    #[case(OutputFormat::Table, false, Terminal { is_tty: false, ..TTY })]
    fn color_off(#[case] format: OutputFormat, #[case] quiet: bool, #[case] terminal: Terminal) {
        let prefs = resolve(&flags(format, quiet), &GeneralConfig::default(), terminal);
        assert!(!prefs.color);
    }

    #[test]
    fn config_can_disable_color() {
        let general = GeneralConfig { color: false };
        assert!(!resolve(&flags(OutputFormat::Table, false), &general, TTY).color);
    }

    #[test]
    fn narrow_columns_are_ignored() {
        let terminal = Terminal {
            columns: Some(20),
            ..TTY
        };
        let prefs = resolve(&flags(OutputFormat::Table, false), &GeneralConfig::default(), terminal);
        assert_eq!(prefs.term_width, None);
    }
}
