use serde::Serialize;

use crate::cli::{GlobalFlags, OutputFormat};
use crate::ui;

pub mod leads;
pub mod markdown;
pub mod report;
pub mod table;

pub use table::TableOptions;

/// Table options derived from the resolved UI preferences.
#[must_use]
pub fn table_options() -> TableOptions {
    let prefs = ui::prefs();
    TableOptions {
        max_width: prefs.term_width,
        color: prefs.color,
    }
}

/// Render `value` in the requested format. `table` draws the terminal view.
pub fn render<T, F>(value: &T, format: OutputFormat, table: F) -> anyhow::Result<String>
where
    T: Serialize + ?Sized,
    F: FnOnce(&T, TableOptions) -> String,
{
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(value)?),
        OutputFormat::Table => Ok(table(value, table_options())),
        OutputFormat::Raw => Ok(serde_json::to_string(value)?),
    }
}

/// Print `value` in the requested format.
pub fn output<T, F>(value: &T, format: OutputFormat, table: F) -> anyhow::Result<()>
where
    T: Serialize + ?Sized,
    F: FnOnce(&T, TableOptions) -> String,
{
    let rendered = render(value, format, table)?;
    println!("{rendered}");
    Ok(())
}

/// A status line on stderr, suppressed by `--quiet`.
pub fn notice(flags: &GlobalFlags, message: &str) {
    if !flags.quiet {
        eprintln!("{message}");
    }
}

#[cfg(test)]
mod tests {
    use serde::Serialize;

    use super::render;
    use crate::cli::OutputFormat;

    #[derive(Serialize)]
    struct Example {
        id: &'static str,
        value: u32,
    }

    fn table(value: &Example, _: super::TableOptions) -> String {
        format!("{} = {}", value.id, value.value)
    }

    #[test]
    fn json_render_is_valid_json() {
        let value = Example { id: "x", value: 7 };
        let out = render(&value, OutputFormat::Json, table).expect("json render should work");
        let parsed: serde_json::Value = serde_json::from_str(&out).expect("json should parse");
        assert_eq!(parsed["id"], "x");
        assert_eq!(parsed["value"], 7);
    }

    #[test]
    fn raw_render_is_single_line_json() {
        let value = Example { id: "x", value: 7 };
        let out = render(&value, OutputFormat::Raw, table).expect("raw render should work");
        assert!(!out.contains('\n'));
    }

    #[test]
    fn table_render_uses_view() {
        let value = Example { id: "x", value: 7 };
        let out = render(&value, OutputFormat::Table, table).expect("table render should work");
        assert_eq!(out, "x = 7");
    }
}
