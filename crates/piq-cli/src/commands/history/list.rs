use chrono::{DateTime, Utc};
use piq_history::{HistoryRecord, HistoryStore, Storage};
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::{self, TableOptions, table};

pub const NO_INTEL_HISTORY: &str = "No research history yet";
pub const NO_LEAD_HISTORY: &str = "No lead search history yet";

#[derive(Debug, Serialize)]
struct HistoryRow {
    index: usize,
    label: String,
    timestamp: DateTime<Utc>,
}

pub fn run(filter: Option<&str>, leads: bool, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let query = filter.unwrap_or_default();
    let (rows, empty) = if leads {
        (rows(&ctx.lead_history, query), NO_LEAD_HISTORY)
    } else {
        (rows(&ctx.intel_history, query), NO_INTEL_HISTORY)
    };
    output::output(&rows, flags.format, |rows, options| render(rows, empty, options))
}

fn rows<E: HistoryRecord, S: Storage>(store: &HistoryStore<E, S>, query: &str) -> Vec<HistoryRow> {
    store
        .filter(query)
        .into_iter()
        .map(|(index, entry)| HistoryRow {
            index,
            label: entry.label(),
            timestamp: entry.timestamp(),
        })
        .collect()
}

fn render(rows: &[HistoryRow], empty: &str, options: TableOptions) -> String {
    if rows.is_empty() {
        return empty.to_string();
    }
    let cells: Vec<Vec<String>> = rows
        .iter()
        .map(|row| {
            vec![
                row.index.to_string(),
                row.label.clone(),
                row.timestamp.format("%Y-%m-%d %H:%M").to_string(),
            ]
        })
        .collect();
    table::render_entity_table(&["#", "Search", "When (UTC)"], &cells, options)
}

#[cfg(test)]
mod tests {
    use chrono::{TimeZone, Utc};
    use piq_core::entities::{HistoryEntry, IntelligenceReport};
    use piq_history::{IntelHistory, MemoryStorage};
    use pretty_assertions::assert_eq;

    use super::*;

    const PLAIN: TableOptions = TableOptions {
        max_width: None,
        color: false,
    };

    #[test]
    fn filtered_rows_keep_store_indices() {
        let mut store = IntelHistory::open(MemoryStorage::new());
        let ts = Utc.with_ymd_and_hms(2024, 3, 1, 9, 30, 0).unwrap();
        for name in ["Globex", "Acme Corp", "Initech"] {
            store.record(HistoryEntry::capture(name, &IntelligenceReport::default(), ts));
        }

        let found = rows(&store, "acme");
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].index, 1);

        let out = render(&found, NO_INTEL_HISTORY, PLAIN);
        assert!(out.lines().nth(2).is_some_and(|l| l.contains("Acme Corp") && l.contains("2024-03-01 09:30")));
    }

    #[test]
    fn empty_history_shows_placeholder() {
        assert_eq!(render(&[], NO_LEAD_HISTORY, PLAIN), NO_LEAD_HISTORY);
    }
}
