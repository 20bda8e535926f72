use anyhow::bail;
use piq_history::HistoryRecord;

use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output;

pub fn run(index: usize, leads: bool, ctx: &mut AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let label = if leads {
        ctx.lead_history.get(index).map(HistoryRecord::label)
    } else {
        ctx.intel_history.get(index).map(HistoryRecord::label)
    };
    let Some(label) = label else {
        bail!("no history entry at index {index}");
    };

    if leads {
        ctx.lead_history.remove(index);
    } else {
        ctx.intel_history.remove(index);
    }
    output::notice(flags, &format!("Removed {label}"));
    Ok(())
}
