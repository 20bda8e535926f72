use anyhow::bail;
use piq_view::contacts::ContactSort;
use piq_view::leads::IndustryFilter;

use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output;
use crate::output::leads::LeadView;

/// Display a stored result without contacting the agent.
pub fn run(index: usize, leads: bool, ctx: &mut AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    if leads {
        let Some(entry) = ctx.lead_history.get(index) else {
            bail!("no lead history entry at index {index} ({} stored)", ctx.lead_history.len());
        };
        ctx.state.leads.load(entry.data.clone(), None);
        let Some(result) = ctx.state.displayed_leads() else {
            return Ok(());
        };
        let filter = IndustryFilter::All;
        return output::output(&LeadView::new(&result, &filter), flags.format, |view, options| {
            output::leads::render(view.result, &filter, options)
        });
    }

    let Some(entry) = ctx.intel_history.get(index) else {
        bail!("no research history entry at index {index} ({} stored)", ctx.intel_history.len());
    };
    ctx.state.intel.load(entry.data.clone(), None);
    let Some(report) = ctx.state.displayed_report() else {
        return Ok(());
    };
    output::output(&*report, flags.format, |report, options| {
        output::report::render(report, ContactSort::default(), options)
    })
}
