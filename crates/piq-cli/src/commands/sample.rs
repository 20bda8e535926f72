use piq_view::leads::IndustryFilter;

use crate::cli::{GlobalFlags, SampleArgs};
use crate::commands::shared::parse::contact_sort;
use crate::context::AppContext;
use crate::output;
use crate::output::leads::LeadView;

/// Handle `piq sample`. Sample data is displayed but never recorded.
pub fn handle(args: &SampleArgs, ctx: &mut AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    ctx.state.set_sample_mode(true);

    if args.leads {
        let Some(result) = ctx.state.displayed_leads() else {
            return Ok(());
        };
        let filter = IndustryFilter::All;
        return output::output(&LeadView::new(&result, &filter), flags.format, |view, options| {
            output::leads::render(view.result, &filter, options)
        });
    }

    let Some(report) = ctx.state.displayed_report() else {
        return Ok(());
    };
    let sort = contact_sort(args.sort, args.desc);
    output::output(&*report, flags.format, |report, options| {
        output::report::render(report, sort, options)
    })
}
