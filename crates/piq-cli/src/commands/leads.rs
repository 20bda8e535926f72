use chrono::Utc;
use piq_core::entities::LeadHistoryEntry;
use piq_core::query::LeadQuery;
use piq_view::leads::IndustryFilter;
use piq_view::state::Resolution;

use crate::cli::{GlobalFlags, LeadsArgs};
use crate::commands::shared::parse::parse_size;
use crate::commands::shared::search::{self, shell_word};
use crate::context::AppContext;
use crate::output;
use crate::output::leads::LeadView;

/// Handle `piq leads`.
pub async fn handle(args: &LeadsArgs, ctx: &mut AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let size = parse_size(&args.size)?;
    let query = match LeadQuery::new(&args.designation, size) {
        Ok(query) => query,
        Err(error) => {
            output::notice(flags, &error.to_string());
            return Ok(());
        }
    };

    let client = ctx.agent()?;
    let client = &client;
    let agent_id = ctx.config.agent.lead_agent_id.clone();
    let agent_id = agent_id.as_str();
    let label = format!("Finding {} leads ({} employees)...", query.designation, size);

    let resolution = search::run_search(
        &mut ctx.state.leads,
        query.clone(),
        args.retries,
        &label,
        move |query| async move { client.find_leads(&query, agent_id).await },
    )
    .await?;

    match resolution {
        Resolution::Report | Resolution::Placeholder => {
            if resolution == Resolution::Report {
                record_fetched(ctx, &query);
            }
            let Some(result) = ctx.state.displayed_leads() else {
                return Ok(());
            };
            let filter = IndustryFilter::parse(&args.industry);
            output::output(&LeadView::new(&result, &filter), flags.format, |view, options| {
                output::leads::render(view.result, &filter, options)
            })
        }
        Resolution::Failed => match ctx.state.leads.error() {
            Some(failure) => search::report_failure(failure, &retry_command(&query), flags),
            None => Ok(()),
        },
        Resolution::Stale => Ok(()),
    }
}

/// Store the fetched result, never the sample shown in its place.
fn record_fetched(ctx: &mut AppContext, query: &LeadQuery) {
    if let Some(result) = ctx.state.leads.report() {
        let entry = LeadHistoryEntry::capture(
            &query.designation,
            query.employee_size.as_str(),
            result,
            Utc::now(),
        );
        ctx.lead_history.record(entry);
    }
}

fn retry_command(query: &LeadQuery) -> String {
    format!(
        "piq leads --designation {} --size {}",
        shell_word(&query.designation),
        shell_word(query.employee_size.as_str())
    )
}
