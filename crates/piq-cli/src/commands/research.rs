use chrono::Utc;
use piq_core::entities::HistoryEntry;
use piq_core::query::IntelQuery;
use piq_view::state::Resolution;

use crate::cli::{GlobalFlags, ResearchArgs};
use crate::commands::shared::parse::contact_sort;
use crate::commands::shared::search::{self, shell_word};
use crate::context::AppContext;
use crate::output;

/// Handle `piq research`.
pub async fn handle(
    args: &ResearchArgs,
    ctx: &mut AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let query = match IntelQuery::new(&args.company, args.domain.as_deref(), args.contacts.as_deref())
    {
        Ok(query) => query,
        Err(error) => {
            output::notice(flags, &error.to_string());
            return Ok(());
        }
    };

    let client = ctx.agent()?;
    let client = &client;
    let agent_id = ctx.config.agent.intel_agent_id.clone();
    let agent_id = agent_id.as_str();
    let label = format!("Researching {}...", query.company);

    let resolution = search::run_search(
        &mut ctx.state.intel,
        query.clone(),
        args.retries,
        &label,
        move |query| async move { client.research(&query, agent_id).await },
    )
    .await?;

    match resolution {
        Resolution::Report | Resolution::Placeholder => {
            if resolution == Resolution::Report {
                record_fetched(ctx, &query);
            }
            let Some(report) = ctx.state.displayed_report() else {
                return Ok(());
            };
            let sort = contact_sort(args.sort, args.desc);
            output::output(&*report, flags.format, |report, options| {
                output::report::render(report, sort, options)
            })
        }
        Resolution::Failed => match ctx.state.intel.error() {
            Some(failure) => search::report_failure(failure, &retry_command(&query), flags),
            None => Ok(()),
        },
        Resolution::Stale => Ok(()),
    }
}

/// Store the fetched report, never the sample shown in its place.
fn record_fetched(ctx: &mut AppContext, query: &IntelQuery) {
    if let Some(report) = ctx.state.intel.report() {
        let entry = HistoryEntry::capture(&query.company, report, Utc::now());
        ctx.intel_history.record(entry);
    }
}

/// The command line that re-issues `query`.
fn retry_command(query: &IntelQuery) -> String {
    let mut command = format!("piq research {}", shell_word(&query.company));
    if let Some(domain) = &query.domain {
        command.push_str(&format!(" --domain {}", shell_word(domain)));
    }
    if let Some(contacts) = &query.contacts {
        command.push_str(&format!(" --contacts {}", shell_word(contacts)));
    }
    command
}
