use std::future::Future;

use piq_core::outcome::{Failure, Outcome};
use piq_view::state::{Resolution, Surface};
use serde::Serialize;

use crate::cli::{GlobalFlags, OutputFormat};
use crate::output;
use crate::progress::Progress;

/// Run one search on `surface`, re-issuing the same query up to `retries`
/// times while it fails. Returns how the final attempt resolved.
pub async fn run_search<Q, R, F, Fut>(
    surface: &mut Surface<Q, R>,
    query: Q,
    retries: u32,
    label: &str,
    call: F,
) -> anyhow::Result<Resolution>
where
    Q: Clone,
    R: Default,
    F: Fn(Q) -> Fut,
    Fut: Future<Output = Outcome<R>>,
{
    let mut ticket = surface.begin(query.clone())?;
    let mut current = query;
    let mut attempt = 0u32;

    loop {
        let progress = Progress::spinner(label);
        let outcome = call(current).await;
        let resolution = surface.resolve(ticket, outcome);

        if resolution == Resolution::Failed && attempt < retries {
            attempt += 1;
            let message = surface.error().map_or("", Failure::message);
            progress.finish_err(&format!("{label} failed: {message}"));
            tracing::warn!(attempt, retries, %message, "search failed, retrying");

            let (next_ticket, next_query) = surface.retry()?;
            ticket = next_ticket;
            current = next_query;
            continue;
        }

        progress.finish_clear();
        if resolution == Resolution::Placeholder {
            tracing::warn!("agent returned no structured report; showing empty sections");
        }
        return Ok(resolution);
    }
}

#[derive(Serialize)]
struct FailureView<'a> {
    error: &'a Failure,
    retry: &'a str,
}

/// Present a failed search: the message and a command that re-issues it.
pub fn report_failure(failure: &Failure, retry: &str, flags: &GlobalFlags) -> anyhow::Result<()> {
    match flags.format {
        OutputFormat::Table => {
            eprintln!("Search failed: {failure}");
            output::notice(flags, &format!("Retry with: {retry}"));
            Ok(())
        }
        OutputFormat::Json | OutputFormat::Raw => output::output(
            &FailureView {
                error: failure,
                retry,
            },
            flags.format,
            |view, _| view.error.to_string(),
        ),
    }
}

/// Quote `value` for a shell command line when it contains anything other
/// than plain word characters.
#[must_use]
pub fn shell_word(value: &str) -> String {
    let plain = !value.is_empty()
        && value
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.' | '/' | '+' | ','));
    if plain {
        value.to_string()
    } else {
        format!("'{}'", value.replace('\'', r"'\''"))
    }
}
