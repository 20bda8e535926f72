mod list;
mod remove;
mod show;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::HistoryCommands;
use crate::context::AppContext;

/// Handle `piq history`.
pub fn handle(action: &HistoryCommands, ctx: &mut AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    match action {
        HistoryCommands::List { filter, leads } => list::run(filter.as_deref(), *leads, ctx, flags),
        HistoryCommands::Show { index, leads } => show::run(*index, *leads, ctx, flags),
        HistoryCommands::Remove { index, leads } => remove::run(*index, *leads, ctx, flags),
    }
}
