use crate::cli::GlobalFlags;
use crate::cli::root_commands::Commands;
use crate::commands;
use crate::context::AppContext;

/// Dispatch a parsed command to the corresponding handler module.
pub async fn dispatch(
    command: Commands,
    ctx: &mut AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match command {
        Commands::Research(args) => commands::research::handle(&args, ctx, flags).await,
        Commands::Leads(args) => commands::leads::handle(&args, ctx, flags).await,
        Commands::History { action } => commands::history::handle(&action, ctx, flags),
        Commands::Sample(args) => commands::sample::handle(&args, ctx, flags),
        Commands::Export { action } => commands::export::handle(&action, ctx, flags),
    }
}
