use crate::cli::GlobalFlags;
use crate::cli::root_commands::Commands;
use crate::commands;
use crate::context::AppContext;

/// Dispatch a parsed command to the corresponding handler module.
pub async fn dispatch(
    command: Commands,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match command {
        Commands::Dashboard => commands::dashboard::handle(ctx, flags).await,
        Commands::Project { action } => commands::project::handle(&action, ctx, flags).await,
        Commands::Payment { action } => commands::payment::handle(&action, ctx, flags).await,
        Commands::Admin { action } => commands::admin::handle(&action, ctx, flags).await,
        Commands::Info | Commands::Auth { .. } => {
            unreachable!("info/auth are pre-dispatched in main")
        }
    }
}
