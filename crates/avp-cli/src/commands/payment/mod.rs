use crate::cli::GlobalFlags;
use crate::cli::subcommands::PaymentCommands;
use crate::context::AppContext;

mod create;
mod list;

pub async fn handle(
    action: &PaymentCommands,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match action {
        PaymentCommands::Create { amount, proof } => {
            create::run(*amount, proof.as_deref(), ctx, flags).await
        }
        PaymentCommands::List { limit } => list::run(*limit, ctx, flags).await,
    }
}
