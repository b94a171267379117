//! Admin panel handlers.
//!
//! Each mutation loads the panel first (the operations check the current
//! record before patching), acts, and prints the refreshed state.

use crate::cli::GlobalFlags;
use crate::cli::subcommands::AdminCommands;
use crate::context::AppContext;
use crate::controller::admin::AdminPanel;

mod attach;
mod overview;
mod remark;
mod set_status;
mod verify_payment;

pub async fn handle(
    action: &AdminCommands,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match action {
        AdminCommands::Overview => overview::run(ctx, flags).await,
        AdminCommands::VerifyPayment { id } => verify_payment::run(*id, ctx, flags).await,
        AdminCommands::SetStatus { id, status } => {
            set_status::run(*id, status, ctx, flags).await
        }
        AdminCommands::Remark { id, text } => remark::run(*id, text, ctx, flags).await,
        AdminCommands::Attach { project_id, file } => {
            attach::run(*project_id, file, ctx, flags).await
        }
    }
}

async fn loaded_panel(ctx: &AppContext) -> anyhow::Result<AdminPanel> {
    let mut panel = AdminPanel::default();
    panel.load(&ctx.client).await?;
    Ok(panel)
}
