use crate::cli::GlobalFlags;
use crate::cli::subcommands::ProjectCommands;
use crate::context::AppContext;

mod list;
mod submit;

pub async fn handle(
    action: &ProjectCommands,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match action {
        ProjectCommands::Submit {
            title,
            technology,
            description,
            file,
        } => submit::run(title, technology, description, file.as_deref(), ctx, flags).await,
        ProjectCommands::List { limit } => list::run(*limit, ctx, flags).await,
    }
}
