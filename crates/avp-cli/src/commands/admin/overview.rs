use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;

pub async fn run(ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let panel = super::loaded_panel(ctx).await?;
    output(&panel.view(), flags.format)
}
