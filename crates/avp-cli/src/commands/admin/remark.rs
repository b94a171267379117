use avp_core::entities::Project;
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;

#[derive(Serialize)]
struct RemarkResponse {
    updated: bool,
    project: Project,
}

pub async fn run(id: i64, text: &str, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let mut panel = super::loaded_panel(ctx).await?;
    panel.set_remark(&ctx.client, id, text).await?;

    let project = super::set_status::find_project(&panel.projects, id)?;
    output(
        &RemarkResponse {
            updated: true,
            project,
        },
        flags.format,
    )
}
