use avp_core::entities::Project;
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::commands::shared::attachment::read_attachment;
use crate::context::AppContext;
use crate::output::output;

#[derive(Serialize)]
struct AttachResponse {
    attached: bool,
    project: Project,
}

pub async fn run(
    project_id: i64,
    file: &str,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let attachment = read_attachment(file)?;

    let mut panel = super::loaded_panel(ctx).await?;
    panel
        .attach_deliverable(&ctx.client, project_id, attachment)
        .await?;

    let project = super::set_status::find_project(&panel.projects, project_id)?;
    output(
        &AttachResponse {
            attached: true,
            project,
        },
        flags.format,
    )
}
