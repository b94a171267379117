use avp_core::entities::Project;
use avp_core::enums::ProjectStatus;
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::commands::shared::parse::parse_arg;
use crate::context::AppContext;
use crate::output::output;

#[derive(Serialize)]
struct SetStatusResponse {
    updated: bool,
    project: Project,
}

pub async fn run(
    id: i64,
    status: &str,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let status: ProjectStatus = parse_arg(status)?;

    let mut panel = super::loaded_panel(ctx).await?;
    panel.update_status(&ctx.client, id, status).await?;

    let project = find_project(&panel.projects, id)?;
    output(
        &SetStatusResponse {
            updated: true,
            project,
        },
        flags.format,
    )
}

pub(super) fn find_project(projects: &[Project], id: i64) -> anyhow::Result<Project> {
    projects
        .iter()
        .find(|p| p.id == id)
        .cloned()
        .ok_or_else(|| anyhow::anyhow!("project {id} disappeared after update"))
}
