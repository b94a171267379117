use avp_core::entities::Project;

use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;

pub async fn run(limit: Option<u32>, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let student = ctx.require_student()?;
    let limit = limit
        .or(flags.limit)
        .unwrap_or(ctx.config.general.default_limit);

    let mut projects: Vec<Project> = ctx.client.list_projects(Some(student.id)).await?;
    projects.truncate(usize::try_from(limit)?);

    output(&projects, flags.format)
}
