use avp_core::entities::Project;
use avp_core::enums::Technology;
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::commands::shared::attachment::read_attachment;
use crate::commands::shared::parse::parse_arg;
use crate::context::AppContext;
use crate::controller::dashboard::{Dashboard, ProjectForm};
use crate::output::output;

#[derive(Serialize)]
struct ProjectSubmitResponse {
    submitted: bool,
    projects: Vec<Project>,
}

pub async fn run(
    title: &str,
    technology: &str,
    description: &str,
    file: Option<&str>,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let student = ctx.require_student()?.clone();
    let technology: Technology = parse_arg(technology)?;
    let attachment = file.map(read_attachment).transpose()?;

    let mut dashboard = Dashboard::new(student);
    dashboard
        .submit_project(
            &ctx.client,
            ProjectForm {
                title: title.to_string(),
                technology,
                description: description.to_string(),
            },
            attachment,
        )
        .await?;

    output(
        &ProjectSubmitResponse {
            submitted: true,
            projects: dashboard.projects,
        },
        flags.format,
    )
}
