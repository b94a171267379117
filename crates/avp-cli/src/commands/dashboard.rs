use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::controller::dashboard::Dashboard;
use crate::output::output;

pub async fn handle(ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let student = ctx.require_student()?.clone();
    let mut dashboard = Dashboard::new(student);
    dashboard.load(&ctx.client).await?;
    output(&dashboard.view(), flags.format)
}
