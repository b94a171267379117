use avp_core::entities::Payment;

use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;

pub async fn run(limit: Option<u32>, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let student = ctx.require_student()?;
    let limit = limit
        .or(flags.limit)
        .unwrap_or(ctx.config.general.default_limit);

    let mut payments: Vec<Payment> = ctx.client.list_payments(Some(student.id)).await?;
    payments.truncate(usize::try_from(limit)?);

    output(&payments, flags.format)
}
