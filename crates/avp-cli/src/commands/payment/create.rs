use avp_core::entities::Payment;
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::commands::shared::attachment::read_attachment;
use crate::context::AppContext;
use crate::controller::dashboard::Dashboard;
use crate::output::output;

#[derive(Serialize)]
struct PaymentCreateResponse {
    recorded: bool,
    payments: Vec<Payment>,
}

pub async fn run(
    amount: f64,
    proof: Option<&str>,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let student = ctx.require_student()?.clone();
    let proof = proof.map(read_attachment).transpose()?;

    let mut dashboard = Dashboard::new(student);
    dashboard.make_payment(&ctx.client, amount, proof).await?;

    output(
        &PaymentCreateResponse {
            recorded: true,
            payments: dashboard.payments,
        },
        flags.format,
    )
}
