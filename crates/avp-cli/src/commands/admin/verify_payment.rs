use avp_core::entities::Payment;
use chrono::Utc;
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;

#[derive(Serialize)]
struct VerifyPaymentResponse {
    verified: bool,
    payment: Payment,
}

pub async fn run(id: i64, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let mut panel = super::loaded_panel(ctx).await?;
    panel.verify_payment(&ctx.client, id, Utc::now()).await?;

    let payment = panel
        .payments
        .iter()
        .find(|p| p.id == id)
        .cloned()
        .ok_or_else(|| anyhow::anyhow!("payment {id} disappeared after verification"))?;

    output(
        &VerifyPaymentResponse {
            verified: true,
            payment,
        },
        flags.format,
    )
}
