use avp_core::entities::User;
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::AuthLoginArgs;
use crate::output::output;

#[derive(Serialize)]
struct AuthLoginResponse {
    logged_in: bool,
    user: User,
    session_expires_at: String,
}

pub async fn handle(
    args: &AuthLoginArgs,
    flags: &GlobalFlags,
    config: &avp_config::PortalConfig,
) -> anyhow::Result<()> {
    let user = super::client(config).login(&args.email).await?;
    let session = super::persist_session(user.clone(), config)?;

    output(
        &AuthLoginResponse {
            logged_in: true,
            user,
            session_expires_at: session.expires_at.to_rfc3339(),
        },
        flags.format,
    )
}
