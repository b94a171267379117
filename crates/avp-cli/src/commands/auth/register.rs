use avp_core::entities::User;
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::AuthRegisterArgs;
use crate::output::output;

#[derive(Serialize)]
struct AuthRegisterResponse {
    registered: bool,
    user: User,
    session_expires_at: String,
}

pub async fn handle(
    args: &AuthRegisterArgs,
    flags: &GlobalFlags,
    config: &avp_config::PortalConfig,
) -> anyhow::Result<()> {
    let user = super::client(config)
        .register(&args.name, &args.email)
        .await?;
    let session = super::persist_session(user.clone(), config)?;

    output(
        &AuthRegisterResponse {
            registered: true,
            user,
            session_expires_at: session.expires_at.to_rfc3339(),
        },
        flags.format,
    )
}
