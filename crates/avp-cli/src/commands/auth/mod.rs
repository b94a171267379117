use avp_api::PortalClient;
use avp_config::PortalConfig;
use avp_core::entities::{StoredSession, User};
use chrono::Utc;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::AuthCommands;

mod login;
mod logout;
mod register;
mod status;

pub async fn handle(
    action: &AuthCommands,
    flags: &GlobalFlags,
    config: &PortalConfig,
) -> anyhow::Result<()> {
    match action {
        AuthCommands::Register(args) => register::handle(args, flags, config).await,
        AuthCommands::Login(args) => login::handle(args, flags, config).await,
        AuthCommands::Logout => logout::handle(flags),
        AuthCommands::Status => status::handle(flags),
    }
}

fn client(config: &PortalConfig) -> PortalClient {
    PortalClient::new(config.api.trimmed_base_url(), config.api.timeout_secs)
}

/// Persist a fresh session for `user` and return it.
fn persist_session(user: User, config: &PortalConfig) -> anyhow::Result<StoredSession> {
    let session = StoredSession::new(user, Utc::now(), config.session.ttl_hours);
    avp_session::store::save(&session)?;
    Ok(session)
}
