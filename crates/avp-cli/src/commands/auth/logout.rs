use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::output::output;

#[derive(Serialize)]
struct AuthLogoutResponse {
    cleared: bool,
}

pub fn handle(flags: &GlobalFlags) -> anyhow::Result<()> {
    avp_session::store::clear()?;
    output(&AuthLogoutResponse { cleared: true }, flags.format)
}
