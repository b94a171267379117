use avp_session::SessionError;
use chrono::Utc;
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::output::output;

#[derive(Serialize)]
struct AuthStatusResponse {
    logged_in: bool,
    user: Option<String>,
    email: Option<String>,
    user_id: Option<i64>,
    session_expires_at: Option<String>,
    session_source: Option<String>,
    note: Option<String>,
}

impl AuthStatusResponse {
    fn logged_out(note: Option<String>) -> Self {
        Self {
            logged_in: false,
            user: None,
            email: None,
            user_id: None,
            session_expires_at: None,
            session_source: None,
            note,
        }
    }
}

pub fn handle(flags: &GlobalFlags) -> anyhow::Result<()> {
    let status = match avp_session::store::current(Utc::now()) {
        Ok(Some(session)) => AuthStatusResponse {
            logged_in: true,
            user: Some(session.user.name.clone()),
            email: Some(session.user.email.clone()),
            user_id: Some(session.user.id),
            session_expires_at: Some(session.expires_at.to_rfc3339()),
            session_source: avp_session::store::detect_source(),
            note: None,
        },
        Ok(None) => AuthStatusResponse::logged_out(Some("no session stored".into())),
        Err(error @ SessionError::Expired) => {
            AuthStatusResponse::logged_out(Some(error.to_string()))
        }
        Err(error) => return Err(error.into()),
    };

    output(&status, flags.format)
}
