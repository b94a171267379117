use avp_api::PortalClient;
use avp_config::PortalConfig;
use avp_core::entities::{StoredSession, User};
use avp_session::SessionError;
use chrono::Utc;

/// Everything a dispatched command needs: configuration, the API client,
/// and whatever session is stored locally.
pub struct AppContext {
    pub config: PortalConfig,
    pub client: PortalClient,
    session: Option<StoredSession>,
}

impl AppContext {
    /// Build the context from loaded configuration.
    ///
    /// The stored session is read once here; expiry is enforced only by the
    /// commands that actually need a logged-in student.
    #[must_use]
    pub fn init(config: PortalConfig) -> Self {
        let client = PortalClient::new(config.api.trimmed_base_url(), config.api.timeout_secs);
        let session = avp_session::store::load();
        Self {
            config,
            client,
            session,
        }
    }

    /// Resolve the logged-in student, enforcing session expiry.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::NotLoggedIn`] when no session is stored and
    /// [`SessionError::Expired`] when the stored one has lapsed.
    pub fn require_student(&self) -> Result<&User, SessionError> {
        match &self.session {
            None => Err(SessionError::NotLoggedIn),
            Some(session) if session.is_expired(Utc::now()) => Err(SessionError::Expired),
            Some(session) => Ok(&session.user),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use avp_core::entities::User;
    use chrono::Utc;

    fn context_with_session(session: Option<StoredSession>) -> AppContext {
        let config = PortalConfig::default();
        let client = PortalClient::new(config.api.trimmed_base_url(), config.api.timeout_secs);
        AppContext {
            config,
            client,
            session,
        }
    }

    fn student() -> User {
        User {
            id: 1,
            name: "A".into(),
            email: "a@x.com".into(),
        }
    }

    #[test]
    fn require_student_without_session_fails() {
        let ctx = context_with_session(None);
        assert!(matches!(
            ctx.require_student(),
            Err(SessionError::NotLoggedIn)
        ));
    }

    #[test]
    fn require_student_with_expired_session_fails() {
        let session = StoredSession::new(student(), Utc::now() - chrono::Duration::hours(2), 1);
        let ctx = context_with_session(Some(session));
        assert!(matches!(ctx.require_student(), Err(SessionError::Expired)));
    }

    #[test]
    fn require_student_with_live_session_returns_user() {
        let session = StoredSession::new(student(), Utc::now(), 720);
        let ctx = context_with_session(Some(session));
        let user = ctx.require_student().expect("session is live");
        assert_eq!(user.id, 1);
    }
}
