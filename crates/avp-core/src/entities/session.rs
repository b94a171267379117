use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::entities::User;

/// The locally cached identity of the logged-in student.
///
/// Unlike the server-owned entities this record exists only on this machine.
/// It carries an explicit expiry so a stale identity is rejected instead of
/// being trusted indefinitely.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct StoredSession {
    pub user: User,
    pub created_at: DateTime<Utc>,
    pub expires_at: DateTime<Utc>,
}

impl StoredSession {
    /// Build a session for `user` valid for `ttl_hours` from `now`.
    ///
    /// The TTL is capped at a century so absurd configuration values cannot
    /// overflow the expiry arithmetic.
    #[must_use]
    pub fn new(user: User, now: DateTime<Utc>, ttl_hours: u64) -> Self {
        const MAX_TTL_HOURS: i64 = 24 * 365 * 100;
        let hours = i64::try_from(ttl_hours)
            .unwrap_or(MAX_TTL_HOURS)
            .min(MAX_TTL_HOURS);
        Self {
            user,
            created_at: now,
            expires_at: now + chrono::Duration::hours(hours),
        }
    }

    #[must_use]
    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        now >= self.expires_at
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::User;

    fn student() -> User {
        User {
            id: 1,
            name: "A".into(),
            email: "a@x.com".into(),
        }
    }

    #[test]
    fn fresh_session_is_not_expired() {
        let now = Utc::now();
        let session = StoredSession::new(student(), now, 720);
        assert!(!session.is_expired(now));
        assert!(!session.is_expired(now + chrono::Duration::hours(719)));
    }

    #[test]
    fn session_expires_after_ttl() {
        let now = Utc::now();
        let session = StoredSession::new(student(), now, 1);
        assert!(session.is_expired(now + chrono::Duration::hours(1)));
        assert!(session.is_expired(now + chrono::Duration::days(365)));
    }
}
