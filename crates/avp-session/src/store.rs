use std::fs;
use std::path::PathBuf;

use chrono::{DateTime, Utc};

use avp_core::entities::StoredSession;

use crate::error::SessionError;

const DEFAULT_KEYRING_SERVICE: &str = "avportal-cli";
const KEYRING_USER: &str = "session";
const SESSION_FILE_NAME: &str = "session";

/// Returns the keyring service name.
///
/// Defaults to `"avportal-cli"`. Override via `AVP_KEYRING_SERVICE` for
/// testing (e.g. `"avportal-cli-test"`) to avoid touching a real session.
fn keyring_service() -> String {
    std::env::var("AVP_KEYRING_SERVICE").unwrap_or_else(|_| DEFAULT_KEYRING_SERVICE.to_string())
}

/// Persist the session record, overwriting any prior session.
///
/// Stored in the OS keychain; falls back to a file when the keyring is
/// unavailable.
///
/// # Errors
///
/// Returns `SessionError::StoreError` if both keyring and file storage fail.
pub fn save(session: &StoredSession) -> Result<(), SessionError> {
    let payload = serde_json::to_string(session)
        .map_err(|e| SessionError::StoreError(format!("serialize session: {e}")))?;

    match keyring::Entry::new(&keyring_service(), KEYRING_USER) {
        Ok(entry) => match entry.set_password(&payload) {
            Ok(()) => Ok(()),
            Err(error) => {
                tracing::warn!(%error, "keyring store failed; falling back to file");
                store_file(&payload)
            }
        },
        Err(error) => {
            tracing::warn!(%error, "keyring unavailable; falling back to file");
            store_file(&payload)
        }
    }
}

/// Load the saved session record, if any. Priority: keyring, then file.
///
/// Absent or unparseable content returns `None`.
#[must_use]
pub fn load() -> Option<StoredSession> {
    if let Ok(entry) = keyring::Entry::new(&keyring_service(), KEYRING_USER)
        && let Ok(payload) = entry.get_password()
        && !payload.is_empty()
        && let Some(session) = parse_session(&payload)
    {
        return Some(session);
    }

    load_file().and_then(|payload| parse_session(&payload))
}

/// Load the saved session and enforce its expiry.
///
/// Returns `Ok(None)` when no session is stored.
///
/// # Errors
///
/// Returns `SessionError::Expired` when the stored record's `expires_at` is
/// in the past.
pub fn current(now: DateTime<Utc>) -> Result<Option<StoredSession>, SessionError> {
    match load() {
        Some(session) if session.is_expired(now) => Err(SessionError::Expired),
        other => Ok(other),
    }
}

/// Delete the stored session from keyring and file.
///
/// # Errors
///
/// Returns `SessionError::StoreError` if the session file cannot be removed.
pub fn clear() -> Result<(), SessionError> {
    // Keyring deletion is best effort; the entry may not exist
    if let Ok(entry) = keyring::Entry::new(&keyring_service(), KEYRING_USER) {
        let _ = entry.delete_credential();
    }

    let path = session_path()?;
    if path.exists() {
        fs::remove_file(&path).map_err(|e| {
            SessionError::StoreError(format!("failed to delete {}: {e}", path.display()))
        })?;
    }

    Ok(())
}

/// Detect which tier the current session came from (for status display).
#[must_use]
pub fn detect_source() -> Option<String> {
    if let Ok(entry) = keyring::Entry::new(&keyring_service(), KEYRING_USER)
        && entry.get_password().is_ok_and(|p| !p.is_empty())
    {
        return Some("keyring".into());
    }
    if load_file().is_some() {
        return Some("file".into());
    }
    None
}

// --- Private helpers ---

fn parse_session(payload: &str) -> Option<StoredSession> {
    match serde_json::from_str(payload) {
        Ok(session) => Some(session),
        Err(error) => {
            tracing::warn!(%error, "stored session is unparseable; treating as logged out");
            None
        }
    }
}

fn session_path() -> Result<PathBuf, SessionError> {
    dirs::home_dir()
        .map(|h| h.join(".avportal").join(SESSION_FILE_NAME))
        .ok_or_else(|| {
            SessionError::StoreError("home directory not found, cannot store session".into())
        })
}

fn store_file(payload: &str) -> Result<(), SessionError> {
    let path = session_path()?;
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .map_err(|e| SessionError::StoreError(format!("mkdir {}: {e}", parent.display())))?;
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            if let Err(e) = fs::set_permissions(parent, fs::Permissions::from_mode(0o700)) {
                tracing::warn!("failed to chmod 0700 {}: {e}", parent.display());
            }
        }
    }
    fs::write(&path, payload)
        .map_err(|e| SessionError::StoreError(format!("write {}: {e}", path.display())))?;

    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        fs::set_permissions(&path, fs::Permissions::from_mode(0o600))
            .map_err(|e| SessionError::StoreError(format!("chmod {}: {e}", path.display())))?;
    }

    Ok(())
}

fn load_file() -> Option<String> {
    let path = session_path().ok()?;
    fs::read_to_string(&path)
        .ok()
        .filter(|s| !s.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use avp_core::entities::User;
    use chrono::Utc;

    use super::*;

    fn sample_session(ttl_hours: u64) -> StoredSession {
        StoredSession::new(
            User {
                id: 1,
                name: "A".into(),
                email: "a@x.com".into(),
            },
            Utc::now(),
            ttl_hours,
        )
    }

    #[test]
    fn session_path_is_under_home() {
        let path = session_path().expect("should resolve");
        assert!(path.ends_with(".avportal/session"));
    }

    #[test]
    fn parse_session_accepts_saved_payload() {
        let session = sample_session(720);
        let payload = serde_json::to_string(&session).expect("serialize");
        let recovered = parse_session(&payload).expect("should parse");
        assert_eq!(recovered.user.email, "a@x.com");
    }

    #[test]
    fn parse_session_tolerates_garbage() {
        assert!(parse_session("not json").is_none());
        assert!(parse_session("{\"wrong\": \"shape\"}").is_none());
    }

    #[test]
    fn file_store_load_delete_cycle() {
        let tmp = tempfile::TempDir::new().expect("tmp dir");
        let session_file = tmp.path().join("session");

        let session = sample_session(720);
        let payload = serde_json::to_string(&session).expect("serialize");
        std::fs::write(&session_file, &payload).expect("write");
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            std::fs::set_permissions(&session_file, std::fs::Permissions::from_mode(0o600))
                .expect("chmod");
        }

        let content = std::fs::read_to_string(&session_file).expect("read");
        let recovered = parse_session(&content).expect("should parse");
        assert_eq!(recovered, session);

        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            let mode = std::fs::metadata(&session_file)
                .expect("metadata")
                .permissions()
                .mode()
                & 0o777;
            assert_eq!(mode, 0o600, "session file should be 0600");
        }

        std::fs::remove_file(&session_file).expect("delete");
        assert!(!session_file.exists());
    }

    #[test]
    fn expired_record_is_detected() {
        let session = sample_session(0);
        assert!(session.is_expired(Utc::now()));
    }
}
