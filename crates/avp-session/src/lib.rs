//! # avp-session
//!
//! Local persistence of the logged-in identity.
//!
//! The session record lives in the OS keychain when available, with a
//! `0600`-permission file under `~/.avportal` as fallback. Records carry an
//! explicit expiry; an expired session is an error rather than a silently
//! trusted identity.

mod error;
pub mod store;

pub use error::SessionError;
