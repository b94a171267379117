//! Cross-cutting error types for the portal client.
//!
//! Transport and configuration errors live in their own crates (`ApiError`,
//! `ConfigError`, `SessionError`); everything converges on `anyhow` at the
//! CLI boundary.

use thiserror::Error;

/// Errors raised by domain-level checks in any portal crate.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Entity lookup returned no result.
    #[error("{entity_type} {id} not found")]
    NotFound { entity_type: &'static str, id: i64 },

    /// A state machine transition was attempted that is not allowed.
    #[error("invalid status transition for {entity_type} {id}: {from} to {to}")]
    InvalidTransition {
        entity_type: &'static str,
        id: i64,
        from: String,
        to: String,
    },

    /// Input failed validation before any network call was made.
    #[error("validation error: {0}")]
    Validation(String),

    /// Catch-all for unexpected errors.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}
