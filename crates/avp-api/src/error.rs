//! Gateway error types.

use thiserror::Error;

/// Errors that can occur when talking to the portal API.
///
/// Distinguishes transport failures from server rejections so commands can
/// tell the user what actually went wrong instead of silently doing nothing.
#[derive(Debug, Error)]
pub enum ApiError {
    /// HTTP transport error (connection refused, timeout, bad TLS, or a
    /// response body that failed to decode).
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The server returned a non-success status code.
    #[error("API error ({status}): {message}")]
    Api {
        /// HTTP status code returned by the server.
        status: u16,
        /// Error message or response body.
        message: String,
    },

    /// A response parsed as JSON but not into the expected shape.
    #[error("parse error: {0}")]
    Parse(String),

    /// The server returned a 429 Too Many Requests response.
    #[error("rate limited, retry after {retry_after_secs}s")]
    RateLimited {
        /// Seconds to wait before retrying.
        retry_after_secs: u64,
    },
}
