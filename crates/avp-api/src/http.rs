//! Shared HTTP response helpers for the gateway.
//!
//! Centralizes status-code checks (429 rate limiting with `Retry-After`
//! parsing, non-success to [`ApiError::Api`]) so the resource modules stay
//! focused on request construction and response mapping.

use crate::error::ApiError;

/// Check an HTTP response for common error conditions.
///
/// Returns the response unchanged on success. Handles:
/// - **429 Too Many Requests**: [`ApiError::RateLimited`] with `Retry-After`
///   header parsing (60 s fallback when absent or unparseable).
/// - **Non-success status**: [`ApiError::Api`] with status code and response
///   body.
pub async fn check_response(resp: reqwest::Response) -> Result<reqwest::Response, ApiError> {
    if resp.status() == 429 {
        return Err(ApiError::RateLimited {
            retry_after_secs: parse_retry_after(&resp),
        });
    }
    if !resp.status().is_success() {
        let status = resp.status().as_u16();
        tracing::debug!(status, "portal API returned non-success status");
        return Err(ApiError::Api {
            status,
            message: resp.text().await.unwrap_or_default(),
        });
    }
    Ok(resp)
}

/// Parse the `Retry-After` header as seconds, falling back to 60 s.
fn parse_retry_after(resp: &reqwest::Response) -> u64 {
    resp.headers()
        .get(reqwest::header::RETRY_AFTER)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.parse::<u64>().ok())
        .unwrap_or(60)
}
