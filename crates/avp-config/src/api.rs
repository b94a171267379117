//! API endpoint configuration.

use serde::{Deserialize, Serialize};

/// Default portal backend address for local development.
fn default_base_url() -> String {
    "http://localhost:8000".to_string()
}

/// Default request timeout.
const fn default_timeout_secs() -> u64 {
    10
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ApiConfig {
    /// Base URL of the portal REST API.
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Per-request timeout in seconds.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl ApiConfig {
    /// Base URL with any trailing slash removed, so paths can be appended
    /// with a single `/`.
    #[must_use]
    pub fn trimmed_base_url(&self) -> &str {
        self.base_url.trim_end_matches('/')
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_point_at_local_backend() {
        let config = ApiConfig::default();
        assert_eq!(config.base_url, "http://localhost:8000");
        assert_eq!(config.timeout_secs, 10);
    }

    #[test]
    fn trailing_slash_is_trimmed() {
        let config = ApiConfig {
            base_url: "https://portal.example.com/".into(),
            ..ApiConfig::default()
        };
        assert_eq!(config.trimmed_base_url(), "https://portal.example.com");
    }
}
