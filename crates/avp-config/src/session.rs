//! Local session configuration.

use serde::{Deserialize, Serialize};

/// Default session lifetime: 30 days.
const fn default_ttl_hours() -> u64 {
    720
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SessionConfig {
    /// Hours a stored session stays valid before `avp auth login` is
    /// required again.
    #[serde(default = "default_ttl_hours")]
    pub ttl_hours: u64,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            ttl_hours: default_ttl_hours(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_ttl_is_thirty_days() {
        assert_eq!(SessionConfig::default().ttl_hours, 720);
    }
}
