//! # avp-config
//!
//! Layered configuration loading for the portal client using figment.
//!
//! Configuration sources (in priority order, highest wins):
//! 1. Environment variables (`AVP_*` prefix, `__` as separator)
//! 2. Project-level `.avportal/config.toml`
//! 3. User-level `~/.config/avportal/config.toml`
//! 4. Built-in defaults
//!
//! # Environment Variable Mapping
//!
//! Figment maps `AVP_API__BASE_URL` -> `api.base_url`,
//! `AVP_SESSION__TTL_HOURS` -> `session.ttl_hours`, etc. The `__` (double
//! underscore) separates nested config sections.
//!
//! # Usage
//!
//! ```no_run
//! use avp_config::PortalConfig;
//!
//! // Load from all sources (dotenvy + TOML + env):
//! let config = PortalConfig::load_with_dotenv().expect("config");
//! println!("API base URL: {}", config.api.base_url);
//! ```

mod api;
mod error;
mod general;
mod session;

pub use api::ApiConfig;
pub use error::ConfigError;
pub use general::GeneralConfig;
pub use session::SessionConfig;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct PortalConfig {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub session: SessionConfig,
    #[serde(default)]
    pub general: GeneralConfig,
}

impl PortalConfig {
    /// Load configuration from all sources (TOML files + environment
    /// variables).
    ///
    /// Does NOT call `dotenvy`; use [`Self::load_with_dotenv`] if `.env`
    /// loading is wanted.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when extraction fails (e.g. a malformed TOML
    /// file or an env var of the wrong type).
    pub fn load() -> Result<Self, ConfigError> {
        Self::figment().extract().map_err(ConfigError::from)
    }

    /// Load configuration with `.env` file support.
    ///
    /// Loads a `.env` from the current directory (if present) before building
    /// the figment. This is the typical entry point for the CLI and tests.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when extraction fails.
    pub fn load_with_dotenv() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::load()
    }

    /// Build the figment provider chain.
    ///
    /// Public so tests can inspect the figment directly or add providers on
    /// top.
    #[must_use]
    pub fn figment() -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        // Layer 1: user-global config
        if let Some(global_path) = Self::global_config_path() {
            if global_path.exists() {
                figment = figment.merge(Toml::file(global_path));
            }
        }

        // Layer 2: project-local config
        let local_path = PathBuf::from(".avportal/config.toml");
        if local_path.exists() {
            figment = figment.merge(Toml::file(local_path));
        }

        // Layer 3: environment variables (highest priority)
        figment.merge(Env::prefixed("AVP_").split("__"))
    }

    /// Path to the user-global config file.
    fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("avportal").join("config.toml"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_loads() {
        let config = PortalConfig::default();
        assert_eq!(config.api.base_url, "http://localhost:8000");
        assert_eq!(config.api.timeout_secs, 10);
        assert_eq!(config.session.ttl_hours, 720);
        assert_eq!(config.general.default_limit, 20);
    }

    #[test]
    fn figment_builds_without_files() {
        let figment = PortalConfig::figment();
        let config: PortalConfig = figment.extract().expect("should extract defaults");
        assert_eq!(config.api.base_url, "http://localhost:8000");
        assert_eq!(config.general.default_limit, 20);
    }
}
