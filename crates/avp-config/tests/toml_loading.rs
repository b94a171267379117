//! Integration tests for TOML configuration loading.
//!
//! Uses figment::Jail for safe, sandboxed env var and file manipulation.

use figment::{
    Figment, Jail,
    providers::{Env, Format, Serialized, Toml},
};
use pretty_assertions::assert_eq;

use avp_config::PortalConfig;

#[test]
fn loads_api_config_from_toml() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "config.toml",
            r#"
[api]
base_url = "https://portal.avtechsolutions.example"
timeout_secs = 30
"#,
        )?;

        let config: PortalConfig = Figment::from(Serialized::defaults(PortalConfig::default()))
            .merge(Toml::file("config.toml"))
            .extract()?;

        assert_eq!(config.api.base_url, "https://portal.avtechsolutions.example");
        assert_eq!(config.api.timeout_secs, 30);
        Ok(())
    });
}

#[test]
fn loads_full_config_from_toml() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "config.toml",
            r#"
[api]
base_url = "http://10.0.0.5:8000"

[session]
ttl_hours = 24

[general]
default_limit = 50
"#,
        )?;

        let config: PortalConfig = Figment::from(Serialized::defaults(PortalConfig::default()))
            .merge(Toml::file("config.toml"))
            .extract()?;

        assert_eq!(config.api.base_url, "http://10.0.0.5:8000");
        // Section not present keeps its default
        assert_eq!(config.api.timeout_secs, 10);
        assert_eq!(config.session.ttl_hours, 24);
        assert_eq!(config.general.default_limit, 50);
        Ok(())
    });
}

#[test]
fn env_var_overrides_toml() {
    Jail::expect_with(|jail| {
        jail.set_env("AVP_API__BASE_URL", "http://from-env:8000");

        jail.create_file(
            "config.toml",
            r#"
[api]
base_url = "http://from-toml:8000"
timeout_secs = 45
"#,
        )?;

        let config: PortalConfig = Figment::from(Serialized::defaults(PortalConfig::default()))
            .merge(Toml::file("config.toml"))
            .merge(Env::prefixed("AVP_").split("__"))
            .extract()?;

        // Env wins over TOML
        assert_eq!(config.api.base_url, "http://from-env:8000");
        // TOML value not overridden by env remains
        assert_eq!(config.api.timeout_secs, 45);
        Ok(())
    });
}

/// Documents the figment gotcha: typo'd env var keys are silently ignored
/// and the value stays at its default.
#[test]
fn typo_env_var_silently_ignored() {
    Jail::expect_with(|jail| {
        jail.set_env("AVP_API__BASE_URLL", "http://typo:8000");

        let config: PortalConfig = Figment::from(Serialized::defaults(PortalConfig::default()))
            .merge(Env::prefixed("AVP_").split("__"))
            .extract()?;

        assert_eq!(config.api.base_url, "http://localhost:8000");
        Ok(())
    });
}
