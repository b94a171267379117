//! Verify that figment's Env provider maps nested `AVP_*` vars through the
//! full provider chain.

use figment::{
    Figment, Jail,
    providers::{Env, Serialized},
};
use pretty_assertions::assert_eq;

use avp_config::PortalConfig;

#[test]
fn full_env_provider_chain() {
    Jail::expect_with(|jail| {
        jail.set_env("AVP_API__BASE_URL", "http://jail:8000");
        jail.set_env("AVP_API__TIMEOUT_SECS", "25");
        jail.set_env("AVP_SESSION__TTL_HOURS", "48");
        jail.set_env("AVP_GENERAL__DEFAULT_LIMIT", "42");

        let config: PortalConfig = Figment::from(Serialized::defaults(PortalConfig::default()))
            .merge(Env::prefixed("AVP_").split("__"))
            .extract()?;

        assert_eq!(config.api.base_url, "http://jail:8000");
        assert_eq!(config.api.timeout_secs, 25);
        assert_eq!(config.session.ttl_hours, 48);
        assert_eq!(config.general.default_limit, 42);
        Ok(())
    });
}

#[test]
fn env_vars_fill_only_named_fields() {
    Jail::expect_with(|jail| {
        jail.set_env("AVP_SESSION__TTL_HOURS", "1");

        let config: PortalConfig = Figment::from(Serialized::defaults(PortalConfig::default()))
            .merge(Env::prefixed("AVP_").split("__"))
            .extract()?;

        assert_eq!(config.session.ttl_hours, 1);
        assert_eq!(config.api.base_url, "http://localhost:8000");
        assert_eq!(config.general.default_limit, 20);
        Ok(())
    });
}
