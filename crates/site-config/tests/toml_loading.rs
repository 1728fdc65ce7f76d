//! Integration tests for TOML configuration loading.
//!
//! Uses `figment::Jail` for sandboxed files and env vars.

use figment::{
    Figment, Jail,
    providers::{Env, Format, Serialized, Toml},
};
use pretty_assertions::assert_eq;
use site_config::SitelineConfig;

#[test]
fn loads_all_sections_from_toml() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "config.toml",
            r#"
[api]
base_url = "https://api.example.com/v1"
token = "tok-123"
timeout_secs = 30

[board]
page_size = 25

[push]
url = "https://push.example.com"
namespace = "alerts"

[general]
log_level = "debug"
"#,
        )?;

        let config: SitelineConfig = Figment::from(Serialized::defaults(SitelineConfig::default()))
            .merge(Toml::file("config.toml"))
            .extract()?;

        assert_eq!(config.api.base_url, "https://api.example.com/v1");
        assert_eq!(config.api.token, "tok-123");
        assert_eq!(config.api.timeout_secs, 30);
        assert_eq!(config.board.page_size, 25);
        assert_eq!(config.push.endpoint(config.api.base()), "https://push.example.com/alerts");
        assert_eq!(config.general.log_level, "debug");
        Ok(())
    });
}

#[test]
fn partial_toml_keeps_defaults() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "config.toml",
            r#"
[api]
base_url = "http://localhost:4000"
"#,
        )?;

        let config: SitelineConfig = Figment::from(Serialized::defaults(SitelineConfig::default()))
            .merge(Toml::file("config.toml"))
            .extract()?;

        assert!(config.api.is_configured());
        assert_eq!(config.api.timeout_secs, 15);
        assert_eq!(config.board.page_size, 10);
        assert_eq!(config.push.namespace, "notifications");
        Ok(())
    });
}

#[test]
fn env_overrides_toml() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "config.toml",
            r#"
[board]
page_size = 25
"#,
        )?;
        jail.set_env("SITELINE_BOARD__PAGE_SIZE", "50");

        let config: SitelineConfig = Figment::from(Serialized::defaults(SitelineConfig::default()))
            .merge(Toml::file("config.toml"))
            .merge(Env::prefixed("SITELINE_").split("__"))
            .extract()?;

        assert_eq!(config.board.page_size, 50);
        Ok(())
    });
}
