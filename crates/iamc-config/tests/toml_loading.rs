//! Integration tests for TOML configuration loading.
//!
//! Uses `figment::Jail` for sandboxed working directories and env vars.

use figment::{
    Figment, Jail,
    providers::{Format, Serialized, Toml},
};
use iamc_config::{IamcConfig, StorageBackend};

#[test]
fn loads_service_urls_from_toml() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "config.toml",
            r#"
[iam]
url = "http://localhost:8080"

[events]
url = "http://localhost:8081"
"#,
        )?;

        let config: IamcConfig = Figment::from(Serialized::defaults(IamcConfig::default()))
            .merge(Toml::file("config.toml"))
            .extract()?;

        assert_eq!(config.iam.url, "http://localhost:8080");
        assert_eq!(config.events.url, "http://localhost:8081");
        assert_eq!(config.events.socket_url(), "ws://localhost:8081/ws");
        Ok(())
    });
}

#[test]
fn project_file_is_picked_up_by_load() {
    Jail::expect_with(|jail| {
        jail.create_dir(".iamc")?;
        jail.create_file(
            ".iamc/config.toml",
            r#"
[general]
default_limit = 25

[storage]
backend = "keyring"
path = "creds.json"
"#,
        )?;

        let config = IamcConfig::load().expect("config loads");
        assert_eq!(config.general.default_limit, 25);
        assert_eq!(config.storage.backend, StorageBackend::Keyring);
        assert_eq!(config.storage.path, "creds.json");
        assert_eq!(config.iam.url, "https://iam.mtaylor.io");
        Ok(())
    });
}

#[test]
fn invalid_project_value_fails_validation() {
    Jail::expect_with(|jail| {
        jail.create_dir(".iamc")?;
        jail.create_file(
            ".iamc/config.toml",
            r#"
[http]
timeout_secs = 0
"#,
        )?;

        let err = IamcConfig::load().expect_err("zero timeout is rejected");
        assert!(err.to_string().contains("http.timeout_secs"));
        Ok(())
    });
}
