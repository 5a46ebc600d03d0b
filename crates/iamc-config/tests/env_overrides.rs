use figment::Jail;
use iamc_config::IamcConfig;

#[test]
fn env_overrides_nested_fields() {
    Jail::expect_with(|jail| {
        jail.set_env("IAMC_IAM__URL", "https://iam.internal");
        jail.set_env("IAMC_HTTP__TIMEOUT_SECS", "30");
        jail.set_env("IAMC_EVENTS__SOCKET_URL", "wss://socket.internal/ws");

        let config = IamcConfig::load().expect("config loads");
        assert_eq!(config.iam.url, "https://iam.internal");
        assert_eq!(config.http.timeout_secs, 30);
        assert_eq!(config.events.socket_url(), "wss://socket.internal/ws");
        Ok(())
    });
}

#[test]
fn env_beats_project_file() {
    Jail::expect_with(|jail| {
        jail.create_dir(".iamc")?;
        jail.create_file(".iamc/config.toml", "[general]\ndefault_limit = 25\n")?;
        jail.set_env("IAMC_GENERAL__DEFAULT_LIMIT", "50");

        let config = IamcConfig::load().expect("config loads");
        assert_eq!(config.general.default_limit, 50);
        Ok(())
    });
}

#[test]
fn malformed_env_value_is_a_figment_error() {
    Jail::expect_with(|jail| {
        jail.set_env("IAMC_GENERAL__DEFAULT_LIMIT", "lots");

        let err = IamcConfig::load().expect_err("non-numeric limit");
        assert!(err.to_string().starts_with("Configuration error"));
        Ok(())
    });
}
