//! # iamc-config
//!
//! Layered configuration loading for the iamc console using figment.
//!
//! Configuration sources (in priority order, highest wins):
//! 1. Environment variables (`IAMC_*` prefix, `__` as separator)
//! 2. Project-level `.iamc/config.toml`
//! 3. User-level `~/.config/iamc/config.toml`
//! 4. Built-in defaults
//!
//! # Environment Variable Mapping
//!
//! Figment maps `IAMC_IAM__URL` -> `iam.url`, `IAMC_HTTP__TIMEOUT_SECS` ->
//! `http.timeout_secs`, etc. The `__` (double underscore) separates nested
//! config sections.
//!
//! # Usage
//!
//! ```no_run
//! use iamc_config::IamcConfig;
//!
//! let config = IamcConfig::load_with_dotenv().expect("config");
//! println!("IAM at {}", config.iam.url);
//! ```

mod error;
mod events;
mod general;
mod http;
mod iam;
mod storage;

pub use error::ConfigError;
pub use events::EventsConfig;
pub use general::GeneralConfig;
pub use http::HttpConfig;
pub use iam::IamConfig;
pub use storage::{StorageBackend, StorageConfig};

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct IamcConfig {
    #[serde(default)]
    pub iam: IamConfig,
    #[serde(default)]
    pub events: EventsConfig,
    #[serde(default)]
    pub http: HttpConfig,
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub storage: StorageConfig,
}

impl IamcConfig {
    /// Load configuration from all sources (TOML files + environment variables).
    ///
    /// Does NOT call `dotenvy`; use [`Self::load_with_dotenv`] for `.env` support.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Figment`] when a source cannot be parsed and
    /// [`ConfigError::InvalidValue`] when a value fails validation.
    pub fn load() -> Result<Self, ConfigError> {
        Self::from_figment(&Self::figment())
    }

    /// Load configuration after reading `.env` from the current directory.
    ///
    /// # Errors
    ///
    /// Same as [`Self::load`].
    pub fn load_with_dotenv() -> Result<Self, ConfigError> {
        let _ = dotenvy::dotenv();
        Self::load()
    }

    /// Extract and validate a config from an arbitrary figment.
    ///
    /// # Errors
    ///
    /// Same as [`Self::load`].
    pub fn from_figment(figment: &Figment) -> Result<Self, ConfigError> {
        let config: Self = figment.extract()?;
        config.validate()?;
        Ok(config)
    }

    /// Build the figment provider chain.
    ///
    /// Public so tests can inspect the figment or layer extra providers.
    #[must_use]
    pub fn figment() -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        if let Some(global_path) = Self::global_config_path() {
            if global_path.exists() {
                figment = figment.merge(Toml::file(global_path));
            }
        }

        let local_path = PathBuf::from(".iamc/config.toml");
        if local_path.exists() {
            figment = figment.merge(Toml::file(local_path));
        }

        figment.merge(Env::prefixed("IAMC_").split("__"))
    }

    /// Check URLs and numeric limits.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidValue`] naming the first bad field.
    pub fn validate(&self) -> Result<(), ConfigError> {
        check_url("iam.url", &self.iam.url, &["http", "https"])?;
        check_url("events.url", &self.events.url, &["http", "https"])?;
        check_url("events.socket_url", &self.events.socket_url(), &["ws", "wss"])?;
        if self.http.timeout_secs == 0 {
            return Err(ConfigError::invalid("http.timeout_secs", "must be > 0"));
        }
        if self.general.default_limit == 0 {
            return Err(ConfigError::invalid("general.default_limit", "must be > 0"));
        }
        Ok(())
    }

    /// Path to the user-global config file.
    fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("iamc").join("config.toml"))
    }
}

fn check_url(field: &str, raw: &str, schemes: &[&str]) -> Result<(), ConfigError> {
    let parsed = url::Url::parse(raw).map_err(|e| ConfigError::invalid(field, e.to_string()))?;
    if schemes.contains(&parsed.scheme()) {
        Ok(())
    } else {
        Err(ConfigError::invalid(
            field,
            format!("scheme must be one of {}", schemes.join(", ")),
        ))
    }
}
