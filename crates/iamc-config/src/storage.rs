//! Where session credentials are persisted.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Credential storage backend.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum StorageBackend {
    /// JSON file under the user's home directory.
    #[default]
    File,
    /// OS keyring, falling back to the file when the keyring is unavailable.
    Keyring,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct StorageConfig {
    #[serde(default)]
    pub backend: StorageBackend,

    /// Credentials file override. Defaults to `~/.iamc/credentials.json`.
    #[serde(default)]
    pub path: String,
}

impl StorageConfig {
    /// The credentials file path, if one can be determined.
    #[must_use]
    pub fn credentials_path(&self) -> Option<PathBuf> {
        if self.path.is_empty() {
            dirs::home_dir().map(|home| home.join(".iamc").join("credentials.json"))
        } else {
            Some(PathBuf::from(&self.path))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explicit_path_is_used_verbatim() {
        let config = StorageConfig {
            backend: StorageBackend::File,
            path: "/tmp/creds.json".into(),
        };
        assert_eq!(
            config.credentials_path(),
            Some(PathBuf::from("/tmp/creds.json"))
        );
    }

    #[test]
    fn default_backend_is_file() {
        assert_eq!(StorageConfig::default().backend, StorageBackend::File);
    }
}
