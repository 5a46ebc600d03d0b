//! Key/value stores for the persisted session.
//!
//! Every store holds plain string values under string keys. [`SystemStore`]
//! tries the OS keyring first and falls back to a `0600` JSON file when the
//! keyring is unavailable, warning on each fallback.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use crate::error::AuthError;

const DEFAULT_KEYRING_SERVICE: &str = "iamc";

/// Returns the keyring service name.
///
/// Defaults to `"iamc"`. Override via `IAMC_KEYRING_SERVICE` to keep test
/// runs away from real credentials.
#[must_use]
pub fn keyring_service() -> String {
    std::env::var("IAMC_KEYRING_SERVICE").unwrap_or_else(|_| DEFAULT_KEYRING_SERVICE.to_string())
}

/// Durable string storage.
pub trait CredentialStore {
    /// # Errors
    ///
    /// Returns [`AuthError`] when the backend cannot be read.
    fn get(&self, key: &str) -> Result<Option<String>, AuthError>;

    /// # Errors
    ///
    /// Returns [`AuthError`] when the backend cannot be written.
    fn set(&self, key: &str, value: &str) -> Result<(), AuthError>;

    /// Remove `key`. Removing a missing key is not an error.
    ///
    /// # Errors
    ///
    /// Returns [`AuthError`] when the backend cannot be written.
    fn remove(&self, key: &str) -> Result<(), AuthError>;

    /// Human-readable location, for `auth status`.
    fn describe(&self) -> String;
}

impl<T: CredentialStore + ?Sized> CredentialStore for Box<T> {
    fn get(&self, key: &str) -> Result<Option<String>, AuthError> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<(), AuthError> {
        (**self).set(key, value)
    }

    fn remove(&self, key: &str) -> Result<(), AuthError> {
        (**self).remove(key)
    }

    fn describe(&self) -> String {
        (**self).describe()
    }
}

// --- File ---

/// All keys in one JSON object on disk.
#[derive(Debug, Clone)]
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// `~/.iamc/credentials.json`.
    ///
    /// # Errors
    ///
    /// Returns [`AuthError::TokenStoreError`] when there is no home directory.
    pub fn default_location() -> Result<Self, AuthError> {
        dirs::home_dir()
            .map(|h| Self::new(h.join(".iamc").join("credentials.json")))
            .ok_or_else(|| {
                AuthError::TokenStoreError("home directory not found; cannot store credentials".into())
            })
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read(&self) -> Result<BTreeMap<String, String>, AuthError> {
        let text = match fs::read_to_string(&self.path) {
            Ok(text) => text,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(BTreeMap::new()),
            Err(e) => {
                return Err(AuthError::TokenStoreError(format!(
                    "read {}: {e}",
                    self.path.display()
                )));
            }
        };
        if text.trim().is_empty() {
            return Ok(BTreeMap::new());
        }
        serde_json::from_str(&text).map_err(|e| {
            AuthError::TokenStoreError(format!("parse {}: {e}", self.path.display()))
        })
    }

    fn write(&self, entries: &BTreeMap<String, String>) -> Result<(), AuthError> {
        if entries.is_empty() {
            return match fs::remove_file(&self.path) {
                Ok(()) => Ok(()),
                Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
                Err(e) => Err(AuthError::TokenStoreError(format!(
                    "delete {}: {e}",
                    self.path.display()
                ))),
            };
        }

        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).map_err(|e| {
                AuthError::TokenStoreError(format!("mkdir {}: {e}", parent.display()))
            })?;
            #[cfg(unix)]
            {
                use std::os::unix::fs::PermissionsExt;
                if let Err(e) = fs::set_permissions(parent, fs::Permissions::from_mode(0o700)) {
                    tracing::warn!("failed to chmod 0700 {}: {e}", parent.display());
                }
            }
        }

        let json = serde_json::to_string_pretty(entries)
            .map_err(|e| AuthError::TokenStoreError(format!("serialize credentials: {e}")))?;
        fs::write(&self.path, json).map_err(|e| {
            AuthError::TokenStoreError(format!("write {}: {e}", self.path.display()))
        })?;

        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            fs::set_permissions(&self.path, fs::Permissions::from_mode(0o600)).map_err(|e| {
                AuthError::TokenStoreError(format!("chmod {}: {e}", self.path.display()))
            })?;
        }

        Ok(())
    }
}

impl CredentialStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>, AuthError> {
        Ok(self.read()?.remove(key))
    }

    fn set(&self, key: &str, value: &str) -> Result<(), AuthError> {
        let mut entries = self.read()?;
        entries.insert(key.to_string(), value.to_string());
        self.write(&entries)
    }

    fn remove(&self, key: &str) -> Result<(), AuthError> {
        let mut entries = self.read()?;
        if entries.remove(key).is_some() {
            self.write(&entries)?;
        }
        Ok(())
    }

    fn describe(&self) -> String {
        format!("file {}", self.path.display())
    }
}

// --- Keyring ---

/// One keyring entry per key, under a shared service name.
#[derive(Debug, Clone)]
pub struct KeyringStore {
    service: String,
}

impl KeyringStore {
    #[must_use]
    pub fn new(service: impl Into<String>) -> Self {
        Self {
            service: service.into(),
        }
    }

    fn entry(&self, key: &str) -> Result<keyring::Entry, AuthError> {
        keyring::Entry::new(&self.service, key).map_err(|e| AuthError::KeyringError(e.to_string()))
    }
}

impl CredentialStore for KeyringStore {
    fn get(&self, key: &str) -> Result<Option<String>, AuthError> {
        match self.entry(key)?.get_password() {
            Ok(value) => Ok(Some(value)),
            Err(keyring::Error::NoEntry) => Ok(None),
            Err(e) => Err(AuthError::KeyringError(e.to_string())),
        }
    }

    fn set(&self, key: &str, value: &str) -> Result<(), AuthError> {
        self.entry(key)?
            .set_password(value)
            .map_err(|e| AuthError::KeyringError(e.to_string()))
    }

    fn remove(&self, key: &str) -> Result<(), AuthError> {
        match self.entry(key)?.delete_credential() {
            Ok(()) | Err(keyring::Error::NoEntry) => Ok(()),
            Err(e) => Err(AuthError::KeyringError(e.to_string())),
        }
    }

    fn describe(&self) -> String {
        format!("keyring service '{}'", self.service)
    }
}

// --- Keyring with file fallback ---

/// Keyring first, file when the keyring fails.
#[derive(Debug, Clone)]
pub struct SystemStore {
    keyring: KeyringStore,
    file: FileStore,
}

impl SystemStore {
    #[must_use]
    pub const fn new(keyring: KeyringStore, file: FileStore) -> Self {
        Self { keyring, file }
    }
}

impl CredentialStore for SystemStore {
    fn get(&self, key: &str) -> Result<Option<String>, AuthError> {
        match self.keyring.get(key) {
            Ok(Some(value)) => Ok(Some(value)),
            Ok(None) => self.file.get(key),
            Err(error) => {
                tracing::warn!(%error, key, "keyring read failed; falling back to file");
                self.file.get(key)
            }
        }
    }

    fn set(&self, key: &str, value: &str) -> Result<(), AuthError> {
        match self.keyring.set(key, value) {
            Ok(()) => Ok(()),
            Err(error) => {
                tracing::warn!(%error, key, "keyring store failed; falling back to file");
                self.file.set(key, value)
            }
        }
    }

    fn remove(&self, key: &str) -> Result<(), AuthError> {
        if let Err(error) = self.keyring.remove(key) {
            tracing::warn!(%error, key, "keyring delete failed");
        }
        self.file.remove(key)
    }

    fn describe(&self) -> String {
        format!("{} (fallback {})", self.keyring.describe(), self.file.describe())
    }
}

// --- Memory ---

/// Process-local store, for tests and dry runs.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: Mutex<BTreeMap<String, String>>,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> Result<std::sync::MutexGuard<'_, BTreeMap<String, String>>, AuthError> {
        self.entries
            .lock()
            .map_err(|_| AuthError::TokenStoreError("memory store poisoned".into()))
    }

    /// Number of stored keys.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.lock().map_or(0, |entries| entries.len())
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl CredentialStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, AuthError> {
        Ok(self.lock()?.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), AuthError> {
        self.lock()?.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), AuthError> {
        self.lock()?.remove(key);
        Ok(())
    }

    fn describe(&self) -> String {
        "memory".into()
    }
}
