//! # iamc-auth
//!
//! Session persistence for the iamc console.
//!
//! Stores the four session strings (account, secret key, session id, session
//! token) in a [`CredentialStore`] and drives the
//! logged-out / rehydrating / logged-in state machine through
//! [`SessionManager`].

pub mod credentials;
pub mod error;
pub mod session;
pub mod store;

pub use error::AuthError;
pub use session::{Authenticator, RehydrateOutcome, SessionManager};
pub use store::{CredentialStore, FileStore, KeyringStore, MemoryStore, SystemStore};

use iamc_config::{StorageBackend, StorageConfig};

/// Open the store selected by `[storage]` in the config.
///
/// # Errors
///
/// Returns [`AuthError::TokenStoreError`] when no credentials path can be
/// determined.
pub fn open_store(config: &StorageConfig) -> Result<Box<dyn CredentialStore>, AuthError> {
    let file = config
        .credentials_path()
        .map(FileStore::new)
        .ok_or_else(|| {
            AuthError::TokenStoreError("home directory not found; set storage.path".into())
        })?;

    Ok(match config.backend {
        StorageBackend::File => Box::new(file),
        StorageBackend::Keyring => Box::new(SystemStore::new(
            KeyringStore::new(store::keyring_service()),
            file,
        )),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn file_backend_uses_configured_path() {
        let config = StorageConfig {
            backend: StorageBackend::File,
            path: "/tmp/iamc-test/credentials.json".into(),
        };
        let store = open_store(&config).unwrap();
        assert!(store.describe().contains("/tmp/iamc-test/credentials.json"));
    }
}
