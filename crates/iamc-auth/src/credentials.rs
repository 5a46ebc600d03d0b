//! The four persisted session strings.
//!
//! Stored under fixed keys so other tools sharing the same store can read
//! them. The account used to be stored under [`LEGACY_ACCOUNT_KEY`]; it is
//! still read but never written.

use iamc_core::Credentials;

use crate::error::AuthError;
use crate::store::CredentialStore;

pub const ACCOUNT_KEY: &str = "MTAYLOR_IO_ID";
pub const LEGACY_ACCOUNT_KEY: &str = "MTAYLOR_IO_EMAIL";
pub const SECRET_KEY_KEY: &str = "MTAYLOR_IO_SECRET_KEY";
pub const SESSION_ID_KEY: &str = "MTAYLOR_IO_SESSION_ID";
pub const SESSION_TOKEN_KEY: &str = "MTAYLOR_IO_SESSION_TOKEN";

/// Read stored credentials. Partial sets read as `None`.
///
/// # Errors
///
/// Returns [`AuthError`] when the store cannot be read.
pub fn load<S: CredentialStore + ?Sized>(store: &S) -> Result<Option<Credentials>, AuthError> {
    let account = match store.get(ACCOUNT_KEY)?.filter(|v| !v.is_empty()) {
        Some(account) => Some(account),
        None => store.get(LEGACY_ACCOUNT_KEY)?,
    };
    Ok(Credentials::from_parts(
        account,
        store.get(SECRET_KEY_KEY)?,
        store.get(SESSION_ID_KEY)?,
        store.get(SESSION_TOKEN_KEY)?,
    ))
}

/// Write all four strings, dropping the legacy account key.
///
/// # Errors
///
/// Returns [`AuthError`] when the store cannot be written.
pub fn save<S: CredentialStore + ?Sized>(store: &S, credentials: &Credentials) -> Result<(), AuthError> {
    store.set(ACCOUNT_KEY, &credentials.account)?;
    store.set(SECRET_KEY_KEY, &credentials.secret_key)?;
    store.set(SESSION_ID_KEY, &credentials.session_id)?;
    store.set(SESSION_TOKEN_KEY, &credentials.session_token)?;
    store.remove(LEGACY_ACCOUNT_KEY)
}

/// Remove every key, including the legacy one.
///
/// # Errors
///
/// Returns [`AuthError`] when the store cannot be written.
pub fn clear<S: CredentialStore + ?Sized>(store: &S) -> Result<(), AuthError> {
    for key in [
        ACCOUNT_KEY,
        LEGACY_ACCOUNT_KEY,
        SECRET_KEY_KEY,
        SESSION_ID_KEY,
        SESSION_TOKEN_KEY,
    ] {
        store.remove(key)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryStore;
    use pretty_assertions::assert_eq;

    fn creds() -> Credentials {
        Credentials {
            account: "a@x.io".into(),
            secret_key: "k".into(),
            session_id: "s".into(),
            session_token: "t".into(),
        }
    }

    #[test]
    fn save_then_load() {
        let store = MemoryStore::new();
        save(&store, &creds()).unwrap();
        assert_eq!(load(&store).unwrap(), Some(creds()));
        assert_eq!(store.len(), 4);
    }

    #[test]
    fn partial_set_is_not_logged_in() {
        let store = MemoryStore::new();
        store.set(ACCOUNT_KEY, "a@x.io").unwrap();
        store.set(SECRET_KEY_KEY, "k").unwrap();
        store.set(SESSION_ID_KEY, "s").unwrap();
        assert_eq!(load(&store).unwrap(), None);
    }

    #[test]
    fn legacy_account_key_is_read() {
        let store = MemoryStore::new();
        store.set(LEGACY_ACCOUNT_KEY, "a@x.io").unwrap();
        store.set(SECRET_KEY_KEY, "k").unwrap();
        store.set(SESSION_ID_KEY, "s").unwrap();
        store.set(SESSION_TOKEN_KEY, "t").unwrap();
        assert_eq!(load(&store).unwrap(), Some(creds()));

        save(&store, &creds()).unwrap();
        assert_eq!(store.get(LEGACY_ACCOUNT_KEY).unwrap(), None);
    }

    #[test]
    fn clear_removes_everything() {
        let store = MemoryStore::new();
        save(&store, &creds()).unwrap();
        store.set(LEGACY_ACCOUNT_KEY, "old").unwrap();
        clear(&store).unwrap();
        assert!(store.is_empty());
    }
}
