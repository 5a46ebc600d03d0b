use std::fmt;

use serde::{Deserialize, Serialize};

/// The four strings that make up a console session.
///
/// Either all four are known or the console is not logged in; there is no
/// partially populated value.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Credentials {
    /// Account identifier used at login (an id or an email address).
    pub account: String,
    pub secret_key: String,
    pub session_id: String,
    pub session_token: String,
}

impl Credentials {
    /// Assemble credentials from possibly-missing parts.
    ///
    /// Returns `None` unless every part is present and non-empty.
    #[must_use]
    pub fn from_parts(
        account: Option<String>,
        secret_key: Option<String>,
        session_id: Option<String>,
        session_token: Option<String>,
    ) -> Option<Self> {
        let present = |value: Option<String>| value.filter(|v| !v.is_empty());
        Some(Self {
            account: present(account)?,
            secret_key: present(secret_key)?,
            session_id: present(session_id)?,
            session_token: present(session_token)?,
        })
    }

    /// Replace the session half after a refresh.
    #[must_use]
    pub fn with_session(mut self, session_id: String, session_token: String) -> Self {
        self.session_id = session_id;
        self.session_token = session_token;
        self
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("account", &self.account)
            .field("secret_key", &"<redacted>")
            .field("session_id", &self.session_id)
            .field("session_token", &"<redacted>")
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn some(value: &str) -> Option<String> {
        Some(value.to_string())
    }

    #[test]
    fn all_parts_present_yields_credentials() {
        let creds = Credentials::from_parts(some("a"), some("k"), some("s"), some("t"))
            .expect("complete credentials");
        assert_eq!(creds.account, "a");
        assert_eq!(creds.session_token, "t");
    }

    #[test]
    fn any_missing_part_yields_none() {
        assert!(Credentials::from_parts(None, some("k"), some("s"), some("t")).is_none());
        assert!(Credentials::from_parts(some("a"), some("k"), None, some("t")).is_none());
        assert!(Credentials::from_parts(some("a"), some("k"), some("s"), some("")).is_none());
    }

    #[test]
    fn debug_redacts_secrets() {
        let creds = Credentials::from_parts(some("a"), some("secret"), some("s"), some("token"))
            .expect("complete credentials");
        let rendered = format!("{creds:?}");
        assert!(!rendered.contains("secret\""));
        assert!(!rendered.contains("token\""));
        assert!(rendered.contains("<redacted>"));
    }
}
