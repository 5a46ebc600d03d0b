//! Session states, sort orders, policy rule enums and login statuses.
//!
//! Service-facing enums keep the exact casing the services use on the wire.
//! `SessionState` provides `allowed_next_states()` so the session holder can
//! reject illegal transitions.

use serde::{Deserialize, Serialize};
use std::fmt;

// ---------------------------------------------------------------------------
// SessionState
// ---------------------------------------------------------------------------

/// Lifecycle of the console's session with the IAM service.
///
/// ```text
/// logged_out  → logged_in             (login)
/// rehydrating → logged_in             (refresh succeeded)
///             → logged_out            (refresh failed, storage cleared)
/// logged_in   → logged_out            (logout)
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SessionState {
    LoggedOut,
    Rehydrating,
    LoggedIn,
}

impl SessionState {
    /// Valid next states from the current state.
    #[must_use]
    pub const fn allowed_next_states(self) -> &'static [Self] {
        match self {
            Self::LoggedOut => &[Self::LoggedIn],
            Self::Rehydrating => &[Self::LoggedIn, Self::LoggedOut],
            Self::LoggedIn => &[Self::LoggedOut],
        }
    }

    #[must_use]
    pub fn can_transition_to(self, next: Self) -> bool {
        self.allowed_next_states().contains(&next)
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::LoggedOut => "logged_out",
            Self::Rehydrating => "rehydrating",
            Self::LoggedIn => "logged_in",
        }
    }
}

impl fmt::Display for SessionState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// SortOrder
// ---------------------------------------------------------------------------

/// Sort direction passed through to list endpoints.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortOrder {
    Asc,
    Desc,
}

impl SortOrder {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Asc => "asc",
            Self::Desc => "desc",
        }
    }

    /// Parse the query-string form. Unknown values yield `None`.
    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.to_ascii_lowercase().as_str() {
            "asc" => Some(Self::Asc),
            "desc" => Some(Self::Desc),
            _ => None,
        }
    }
}

impl fmt::Display for SortOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// Action / Effect
// ---------------------------------------------------------------------------

/// Action a policy statement applies to.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Action {
    #[default]
    #[serde(alias = "read")]
    Read,
    #[serde(alias = "write")]
    Write,
}

impl Action {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Read => "Read",
            Self::Write => "Write",
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Whether a policy statement allows or denies its action.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Effect {
    #[default]
    #[serde(alias = "allow")]
    Allow,
    #[serde(alias = "deny")]
    Deny,
}

impl Effect {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Allow => "Allow",
            Self::Deny => "Deny",
        }
    }
}

impl fmt::Display for Effect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// LoginStatus
// ---------------------------------------------------------------------------

/// Status of a login request awaiting administrator approval.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LoginStatus {
    Pending,
    Granted,
    Denied,
    /// Statuses introduced by the service after this client was built.
    #[serde(other)]
    Unknown,
}

impl LoginStatus {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Granted => "granted",
            Self::Denied => "denied",
            Self::Unknown => "unknown",
        }
    }
}

impl fmt::Display for LoginStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn session_transitions_follow_the_state_machine() {
        assert!(SessionState::LoggedOut.can_transition_to(SessionState::LoggedIn));
        assert!(SessionState::Rehydrating.can_transition_to(SessionState::LoggedIn));
        assert!(SessionState::Rehydrating.can_transition_to(SessionState::LoggedOut));
        assert!(SessionState::LoggedIn.can_transition_to(SessionState::LoggedOut));

        assert!(!SessionState::LoggedOut.can_transition_to(SessionState::LoggedOut));
        assert!(!SessionState::LoggedOut.can_transition_to(SessionState::Rehydrating));
        assert!(!SessionState::LoggedIn.can_transition_to(SessionState::Rehydrating));
        assert!(!SessionState::LoggedIn.can_transition_to(SessionState::LoggedIn));
    }

    #[test]
    fn sort_order_parse_is_case_insensitive() {
        assert_eq!(SortOrder::parse("ASC"), Some(SortOrder::Asc));
        assert_eq!(SortOrder::parse("desc"), Some(SortOrder::Desc));
        assert_eq!(SortOrder::parse("sideways"), None);
    }

    #[test]
    fn action_and_effect_accept_lowercase_aliases() {
        let action: Action = serde_json::from_str("\"write\"").unwrap();
        let effect: Effect = serde_json::from_str("\"deny\"").unwrap();
        assert_eq!(action, Action::Write);
        assert_eq!(effect, Effect::Deny);
        assert_eq!(serde_json::to_string(&action).unwrap(), "\"Write\"");
    }

    #[test]
    fn unknown_login_status_is_tolerated() {
        let status: LoginStatus = serde_json::from_str("\"expired\"").unwrap();
        assert_eq!(status, LoginStatus::Unknown);
    }
}
