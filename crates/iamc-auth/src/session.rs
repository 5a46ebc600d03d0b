//! The session holder: persisted credentials plus the login state machine.
//!
//! ```text
//! logged_out  → logged_in    login succeeded, all four strings persisted
//! rehydrating → logged_in    refresh succeeded, new session persisted
//!             → logged_out   refresh failed, storage cleared
//! logged_in   → logged_out   logout, storage cleared
//! ```

use std::future::Future;

use iamc_client::{ClientError, IamClient, SessionGrant};
use iamc_core::Credentials;
use iamc_core::enums::SessionState;
use serde::Serialize;

use crate::credentials;
use crate::error::AuthError;
use crate::store::CredentialStore;

/// The IAM calls the session holder depends on.
pub trait Authenticator {
    fn login(
        &self,
        account: &str,
        secret_key: &str,
    ) -> impl Future<Output = Result<SessionGrant, ClientError>>;

    fn refresh(
        &self,
        credentials: &Credentials,
    ) -> impl Future<Output = Result<SessionGrant, ClientError>>;

    fn logout(&self, credentials: &Credentials) -> impl Future<Output = Result<(), ClientError>>;
}

impl Authenticator for IamClient {
    fn login(
        &self,
        account: &str,
        secret_key: &str,
    ) -> impl Future<Output = Result<SessionGrant, ClientError>> {
        Self::login(self, account, secret_key)
    }

    fn refresh(
        &self,
        credentials: &Credentials,
    ) -> impl Future<Output = Result<SessionGrant, ClientError>> {
        Self::refresh(self, credentials)
    }

    fn logout(&self, credentials: &Credentials) -> impl Future<Output = Result<(), ClientError>> {
        let client = self.clone().with_credentials(credentials.clone());
        async move { client.logout().await }
    }
}

/// Result of a rehydration attempt.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RehydrateOutcome {
    pub state: SessionState,
    /// Message to show the user. `None` on success and on a plain 401.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notice: Option<String>,
}

/// Owns the persisted credentials and the current [`SessionState`].
pub struct SessionManager<A, S> {
    auth: A,
    store: S,
    state: SessionState,
    credentials: Option<Credentials>,
}

impl<A: Authenticator, S: CredentialStore> SessionManager<A, S> {
    /// Read the store. Starts in `Rehydrating` iff all four strings are
    /// present, otherwise in `LoggedOut`.
    ///
    /// # Errors
    ///
    /// Returns [`AuthError`] when the store cannot be read.
    pub fn new(auth: A, store: S) -> Result<Self, AuthError> {
        let credentials = credentials::load(&store)?;
        let state = if credentials.is_some() {
            SessionState::Rehydrating
        } else {
            SessionState::LoggedOut
        };
        tracing::debug!(%state, "session loaded");
        Ok(Self {
            auth,
            store,
            state,
            credentials,
        })
    }

    #[must_use]
    pub const fn state(&self) -> SessionState {
        self.state
    }

    /// Credentials of the current session, if any.
    #[must_use]
    pub const fn credentials(&self) -> Option<&Credentials> {
        self.credentials.as_ref()
    }

    pub const fn authenticator(&self) -> &A {
        &self.auth
    }

    pub const fn store(&self) -> &S {
        &self.store
    }

    /// Credentials of a logged-in session.
    ///
    /// # Errors
    ///
    /// Returns [`AuthError::NotAuthenticated`] unless the state is `LoggedIn`.
    pub fn require_logged_in(&self) -> Result<&Credentials, AuthError> {
        match (&self.state, &self.credentials) {
            (SessionState::LoggedIn, Some(credentials)) => Ok(credentials),
            _ => Err(AuthError::NotAuthenticated),
        }
    }

    /// Refresh the stored session.
    ///
    /// On failure storage is cleared and the state becomes `LoggedOut`
    /// before anything is returned. A 401 yields no notice, other transport
    /// errors yield a notice, and unexpected errors are returned.
    ///
    /// # Errors
    ///
    /// Returns [`AuthError::InvalidTransition`] outside `Rehydrating`, and
    /// [`AuthError::Client`] for unexpected refresh failures.
    pub async fn rehydrate(&mut self) -> Result<RehydrateOutcome, AuthError> {
        let stored = match (&self.state, &self.credentials) {
            (SessionState::Rehydrating, Some(credentials)) => Some(credentials.clone()),
            _ => None,
        };
        let Some(stored) = stored else {
            return Err(AuthError::InvalidTransition {
                from: self.state,
                to: SessionState::LoggedIn,
            });
        };

        match self.auth.refresh(&stored).await {
            Ok(grant) => {
                let refreshed = stored.with_session(grant.session_id, grant.session_token);
                credentials::save(&self.store, &refreshed)?;
                self.credentials = Some(refreshed);
                self.transition(SessionState::LoggedIn)?;
                Ok(RehydrateOutcome {
                    state: self.state,
                    notice: None,
                })
            }
            Err(error) => {
                self.forget()?;
                self.transition(SessionState::LoggedOut)?;
                if error.is_unauthorized() {
                    tracing::debug!("stored session rejected; logged out");
                    Ok(RehydrateOutcome {
                        state: self.state,
                        notice: None,
                    })
                } else if let Some(message) = error.inline_message() {
                    tracing::warn!(%error, "session refresh failed");
                    Ok(RehydrateOutcome {
                        state: self.state,
                        notice: Some(message),
                    })
                } else {
                    Err(error.into())
                }
            }
        }
    }

    /// Start a new session. The fields are passed to the service as given.
    ///
    /// On failure nothing is stored and the state is unchanged.
    ///
    /// # Errors
    ///
    /// Returns [`AuthError::InvalidTransition`] unless the state allows
    /// `LoggedIn`, and [`AuthError::Client`] when the service rejects the login.
    pub async fn login(&mut self, account: &str, secret_key: &str) -> Result<&Credentials, AuthError> {
        self.check(SessionState::LoggedIn)?;
        let grant = self.auth.login(account, secret_key).await?;
        let credentials = Credentials {
            account: account.to_string(),
            secret_key: secret_key.to_string(),
            session_id: grant.session_id,
            session_token: grant.session_token,
        };
        credentials::save(&self.store, &credentials)?;
        self.transition(SessionState::LoggedIn)?;
        Ok(self.credentials.insert(credentials))
    }

    /// End the session. Remote invalidation is best-effort; storage is
    /// always cleared.
    ///
    /// # Errors
    ///
    /// Returns [`AuthError::InvalidTransition`] when already `LoggedOut`, and
    /// [`AuthError`] when storage cannot be cleared.
    pub async fn logout(&mut self) -> Result<(), AuthError> {
        self.check(SessionState::LoggedOut)?;
        if let Some(stored) = &self.credentials {
            if let Err(error) = self.auth.logout(stored).await {
                tracing::warn!(%error, "remote logout failed; clearing local session anyway");
            }
        }
        self.forget()?;
        self.transition(SessionState::LoggedOut)
    }

    fn forget(&mut self) -> Result<(), AuthError> {
        self.credentials = None;
        credentials::clear(&self.store)
    }

    fn check(&self, next: SessionState) -> Result<(), AuthError> {
        if self.state.can_transition_to(next) {
            Ok(())
        } else {
            Err(AuthError::InvalidTransition {
                from: self.state,
                to: next,
            })
        }
    }

    fn transition(&mut self, next: SessionState) -> Result<(), AuthError> {
        self.check(next)?;
        tracing::debug!(from = %self.state, to = %next, "session transition");
        self.state = next;
        Ok(())
    }
}
