//! Client for the IAM service.
//!
//! | Method | Path | Operation |
//! |--------|------|-----------|
//! | POST   | `/login` | Start a session |
//! | POST   | `/refresh` | Refresh a stored session |
//! | POST   | `/logout` | Invalidate the current session |
//! | *      | `/users/...` | [`UsersClient`] |
//! | *      | `/groups/...` | [`GroupsClient`] |
//! | *      | `/policies/...` | [`PoliciesClient`] |
//! | *      | `/users/{uid}/sessions/...` | [`SessionsClient`] |
//! | *      | `/users/{uid}/logins/...` | [`LoginsClient`] |
//! | DELETE | `/users/{uid}/public-keys/{key}` | [`PublicKeysClient`] |

mod groups;
mod logins;
mod policies;
mod public_keys;
mod sessions;
mod users;

pub use groups::GroupsClient;
pub use logins::LoginsClient;
pub use policies::PoliciesClient;
pub use public_keys::PublicKeysClient;
pub use sessions::SessionsClient;
pub use users::UsersClient;

use iamc_config::IamcConfig;
use iamc_core::{Credentials, ListQuery};
use reqwest::{Method, RequestBuilder};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::error::ClientError;
use crate::http::{Transport, with_body};

/// Session id and token issued by `/login` and `/refresh`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionGrant {
    pub session_id: String,
    pub session_token: String,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct LoginRequest<'a> {
    account: &'a str,
    secret_key: &'a str,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct RefreshRequest<'a> {
    account: &'a str,
    secret_key: &'a str,
    session_id: &'a str,
    session_token: &'a str,
}

/// IAM client. Holds the session credentials once logged in.
#[derive(Debug, Clone)]
pub struct IamClient {
    transport: Transport,
    credentials: Option<Credentials>,
}

impl IamClient {
    /// Build an unauthenticated client from configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::InvalidUrl`] for a bad `iam.url` and
    /// [`ClientError::Http`] if the reqwest client cannot be built.
    pub fn new(config: &IamcConfig) -> Result<Self, ClientError> {
        Ok(Self {
            transport: Transport::new(&config.iam.url, &config.http)?,
            credentials: None,
        })
    }

    #[must_use]
    pub fn with_credentials(mut self, credentials: Credentials) -> Self {
        self.credentials = Some(credentials);
        self
    }

    #[must_use]
    pub const fn credentials(&self) -> Option<&Credentials> {
        self.credentials.as_ref()
    }

    /// Id of the session this client is authenticated with.
    #[must_use]
    pub fn session_id(&self) -> Option<&str> {
        self.credentials.as_ref().map(|c| c.session_id.as_str())
    }

    #[must_use]
    pub fn base_url(&self) -> &str {
        self.transport.base_url().as_str()
    }

    /// Exchange an account and secret key for a new session.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Api`] when the service rejects the credentials.
    pub async fn login(&self, account: &str, secret_key: &str) -> Result<SessionGrant, ClientError> {
        let body = LoginRequest {
            account,
            secret_key,
        };
        let builder = self.transport.request(Method::POST, "/login", None)?.json(&body);
        self.transport.json(builder).await
    }

    /// Refresh a stored session.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Api`] with status 401 when the session has
    /// expired or been revoked.
    pub async fn refresh(&self, credentials: &Credentials) -> Result<SessionGrant, ClientError> {
        let body = RefreshRequest {
            account: &credentials.account,
            secret_key: &credentials.secret_key,
            session_id: &credentials.session_id,
            session_token: &credentials.session_token,
        };
        let builder = self
            .transport
            .request(Method::POST, "/refresh", Some(credentials))?
            .json(&body);
        self.transport.json(builder).await
    }

    /// Invalidate the current session on the service.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::NotAuthenticated`] without credentials.
    pub async fn logout(&self) -> Result<(), ClientError> {
        self.send_empty(Method::POST, "/logout").await
    }

    pub fn users(&self) -> UsersClient<'_> {
        UsersClient::new(self)
    }

    pub fn groups(&self) -> GroupsClient<'_> {
        GroupsClient::new(self)
    }

    pub fn policies(&self) -> PoliciesClient<'_> {
        PoliciesClient::new(self)
    }

    pub fn sessions(&self) -> SessionsClient<'_> {
        SessionsClient::new(self)
    }

    pub fn logins(&self) -> LoginsClient<'_> {
        LoginsClient::new(self)
    }

    pub fn public_keys(&self) -> PublicKeysClient<'_> {
        PublicKeysClient::new(self)
    }

    fn authed(&self, method: Method, path: &str) -> Result<RequestBuilder, ClientError> {
        let credentials = self.credentials.as_ref().ok_or(ClientError::NotAuthenticated)?;
        self.transport.request(method, path, Some(credentials))
    }

    pub(crate) async fn get_list<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &ListQuery,
    ) -> Result<T, ClientError> {
        let credentials = self.credentials.as_ref().ok_or(ClientError::NotAuthenticated)?;
        let builder = self.transport.request_with_query(
            Method::GET,
            path,
            &query.to_pairs(),
            Some(credentials),
        )?;
        self.transport.json(builder).await
    }

    pub(crate) async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, ClientError> {
        let builder = self.authed(Method::GET, path)?;
        self.transport.json(builder).await
    }

    pub(crate) async fn send_json<B, T>(
        &self,
        method: Method,
        path: &str,
        body: Option<&B>,
    ) -> Result<T, ClientError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let builder = with_body(self.authed(method, path)?, body);
        self.transport.json(builder).await
    }

    pub(crate) async fn send_empty(&self, method: Method, path: &str) -> Result<(), ClientError> {
        let builder = self.authed(method, path)?;
        self.transport.empty(builder).await
    }
}
