use iamc_core::entities::Session;
use iamc_core::{ListQuery, Page};
use reqwest::Method;

use super::IamClient;
use crate::error::ClientError;
use crate::http::seg;

/// A user's IAM sessions, under `/users/{uid}/sessions`.
#[derive(Debug, Clone, Copy)]
pub struct SessionsClient<'a> {
    iam: &'a IamClient,
}

impl<'a> SessionsClient<'a> {
    pub(crate) const fn new(iam: &'a IamClient) -> Self {
        Self { iam }
    }

    /// # Errors
    ///
    /// Returns [`ClientError`] on transport or decode failure.
    pub async fn list(&self, user_id: &str, query: &ListQuery) -> Result<Page<Session>, ClientError> {
        self.iam
            .get_list(&format!("/users/{}/sessions", seg(user_id)), query)
            .await
    }

    /// # Errors
    ///
    /// Returns [`ClientError::Api`] with status 404 for an unknown session.
    pub async fn get(&self, session_id: &str, user_id: &str) -> Result<Session, ClientError> {
        self.iam.get_json(&session_path(session_id, user_id)).await
    }

    /// # Errors
    ///
    /// Returns [`ClientError`] on transport failure.
    pub async fn delete(&self, session_id: &str, user_id: &str) -> Result<(), ClientError> {
        self.iam
            .send_empty(Method::DELETE, &session_path(session_id, user_id))
            .await
    }
}

fn session_path(session_id: &str, user_id: &str) -> String {
    format!("/users/{}/sessions/{}", seg(user_id), seg(session_id))
}
