use iamc_core::entities::LoginRequest;
use iamc_core::{ListQuery, Page};
use reqwest::Method;

use super::IamClient;
use crate::error::ClientError;
use crate::http::seg;

/// A user's pending and decided login requests.
#[derive(Debug, Clone, Copy)]
pub struct LoginsClient<'a> {
    iam: &'a IamClient,
}

impl<'a> LoginsClient<'a> {
    pub(crate) const fn new(iam: &'a IamClient) -> Self {
        Self { iam }
    }

    /// # Errors
    ///
    /// Returns [`ClientError`] on transport or decode failure.
    pub async fn list(
        &self,
        user_id: &str,
        query: &ListQuery,
    ) -> Result<Page<LoginRequest>, ClientError> {
        self.iam
            .get_list(&format!("/users/{}/logins", seg(user_id)), query)
            .await
    }

    /// # Errors
    ///
    /// Returns [`ClientError`] on transport failure.
    pub async fn grant(&self, login_id: &str, user_id: &str) -> Result<(), ClientError> {
        self.iam
            .send_empty(Method::POST, &format!("{}/grant", login_path(login_id, user_id)))
            .await
    }

    /// # Errors
    ///
    /// Returns [`ClientError`] on transport failure.
    pub async fn deny(&self, login_id: &str, user_id: &str) -> Result<(), ClientError> {
        self.iam
            .send_empty(Method::POST, &format!("{}/deny", login_path(login_id, user_id)))
            .await
    }

    /// # Errors
    ///
    /// Returns [`ClientError`] on transport failure.
    pub async fn delete(&self, login_id: &str, user_id: &str) -> Result<(), ClientError> {
        self.iam
            .send_empty(Method::DELETE, &login_path(login_id, user_id))
            .await
    }
}

fn login_path(login_id: &str, user_id: &str) -> String {
    format!("/users/{}/logins/{}", seg(user_id), seg(login_id))
}
