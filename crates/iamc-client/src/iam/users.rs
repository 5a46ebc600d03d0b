use iamc_core::entities::{Principal, User, UserUpdate};
use iamc_core::{ListQuery, Page};
use reqwest::Method;
use serde::Serialize;

use super::IamClient;
use crate::error::ClientError;
use crate::http::seg;

#[derive(Serialize)]
struct NewUser<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    email: Option<&'a str>,
}

/// `/users` endpoints.
#[derive(Debug, Clone, Copy)]
pub struct UsersClient<'a> {
    iam: &'a IamClient,
}

impl<'a> UsersClient<'a> {
    pub(crate) const fn new(iam: &'a IamClient) -> Self {
        Self { iam }
    }

    /// # Errors
    ///
    /// Returns [`ClientError`] on transport or decode failure.
    pub async fn list(&self, query: &ListQuery) -> Result<Page<User>, ClientError> {
        self.iam.get_list("/users", query).await
    }

    /// Fetch one user by id or email.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Api`] with status 404 for an unknown user.
    pub async fn get(&self, id: &str) -> Result<User, ClientError> {
        self.iam.get_json(&format!("/users/{}", seg(id))).await
    }

    /// Create a user, optionally with an email address.
    ///
    /// The returned principal carries the user's only copy of its private key.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError`] on transport or decode failure.
    pub async fn create(&self, email: Option<&str>) -> Result<Principal, ClientError> {
        let body = NewUser {
            email: email.filter(|e| !e.is_empty()),
        };
        self.iam.send_json(Method::POST, "/users", Some(&body)).await
    }

    /// # Errors
    ///
    /// Returns [`ClientError`] on transport or decode failure.
    pub async fn update(&self, id: &str, update: &UserUpdate) -> Result<User, ClientError> {
        self.iam
            .send_json(Method::PATCH, &format!("/users/{}", seg(id)), Some(update))
            .await
    }

    /// # Errors
    ///
    /// Returns [`ClientError`] on transport failure.
    pub async fn delete(&self, id: &str) -> Result<(), ClientError> {
        self.iam
            .send_empty(Method::DELETE, &format!("/users/{}", seg(id)))
            .await
    }

    /// # Errors
    ///
    /// Returns [`ClientError`] on transport failure.
    pub async fn attach_policy(&self, user_id: &str, policy_id: &str) -> Result<(), ClientError> {
        self.iam
            .send_empty(Method::POST, &policy_path(user_id, policy_id))
            .await
    }

    /// # Errors
    ///
    /// Returns [`ClientError`] on transport failure.
    pub async fn detach_policy(&self, user_id: &str, policy_id: &str) -> Result<(), ClientError> {
        self.iam
            .send_empty(Method::DELETE, &policy_path(user_id, policy_id))
            .await
    }
}

fn policy_path(user_id: &str, policy_id: &str) -> String {
    format!("/users/{}/policies/{}", seg(user_id), seg(policy_id))
}
