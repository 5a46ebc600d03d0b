use iamc_core::entities::{NewPolicy, Policy};
use iamc_core::{ListQuery, Page};
use reqwest::Method;

use super::IamClient;
use crate::error::ClientError;
use crate::http::seg;

/// `/policies` endpoints.
#[derive(Debug, Clone, Copy)]
pub struct PoliciesClient<'a> {
    iam: &'a IamClient,
}

impl<'a> PoliciesClient<'a> {
    pub(crate) const fn new(iam: &'a IamClient) -> Self {
        Self { iam }
    }

    /// # Errors
    ///
    /// Returns [`ClientError`] on transport or decode failure.
    pub async fn list(&self, query: &ListQuery) -> Result<Page<Policy>, ClientError> {
        self.iam.get_list("/policies", query).await
    }

    /// # Errors
    ///
    /// Returns [`ClientError::Api`] with status 404 for an unknown policy.
    pub async fn get(&self, id: &str) -> Result<Policy, ClientError> {
        self.iam.get_json(&format!("/policies/{}", seg(id))).await
    }

    /// # Errors
    ///
    /// Returns [`ClientError`] on transport or decode failure.
    pub async fn create(&self, policy: &NewPolicy) -> Result<Policy, ClientError> {
        self.iam
            .send_json(Method::POST, "/policies", Some(policy))
            .await
    }

    /// # Errors
    ///
    /// Returns [`ClientError`] on transport failure.
    pub async fn delete(&self, id: &str) -> Result<(), ClientError> {
        self.iam
            .send_empty(Method::DELETE, &format!("/policies/{}", seg(id)))
            .await
    }
}
