use iamc_core::entities::Group;
use iamc_core::{ListQuery, Page};
use reqwest::Method;
use serde::Serialize;

use super::IamClient;
use crate::error::ClientError;
use crate::http::seg;

#[derive(Serialize)]
struct NewGroup<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    name: Option<&'a str>,
}

/// `/groups` endpoints.
#[derive(Debug, Clone, Copy)]
pub struct GroupsClient<'a> {
    iam: &'a IamClient,
}

impl<'a> GroupsClient<'a> {
    pub(crate) const fn new(iam: &'a IamClient) -> Self {
        Self { iam }
    }

    /// # Errors
    ///
    /// Returns [`ClientError`] on transport or decode failure.
    pub async fn list(&self, query: &ListQuery) -> Result<Page<Group>, ClientError> {
        self.iam.get_list("/groups", query).await
    }

    /// # Errors
    ///
    /// Returns [`ClientError::Api`] with status 404 for an unknown group.
    pub async fn get(&self, id: &str) -> Result<Group, ClientError> {
        self.iam.get_json(&format!("/groups/{}", seg(id))).await
    }

    /// Create a group. A blank name is omitted from the request.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError`] on transport or decode failure.
    pub async fn create(&self, name: Option<&str>) -> Result<Group, ClientError> {
        let body = NewGroup {
            name: name.filter(|n| !n.is_empty()),
        };
        self.iam.send_json(Method::POST, "/groups", Some(&body)).await
    }

    /// # Errors
    ///
    /// Returns [`ClientError`] on transport failure.
    pub async fn delete(&self, id: &str) -> Result<(), ClientError> {
        self.iam
            .send_empty(Method::DELETE, &format!("/groups/{}", seg(id)))
            .await
    }

    /// # Errors
    ///
    /// Returns [`ClientError`] on transport failure.
    pub async fn add_member(&self, group_id: &str, user_id: &str) -> Result<(), ClientError> {
        self.iam
            .send_empty(Method::POST, &member_path(group_id, user_id))
            .await
    }

    /// # Errors
    ///
    /// Returns [`ClientError`] on transport failure.
    pub async fn remove_member(&self, group_id: &str, user_id: &str) -> Result<(), ClientError> {
        self.iam
            .send_empty(Method::DELETE, &member_path(group_id, user_id))
            .await
    }

    /// # Errors
    ///
    /// Returns [`ClientError`] on transport failure.
    pub async fn attach_policy(&self, group_id: &str, policy_id: &str) -> Result<(), ClientError> {
        self.iam
            .send_empty(Method::POST, &policy_path(group_id, policy_id))
            .await
    }

    /// # Errors
    ///
    /// Returns [`ClientError`] on transport failure.
    pub async fn detach_policy(&self, group_id: &str, policy_id: &str) -> Result<(), ClientError> {
        self.iam
            .send_empty(Method::DELETE, &policy_path(group_id, policy_id))
            .await
    }
}

fn member_path(group_id: &str, user_id: &str) -> String {
    format!("/groups/{}/members/{}", seg(group_id), seg(user_id))
}

fn policy_path(group_id: &str, policy_id: &str) -> String {
    format!("/groups/{}/policies/{}", seg(group_id), seg(policy_id))
}
