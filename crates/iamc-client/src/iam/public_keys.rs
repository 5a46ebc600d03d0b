use reqwest::Method;

use super::IamClient;
use crate::error::ClientError;
use crate::http::seg;

/// A user's registered public keys.
#[derive(Debug, Clone, Copy)]
pub struct PublicKeysClient<'a> {
    iam: &'a IamClient,
}

impl<'a> PublicKeysClient<'a> {
    pub(crate) const fn new(iam: &'a IamClient) -> Self {
        Self { iam }
    }

    /// Remove `key` (base64) from the user's keys.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError`] on transport failure.
    pub async fn delete(&self, key: &str, user_id: &str) -> Result<(), ClientError> {
        self.iam
            .send_empty(
                Method::DELETE,
                &format!("/users/{}/public-keys/{}", seg(user_id), seg(key)),
            )
            .await
    }
}
