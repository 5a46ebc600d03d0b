//! IAM service endpoint.

use serde::{Deserialize, Serialize};

fn default_url() -> String {
    "https://iam.mtaylor.io".to_string()
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct IamConfig {
    /// Base URL of the IAM service.
    #[serde(default = "default_url")]
    pub url: String,
}

impl Default for IamConfig {
    fn default() -> Self {
        Self { url: default_url() }
    }
}
