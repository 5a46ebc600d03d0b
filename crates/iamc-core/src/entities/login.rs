use serde::{Deserialize, Serialize};

use crate::enums::LoginStatus;
use crate::identity::IdentityRef;

/// A login attempt awaiting (or past) administrator approval.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginRequest {
    pub id: String,
    pub user: IdentityRef,
    #[serde(default)]
    pub ip: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub session: Option<String>,
    pub status: LoginStatus,
}
