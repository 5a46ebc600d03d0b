use serde::{Deserialize, Serialize};

use crate::identity::{IdentityKind, IdentityRecord, IdentityRef};

/// A user account with its relations.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default)]
    pub groups: Vec<IdentityRef>,
    #[serde(default)]
    pub policies: Vec<IdentityRef>,
    #[serde(default)]
    pub public_keys: Vec<PublicKey>,
}

impl User {
    #[must_use]
    pub fn to_ref(&self) -> IdentityRef {
        IdentityRef::Resolved(IdentityRecord {
            id: self.id.clone(),
            name: self.name.clone(),
            email: self.email.clone(),
        })
    }

    #[must_use]
    pub fn identifier(&self) -> String {
        self.to_ref().identifier(IdentityKind::User).to_string()
    }
}

/// A public key registered for a user.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PublicKey {
    pub key: String,
    #[serde(default)]
    pub description: String,
}

/// Result of creating a user: the account plus its freshly issued key pair.
///
/// The private key is shown once and never persisted by the console.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Principal {
    pub user: IdentityRecord,
    pub public_key: String,
    pub private_key: String,
}

/// Partial update of a user's editable fields.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserUpdate {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}
