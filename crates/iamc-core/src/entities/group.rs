use serde::{Deserialize, Serialize};

use crate::identity::{IdentityKind, IdentityRecord, IdentityRef};

/// A group of users sharing attached policies.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Group {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default)]
    pub users: Vec<IdentityRef>,
    #[serde(default)]
    pub policies: Vec<IdentityRef>,
}

impl Group {
    /// Reference form, carrying the display name when set.
    #[must_use]
    pub fn to_ref(&self) -> IdentityRef {
        IdentityRef::Resolved(IdentityRecord {
            id: self.id.clone(),
            name: self.name.clone(),
            email: None,
        })
    }

    #[must_use]
    pub fn identifier(&self) -> String {
        self.to_ref().identifier(IdentityKind::Group).to_string()
    }
}
