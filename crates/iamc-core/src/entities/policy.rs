use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::enums::{Action, Effect};
use crate::errors::CoreError;
use crate::identity::{IdentityKind, IdentityRecord, IdentityRef};

/// A policy: a named set of statements scoped to a hostname.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Policy {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default)]
    pub hostname: String,
    #[serde(default)]
    pub statements: Vec<Rule>,
}

impl Policy {
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
        self.to_ref().identifier(IdentityKind::Policy).to_string()
    }
}

/// One policy statement.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rule {
    pub action: Action,
    pub effect: Effect,
    #[serde(default)]
    pub resource: String,
}

impl Rule {
    /// A `Read`/`Allow` statement on `resource`.
    #[must_use]
    pub fn new(resource: impl Into<String>) -> Self {
        Self {
            resource: resource.into(),
            ..Self::default()
        }
    }
}

impl FromStr for Rule {
    type Err = CoreError;

    /// Parse `ACTION:EFFECT:RESOURCE`. The resource may itself contain `:`.
    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let mut parts = raw.splitn(3, ':');
        let (Some(action), Some(effect), Some(resource)) = (parts.next(), parts.next(), parts.next())
        else {
            return Err(CoreError::Validation(format!(
                "statement '{raw}' must look like ACTION:EFFECT:RESOURCE"
            )));
        };

        let action = match action.to_ascii_lowercase().as_str() {
            "read" => Action::Read,
            "write" => Action::Write,
            other => {
                return Err(CoreError::Validation(format!(
                    "unknown action '{other}' (expected Read or Write)"
                )));
            }
        };
        let effect = match effect.to_ascii_lowercase().as_str() {
            "allow" => Effect::Allow,
            "deny" => Effect::Deny,
            other => {
                return Err(CoreError::Validation(format!(
                    "unknown effect '{other}' (expected Allow or Deny)"
                )));
            }
        };

        Ok(Self {
            action,
            effect,
            resource: resource.to_string(),
        })
    }
}

/// Body of a policy creation request. A blank name is omitted entirely.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewPolicy {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub hostname: String,
    #[serde(default)]
    pub statements: Vec<Rule>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn parses_statement_with_colons_in_resource() {
        let rule: Rule = "write:deny:https://x.io/users/*".parse().unwrap();
        assert_eq!(rule.action, Action::Write);
        assert_eq!(rule.effect, Effect::Deny);
        assert_eq!(rule.resource, "https://x.io/users/*");
    }

    #[test]
    fn rejects_incomplete_statement() {
        let err = "Read:Allow".parse::<Rule>().unwrap_err();
        assert!(err.to_string().contains("ACTION:EFFECT:RESOURCE"));
    }

    #[test]
    fn rejects_unknown_action() {
        let err = "Delete:Allow:/x".parse::<Rule>().unwrap_err();
        assert!(err.to_string().contains("unknown action 'delete'"));
    }

    #[test]
    fn new_policy_omits_blank_name() {
        let body = NewPolicy {
            name: None,
            hostname: "x.io".into(),
            statements: vec![Rule::new("/users")],
        };
        let json = serde_json::to_value(&body).unwrap();
        assert!(json.get("name").is_none());
        assert_eq!(json["statements"][0]["action"], "Read");
        assert_eq!(json["statements"][0]["effect"], "Allow");
    }

    #[test]
    fn policy_identifier_falls_back_to_id() {
        let policy = Policy {
            id: "p-1".into(),
            ..Policy::default()
        };
        assert_eq!(policy.identifier(), "p-1");
    }
}
