//! Identity references and display-identifier resolution.
//!
//! The services return related entities either as a bare id string or as a
//! record carrying optional human-readable fields. [`IdentityRef`] models the
//! two shapes as a tagged variant; on the wire it is untagged.

use serde::{Deserialize, Serialize};

/// Human-readable fields that may stand in for an opaque id.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Name,
    Email,
}

/// Entity family an identity reference belongs to.
///
/// Each family has its own field preference when choosing a display
/// identifier; all of them fall back to the id.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IdentityKind {
    User,
    Group,
    Policy,
    Generic,
}

impl IdentityKind {
    /// Field preference order, most preferred first.
    #[must_use]
    pub const fn preference(self) -> &'static [Field] {
        match self {
            Self::User => &[Field::Email, Field::Name],
            Self::Group | Self::Policy => &[Field::Name],
            Self::Generic => &[Field::Name, Field::Email],
        }
    }
}

/// Record form of an identity reference.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct IdentityRecord {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

impl IdentityRecord {
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    #[must_use]
    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }

    fn field(&self, field: Field) -> Option<&str> {
        let value = match field {
            Field::Name => self.name.as_deref(),
            Field::Email => self.email.as_deref(),
        };
        value.filter(|v| !v.is_empty())
    }
}

/// A user, group or policy denoted either by bare id or by a richer record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum IdentityRef {
    Inline(String),
    Resolved(IdentityRecord),
}

impl IdentityRef {
    /// The opaque id, regardless of shape.
    #[must_use]
    pub fn id(&self) -> &str {
        match self {
            Self::Inline(id) => id,
            Self::Resolved(record) => &record.id,
        }
    }

    #[must_use]
    pub fn name(&self) -> Option<&str> {
        match self {
            Self::Inline(_) => None,
            Self::Resolved(record) => record.field(Field::Name),
        }
    }

    #[must_use]
    pub fn email(&self) -> Option<&str> {
        match self {
            Self::Inline(_) => None,
            Self::Resolved(record) => record.field(Field::Email),
        }
    }

    /// Display identifier using the field preference of `kind`.
    ///
    /// Inline references resolve to themselves. Empty fields count as absent.
    #[must_use]
    pub fn identifier(&self, kind: IdentityKind) -> &str {
        match self {
            Self::Inline(id) => id,
            Self::Resolved(record) => kind
                .preference()
                .iter()
                .find_map(|field| record.field(*field))
                .unwrap_or(&record.id),
        }
    }
}

impl From<&str> for IdentityRef {
    fn from(id: &str) -> Self {
        Self::Inline(id.to_string())
    }
}

impl From<IdentityRecord> for IdentityRef {
    fn from(record: IdentityRecord) -> Self {
        Self::Resolved(record)
    }
}

/// `name ?? email ?? id`.
#[must_use]
pub fn resolve_identifier(reference: &IdentityRef) -> &str {
    reference.identifier(IdentityKind::Generic)
}

/// The opaque id behind a reference, for building routes and requests.
#[must_use]
pub fn resolve_id(reference: &IdentityRef) -> &str {
    reference.id()
}

/// Drop candidates already present in `related`, compared by display
/// identifier of `kind`.
#[must_use]
pub fn exclude_related(
    candidates: Vec<IdentityRef>,
    related: &[IdentityRef],
    kind: IdentityKind,
) -> Vec<IdentityRef> {
    candidates
        .into_iter()
        .filter(|candidate| {
            let identifier = candidate.identifier(kind);
            !related
                .iter()
                .any(|existing| existing.identifier(kind) == identifier)
        })
        .collect()
}
