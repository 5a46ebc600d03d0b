//! Client error types.

use thiserror::Error;

/// Errors returned by the IAM and Events clients.
///
/// Variants split into two families. Transport errors ([`Self::Http`],
/// [`Self::Api`], [`Self::Socket`]) are expected at runtime and are shown to
/// the user inline. Everything else is unexpected and fails the operation.
#[derive(Debug, Error)]
pub enum ClientError {
    /// Connection, timeout or protocol failure below HTTP status level.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The service answered with a non-success status.
    #[error("API error ({status}): {message}")]
    Api {
        status: u16,
        /// The service's `error` field, or a generic status message.
        message: String,
    },

    /// Event socket connection or send failure.
    #[error("socket error: {0}")]
    Socket(String),

    /// A response body did not have the expected shape.
    #[error("decode error: {0}")]
    Decode(String),

    /// An authenticated call was made without session credentials.
    #[error("not authenticated")]
    NotAuthenticated,

    /// A configured base URL could not be used.
    #[error("invalid URL '{url}': {reason}")]
    InvalidUrl { url: String, reason: String },

    #[error("unexpected error: {0}")]
    Unexpected(String),
}

impl ClientError {
    /// Whether this is a transport error that views render inline.
    #[must_use]
    pub const fn is_transport(&self) -> bool {
        matches!(self, Self::Http(_) | Self::Api { .. } | Self::Socket(_))
    }

    #[must_use]
    pub const fn is_unauthorized(&self) -> bool {
        matches!(self, Self::Api { status: 401, .. })
    }

    /// The message to show inline, or `None` for unexpected errors.
    #[must_use]
    pub fn inline_message(&self) -> Option<String> {
        match self {
            Self::Api { message, .. } => Some(message.clone()),
            Self::Http(e) => Some(e.to_string()),
            Self::Socket(message) => Some(message.clone()),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn api_errors_are_transport() {
        let err = ClientError::Api {
            status: 404,
            message: "user not found".into(),
        };
        assert!(err.is_transport());
        assert!(!err.is_unauthorized());
        assert_eq!(err.inline_message().as_deref(), Some("user not found"));
    }

    #[test]
    fn decode_errors_are_unexpected() {
        let err = ClientError::Decode("missing field `id`".into());
        assert!(!err.is_transport());
        assert_eq!(err.inline_message(), None);
    }

    #[test]
    fn unauthorized_is_detected_by_status() {
        let err = ClientError::Api {
            status: 401,
            message: "expired".into(),
        };
        assert!(err.is_unauthorized());
    }
}
