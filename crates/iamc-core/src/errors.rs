//! Errors raised by the core types.
//!
//! Crate-specific errors (`ClientError`, `AuthError`, `ConfigError`) live in
//! their own crates. The binary converges everything into `anyhow`.

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CoreError {
    /// Input failed validation (format, constraints).
    #[error("Validation error: {0}")]
    Validation(String),
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use super::*;
    use crate::entities::Rule;

    #[test]
    fn malformed_rule_is_a_validation_error() {
        let err = Rule::from_str("Write:Maybe:/users").unwrap_err();
        assert!(matches!(err, CoreError::Validation(_)));
        assert!(err.to_string().starts_with("Validation error: "));
    }
}
