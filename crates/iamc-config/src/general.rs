//! General console settings.

use serde::{Deserialize, Serialize};

/// Default page size for list views.
const fn default_limit() -> u64 {
    10
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct GeneralConfig {
    /// Page size used when a route or `--limit` does not set one.
    #[serde(default = "default_limit")]
    pub default_limit: u64,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            default_limit: default_limit(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_correct() {
        assert_eq!(GeneralConfig::default().default_limit, 10);
    }
}
