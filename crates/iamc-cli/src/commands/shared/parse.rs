use serde::de::DeserializeOwned;

/// Parse a snake_case enum value using serde-deserialization.
pub fn parse_enum<T>(raw: &str, field: &str) -> anyhow::Result<T>
where
    T: DeserializeOwned,
{
    let normalized = raw.trim().to_ascii_lowercase().replace('-', "_");
    let json = format!("\"{normalized}\"");
    serde_json::from_str(&json).map_err(|error| anyhow::anyhow!("invalid {field} '{raw}': {error}"))
}

/// Treat blank input as absent.
#[must_use]
pub fn non_blank(raw: Option<&str>) -> Option<&str> {
    raw.map(str::trim).filter(|value| !value.is_empty())
}

#[cfg(test)]
mod tests {
    use iamc_core::enums::SortOrder;

    use super::{non_blank, parse_enum};

    #[test]
    fn parses_sort_order_case_insensitively() {
        let order: SortOrder = parse_enum("DESC", "order").expect("order should parse");
        assert_eq!(order, SortOrder::Desc);
    }

    #[test]
    fn errors_on_invalid_enum() {
        let err = parse_enum::<SortOrder>("sideways", "order").expect_err("should fail");
        assert!(err.to_string().contains("invalid order 'sideways'"));
    }

    #[test]
    fn blank_strings_are_absent() {
        assert_eq!(non_blank(Some("  ")), None);
        assert_eq!(non_blank(Some(" ops ")), Some("ops"));
        assert_eq!(non_blank(None), None);
    }
}
