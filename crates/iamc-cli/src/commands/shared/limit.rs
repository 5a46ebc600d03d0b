/// Compute effective limit with precedence: local arg -> global flag -> fallback.
///
/// Zero is treated as unset.
#[must_use]
pub fn effective_limit(local: Option<u64>, global: Option<u64>, fallback: u64) -> u64 {
    local
        .filter(|limit| *limit > 0)
        .or_else(|| global.filter(|limit| *limit > 0))
        .unwrap_or(fallback)
}

#[cfg(test)]
mod tests {
    use super::effective_limit;

    #[test]
    fn local_takes_precedence() {
        assert_eq!(effective_limit(Some(5), Some(10), 20), 5);
    }

    #[test]
    fn global_used_when_local_missing() {
        assert_eq!(effective_limit(None, Some(10), 20), 10);
    }

    #[test]
    fn zero_falls_through() {
        assert_eq!(effective_limit(Some(0), Some(0), 20), 20);
    }
}
