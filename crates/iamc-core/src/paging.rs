//! Offset/limit paging: list queries, page results, the pagination widget and
//! empty-page reconciliation.

use serde::{Deserialize, Serialize};

use crate::enums::SortOrder;

/// One page of a remote list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Page<T> {
    pub items: Vec<T>,
    #[serde(default)]
    pub total: u64,
}

/// Parameters accepted by every list endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListQuery {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub search: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sort: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub order: Option<SortOrder>,
    pub offset: u64,
    pub limit: u64,
}

impl Default for ListQuery {
    fn default() -> Self {
        Self::new(0, 10)
    }
}

impl ListQuery {
    /// A query for `limit` items starting at `offset`. A zero limit becomes 1.
    #[must_use]
    pub fn new(offset: u64, limit: u64) -> Self {
        Self {
            search: None,
            sort: None,
            order: None,
            offset,
            limit: limit.max(1),
        }
    }

    #[must_use]
    pub fn with_search(mut self, search: Option<String>) -> Self {
        self.search = search.filter(|s| !s.is_empty());
        self
    }

    #[must_use]
    pub fn with_sort(mut self, sort: Option<String>, order: Option<SortOrder>) -> Self {
        self.sort = sort.filter(|s| !s.is_empty());
        self.order = order;
        self
    }

    /// Query-string pairs in the order the services expect.
    #[must_use]
    pub fn to_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::with_capacity(5);
        if let Some(search) = &self.search {
            pairs.push(("search", search.clone()));
        }
        if let Some(sort) = &self.sort {
            pairs.push(("sort", sort.clone()));
        }
        if let Some(order) = self.order {
            pairs.push(("order", order.as_str().to_string()));
        }
        pairs.push(("offset", self.offset.to_string()));
        pairs.push(("limit", self.limit.to_string()));
        pairs
    }
}

/// Offset to navigate to when the page at `offset` came back empty.
///
/// `None` when already on the first page. When `offset` is at or past the
/// reported `total`, the target is the last page in one step (0 for an empty
/// list). Otherwise `max(0, offset - limit)`.
#[must_use]
pub const fn reconcile_offset(offset: u64, limit: u64, total: u64) -> Option<u64> {
    if offset == 0 {
        return None;
    }
    let limit = if limit == 0 { 1 } else { limit };
    if offset >= total {
        Some(last_page_offset(total, limit))
    } else {
        Some(offset.saturating_sub(limit))
    }
}

/// Offset of the last page of `total` items, 0 when there are none.
#[must_use]
pub const fn last_page_offset(total: u64, limit: u64) -> u64 {
    let limit = if limit == 0 { 1 } else { limit };
    if total == 0 {
        0
    } else {
        (total - 1) / limit * limit
    }
}

/// Previous/next state for a page of `limit` items at `offset` out of `total`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pagination {
    pub offset: u64,
    pub limit: u64,
    pub total: u64,
    /// 1-based page number.
    pub page: u64,
    pub pages: u64,
    /// Offset of the previous page, if there is one.
    pub previous: Option<u64>,
    /// Offset of the next page, if there is one.
    pub next: Option<u64>,
}

impl Pagination {
    #[must_use]
    pub const fn new(offset: u64, limit: u64, total: u64) -> Self {
        let limit = if limit == 0 { 1 } else { limit };
        let page = offset / limit + 1;
        let pages = total.div_ceil(limit);
        let previous = if offset > 0 {
            Some(offset.saturating_sub(limit))
        } else {
            None
        };
        let next = if page < pages {
            Some(offset + limit)
        } else {
            None
        };
        Self {
            offset,
            limit,
            total,
            page,
            pages,
            previous,
            next,
        }
    }

    /// `Page N of M`.
    #[must_use]
    pub fn label(&self) -> String {
        format!("Page {} of {}", self.page, self.pages)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[rstest]
    #[case(0, 10, 0, None)]
    #[case(50, 50, 50, Some(0))]
    #[case(30, 10, 30, Some(20))]
    #[case(5, 10, 5, Some(0))]
    #[case(40, 10, 100, Some(30))]
    fn reconcile_offset_steps_back_one_page(
        #[case] offset: u64,
        #[case] limit: u64,
        #[case] total: u64,
        #[case] expected: Option<u64>,
    ) {
        assert_eq!(reconcile_offset(offset, limit, total), expected);
    }

    #[rstest]
    #[case(200_000, 1, 0, Some(0))]
    #[case(400, 10, 25, Some(20))]
    #[case(31, 10, 31, Some(30))]
    fn reconcile_offset_jumps_to_last_page_past_the_total(
        #[case] offset: u64,
        #[case] limit: u64,
        #[case] total: u64,
        #[case] expected: Option<u64>,
    ) {
        assert_eq!(reconcile_offset(offset, limit, total), expected);
    }

    #[test]
    fn last_page_offset_of_empty_list_is_zero() {
        assert_eq!(last_page_offset(0, 10), 0);
        assert_eq!(last_page_offset(10, 10), 0);
        assert_eq!(last_page_offset(11, 10), 10);
    }

    #[test]
    fn first_page_has_only_next() {
        let p = Pagination::new(0, 10, 25);
        assert_eq!(p.page, 1);
        assert_eq!(p.pages, 3);
        assert_eq!(p.previous, None);
        assert_eq!(p.next, Some(10));
        assert_eq!(p.label(), "Page 1 of 3");
    }

    #[test]
    fn last_page_has_only_previous() {
        let p = Pagination::new(20, 10, 25);
        assert_eq!(p.page, 3);
        assert_eq!(p.previous, Some(10));
        assert_eq!(p.next, None);
    }

    #[test]
    fn zero_limit_does_not_divide_by_zero() {
        let p = Pagination::new(3, 0, 5);
        assert_eq!(p.limit, 1);
        assert_eq!(p.page, 4);
        assert_eq!(p.pages, 5);
    }

    #[test]
    fn empty_total_has_no_links() {
        let p = Pagination::new(0, 10, 0);
        assert_eq!(p.pages, 0);
        assert_eq!(p.previous, None);
        assert_eq!(p.next, None);
    }

    #[test]
    fn query_pairs_skip_unset_fields() {
        let q = ListQuery::new(20, 10)
            .with_search(Some("al".into()))
            .with_sort(Some(String::new()), Some(SortOrder::Desc));
        assert_eq!(
            q.to_pairs(),
            vec![
                ("search", "al".to_string()),
                ("order", "desc".to_string()),
                ("offset", "20".to_string()),
                ("limit", "10".to_string()),
            ]
        );
    }
}
