//! The paged remote collection behind every list view.
//!
//! A collection fetches the page a route asks for. When that page is empty
//! and is not the first one (the last item on it was deleted, or the route
//! was hand-edited past the end), it navigates back and fetches again. A
//! route at or past the reported total jumps to the last page in one step;
//! otherwise it steps back one page, and after [`MAX_STEP_BACKS`] single
//! steps it goes straight to offset 0. The route it finally rendered is
//! returned so callers can show and navigate from it.

use std::future::Future;

use serde::Serialize;

use crate::paging::{ListQuery, Page, Pagination};
use crate::route::Route;

/// Single-page steps taken before reconciliation gives up and loads offset 0.
pub const MAX_STEP_BACKS: usize = 8;

/// A fetch failure and the route whose page was being fetched.
#[derive(Debug)]
pub struct LoadError<E> {
    pub route: Route,
    pub error: E,
}

/// A page fetched for a route, after reconciliation.
#[derive(Debug, Clone, Serialize)]
pub struct LoadedPage<T> {
    /// Route that was actually rendered.
    pub route: Route,
    /// Original route, when reconciliation navigated away from it.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub redirected_from: Option<Route>,
    #[serde(skip)]
    pub query: ListQuery,
    pub items: Vec<T>,
    pub pagination: Pagination,
}

impl<T> LoadedPage<T> {
    /// Route for the previous page, if there is one.
    #[must_use]
    pub fn previous_route(&self) -> Option<Route> {
        self.pagination
            .previous
            .map(|offset| self.route.clone().with_offset(offset))
    }

    /// Route for the next page, if there is one.
    #[must_use]
    pub fn next_route(&self) -> Option<Route> {
        self.pagination
            .next
            .map(|offset| self.route.clone().with_offset(offset))
    }

    #[must_use]
    pub const fn was_reconciled(&self) -> bool {
        self.redirected_from.is_some()
    }

    /// Transform the items, keeping route and pagination.
    pub fn map<U>(self, f: impl FnMut(T) -> U) -> LoadedPage<U> {
        LoadedPage {
            route: self.route,
            redirected_from: self.redirected_from,
            query: self.query,
            items: self.items.into_iter().map(f).collect(),
            pagination: self.pagination,
        }
    }
}

/// A list endpoint plus the default page size for its view.
pub struct PagedCollection<F> {
    fetch: F,
    default_limit: u64,
}

impl<F> PagedCollection<F> {
    #[must_use]
    pub const fn new(fetch: F, default_limit: u64) -> Self {
        Self {
            fetch,
            default_limit,
        }
    }

    #[must_use]
    pub const fn default_limit(&self) -> u64 {
        self.default_limit
    }

    /// Fetch the page `route` points at, reconciling empty pages.
    ///
    /// # Errors
    ///
    /// Returns the first error produced by the fetch function, together with
    /// the route that was being fetched. No further fetches are attempted
    /// after an error.
    pub async fn load<T, E, Fut>(&self, route: &Route) -> Result<LoadedPage<T>, LoadError<E>>
    where
        F: Fn(ListQuery) -> Fut,
        Fut: Future<Output = Result<Page<T>, E>>,
    {
        let mut current = route.clone();
        let mut redirected_from = None;
        let mut steps = 0;

        loop {
            let query = current.list_query(self.default_limit);
            let page = match (self.fetch)(query.clone()).await {
                Ok(page) => page,
                Err(error) => {
                    return Err(LoadError {
                        route: current,
                        error,
                    });
                }
            };

            if page.items.is_empty() {
                if let Some(mut previous) = current.reconciled(self.default_limit, page.total) {
                    steps += 1;
                    if steps > MAX_STEP_BACKS {
                        previous = previous.with_offset(0);
                    }
                    tracing::debug!(
                        from = %current,
                        to = %previous,
                        total = page.total,
                        "empty page, stepping back"
                    );
                    redirected_from.get_or_insert_with(|| route.clone());
                    current = previous;
                    continue;
                }
            }

            let pagination = Pagination::new(query.offset, query.limit, page.total);
            return Ok(LoadedPage {
                route: current,
                redirected_from,
                query,
                items: page.items,
                pagination,
            });
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use super::*;
    use crate::route::View;
    use pretty_assertions::assert_eq;

    /// A fake list endpoint over `total` numbered items that records every
    /// query it receives.
    struct FakeEndpoint {
        total: u64,
        calls: Mutex<Vec<ListQuery>>,
    }

    impl FakeEndpoint {
        fn new(total: u64) -> Self {
            Self {
                total,
                calls: Mutex::new(Vec::new()),
            }
        }

        async fn fetch(&self, query: ListQuery) -> Result<Page<u64>, String> {
            self.calls.lock().unwrap().push(query.clone());
            let items = (query.offset..self.total)
                .take(usize::try_from(query.limit).unwrap())
                .collect();
            Ok(Page {
                items,
                total: self.total,
            })
        }

        fn offsets(&self) -> Vec<u64> {
            self.calls.lock().unwrap().iter().map(|q| q.offset).collect()
        }
    }

    #[tokio::test]
    async fn non_empty_page_is_rendered_as_is() {
        let endpoint = FakeEndpoint::new(25);
        let collection = PagedCollection::new(|q| endpoint.fetch(q), 10);
        let loaded = collection
            .load(&Route::parse("/users?offset=10"))
            .await
            .unwrap();

        assert_eq!(loaded.items, (10..20).collect::<Vec<_>>());
        assert!(!loaded.was_reconciled());
        assert_eq!(loaded.pagination.page, 2);
        assert_eq!(endpoint.offsets(), vec![10]);
    }

    #[tokio::test]
    async fn empty_page_steps_back_to_last_page() {
        let endpoint = FakeEndpoint::new(30);
        let collection = PagedCollection::new(|q| endpoint.fetch(q), 10);
        let loaded = collection
            .load(&Route::parse("/users?search=a&offset=30&limit=10"))
            .await
            .unwrap();

        assert_eq!(loaded.route.to_string(), "/users?search=a&offset=20&limit=10");
        assert_eq!(
            loaded.redirected_from.map(|r| r.to_string()).as_deref(),
            Some("/users?search=a&offset=30&limit=10")
        );
        assert_eq!(loaded.items.len(), 10);
        assert_eq!(endpoint.offsets(), vec![30, 20]);
    }

    #[tokio::test]
    async fn deleting_sole_item_on_page_two_lands_on_page_one() {
        // 50 users, limit 50, the only user on page two was just deleted.
        let endpoint = FakeEndpoint::new(50);
        let collection = PagedCollection::new(|q| endpoint.fetch(q), 10);
        let loaded = collection
            .load(&Route::parse("/users?offset=50&limit=50"))
            .await
            .unwrap();

        assert_eq!(loaded.route.offset(), 0);
        assert_eq!(loaded.route.limit(), Some(50));
        assert_eq!(loaded.items.len(), 50);
        assert_eq!(loaded.pagination.previous, None);
    }

    #[tokio::test]
    async fn far_past_the_end_jumps_to_last_page() {
        let endpoint = FakeEndpoint::new(25);
        let collection = PagedCollection::new(|q| endpoint.fetch(q), 10);
        let loaded = collection
            .load(&Route::parse("/groups?offset=400"))
            .await
            .unwrap();

        assert_eq!(endpoint.offsets(), vec![400, 20]);
        assert_eq!(loaded.route.offset(), 20);
        assert_eq!(loaded.items, vec![20, 21, 22, 23, 24]);
    }

    #[tokio::test]
    async fn hand_edited_offset_on_empty_list_takes_two_fetches() {
        let endpoint = FakeEndpoint::new(0);
        let collection = PagedCollection::new(|q| endpoint.fetch(q), 10);
        let loaded = collection
            .load(&Route::parse("/users?offset=200000&limit=1"))
            .await
            .unwrap();

        assert_eq!(endpoint.offsets(), vec![200_000, 0]);
        assert_eq!(loaded.route.to_string(), "/users?offset=0&limit=1");
        assert!(loaded.items.is_empty());
    }

    #[tokio::test]
    async fn stale_total_stops_stepping_after_the_bound() {
        // Claims a million items but every page is empty.
        let calls = Mutex::new(Vec::new());
        let collection = PagedCollection::new(
            |q: ListQuery| {
                calls.lock().unwrap().push(q.offset);
                async {
                    Ok::<_, String>(Page {
                        items: Vec::<u64>::new(),
                        total: 1_000_000,
                    })
                }
            },
            10,
        );
        let loaded = collection
            .load(&Route::parse("/users?offset=500000"))
            .await
            .unwrap();

        let offsets = calls.lock().unwrap().clone();
        assert_eq!(offsets.len(), MAX_STEP_BACKS + 2);
        assert_eq!(offsets.last(), Some(&0));
        assert_eq!(loaded.route.offset(), 0);
    }

    #[tokio::test]
    async fn empty_first_page_is_final() {
        let endpoint = FakeEndpoint::new(0);
        let collection = PagedCollection::new(|q| endpoint.fetch(q), 10);
        let loaded = collection.load(&Route::new(View::Policies)).await.unwrap();

        assert!(loaded.items.is_empty());
        assert!(!loaded.was_reconciled());
        assert_eq!(endpoint.offsets(), vec![0]);
    }

    #[tokio::test]
    async fn errors_stop_the_loop() {
        let calls = Mutex::new(0);
        let collection = PagedCollection::new(
            |_q: ListQuery| {
                *calls.lock().unwrap() += 1;
                async { Err::<Page<u64>, _>("boom".to_string()) }
            },
            10,
        );
        let err = collection
            .load(&Route::parse("/users?offset=20"))
            .await
            .unwrap_err();

        assert_eq!(err.error, "boom");
        assert_eq!(err.route.to_string(), "/users?offset=20");
        assert_eq!(*calls.lock().unwrap(), 1);
    }

    #[tokio::test]
    async fn errors_after_stepping_back_report_the_failing_route() {
        let calls = Mutex::new(0);
        let collection = PagedCollection::new(
            |_q: ListQuery| {
                let mut calls = calls.lock().unwrap();
                *calls += 1;
                let first = *calls == 1;
                async move {
                    if first {
                        Ok(Page {
                            items: Vec::<u64>::new(),
                            total: 15,
                        })
                    } else {
                        Err("boom".to_string())
                    }
                }
            },
            10,
        );
        let err = collection
            .load(&Route::parse("/users?offset=30"))
            .await
            .unwrap_err();

        assert_eq!(err.route.to_string(), "/users?offset=10");
        assert_eq!(*calls.lock().unwrap(), 2);
    }

    #[tokio::test]
    async fn next_and_previous_routes_keep_params() {
        let endpoint = FakeEndpoint::new(30);
        let collection = PagedCollection::new(|q| endpoint.fetch(q), 10);
        let loaded = collection
            .load(&Route::parse("/users?search=a&offset=10"))
            .await
            .unwrap();

        assert_eq!(
            loaded.previous_route().unwrap().to_string(),
            "/users?search=a&offset=0"
        );
        assert_eq!(
            loaded.next_route().unwrap().to_string(),
            "/users?search=a&offset=20"
        );
    }
}
