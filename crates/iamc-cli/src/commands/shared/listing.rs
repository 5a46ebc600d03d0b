use std::future::Future;

use iamc_client::ClientError;
use iamc_core::enums::SortOrder;
use iamc_core::{
    ListQuery, LoadError, LoadedPage, Page, PagedCollection, Pagination, Route, View,
};
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::ListArgs;
use crate::commands::shared::limit::effective_limit;
use crate::commands::shared::parse::parse_enum;
use crate::context::AppContext;

/// A rendered list view.
#[derive(Debug, Serialize)]
pub struct Listing<R> {
    pub route: Route,
    /// Route the user asked for, when an empty page was reconciled away.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub redirected_from: Option<Route>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pagination: Option<Pagination>,
    pub previous: Option<Route>,
    pub next: Option<Route>,
    pub items: Vec<R>,
}

impl<R> Listing<R> {
    pub fn loaded<T>(page: LoadedPage<T>, row: impl FnMut(T) -> R) -> Self {
        let previous = page.previous_route();
        let next = page.next_route();
        let page = page.map(row);
        Self {
            route: page.route,
            redirected_from: page.redirected_from,
            error: None,
            page: Some(page.pagination.label()),
            pagination: Some(page.pagination),
            previous,
            next,
            items: page.items,
        }
    }

    /// An unpaged list.
    pub fn all(route: Route, items: Vec<R>) -> Self {
        Self {
            route,
            redirected_from: None,
            error: None,
            page: None,
            pagination: None,
            previous: None,
            next: None,
            items,
        }
    }

    pub fn failed(route: Route, message: String) -> Self {
        Self {
            error: Some(message),
            ..Self::all(route, Vec::new())
        }
    }
}

/// Page size for list views: route, then `--limit`, then config.
pub fn page_size(route: &Route, ctx: &AppContext, flags: &GlobalFlags) -> u64 {
    effective_limit(route.limit(), flags.limit, ctx.config.general.default_limit)
}

/// Route for a list view from command-line arguments.
pub fn list_route(view: View, args: &ListArgs, flags: &GlobalFlags) -> anyhow::Result<Route> {
    let order = args
        .order
        .as_deref()
        .map(|raw| parse_enum::<SortOrder>(raw, "order"))
        .transpose()?;

    let mut route = Route::new(view);
    if let Some(offset) = args.offset.filter(|offset| *offset > 0) {
        route = route.with_offset(offset);
    }
    if let Some(limit) = flags.limit.filter(|limit| *limit > 0) {
        route = route.with_param("limit", limit.to_string());
    }
    Ok(route
        .with_optional_param("search", args.search.as_deref())
        .with_optional_param("sort", args.sort.as_deref())
        .with_optional_param("order", order.map(SortOrder::as_str)))
}

/// Load the page `route` points at through a [`PagedCollection`] and render
/// each item with `row`.
///
/// Transport failures produce a listing carrying the error message and the
/// route whose page failed to load.
pub async fn load<T, R, F, Fut>(
    fetch: F,
    route: &Route,
    limit: u64,
    row: impl FnMut(T) -> R,
) -> anyhow::Result<Listing<R>>
where
    F: Fn(ListQuery) -> Fut,
    Fut: Future<Output = Result<Page<T>, ClientError>>,
{
    let collection = PagedCollection::new(fetch, limit);
    match collection.load(route).await {
        Ok(page) => Ok(Listing::loaded(page, row)),
        Err(LoadError { route, error }) => match error.inline_message() {
            Some(message) => {
                tracing::debug!(%error, %route, "rendering list error inline");
                Ok(Listing::failed(route, message))
            }
            None => Err(error.into()),
        },
    }
}

/// The list page a delete returns to: `raw` when it is a route to `view`,
/// otherwise the first page of `view`.
pub fn return_route(raw: Option<&str>, view: View) -> Route {
    raw.map(Route::parse)
        .filter(|route| route.view == view)
        .unwrap_or_else(|| Route::new(view))
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use pretty_assertions::assert_eq;

    use super::*;
    use crate::cli::{ColorMode, OutputFormat};

    fn flags(limit: Option<u64>) -> GlobalFlags {
        GlobalFlags {
            format: OutputFormat::Json,
            limit,
            quiet: false,
            verbose: false,
            color: ColorMode::Never,
        }
    }

    #[test]
    fn list_route_carries_active_parameters() {
        let args = ListArgs {
            offset: Some(20),
            search: Some("ops".into()),
            sort: None,
            order: Some("DESC".into()),
        };
        let route = list_route(View::Groups, &args, &flags(Some(10))).unwrap();
        assert_eq!(
            route.to_string(),
            "/groups?offset=20&limit=10&search=ops&order=desc"
        );
    }

    #[test]
    fn list_route_rejects_unknown_order() {
        let args = ListArgs {
            order: Some("up".into()),
            ..ListArgs::default()
        };
        assert!(list_route(View::Users, &args, &flags(None)).is_err());
    }

    #[tokio::test]
    async fn deleting_last_item_reconciles_to_previous_page() {
        // 50 users; the route points at the second page of 50, now empty.
        let calls = Mutex::new(Vec::new());
        let fetch = |query: ListQuery| {
            calls.lock().unwrap().push(query.offset);
            async move {
                let items: Vec<u64> = (query.offset..50.min(query.offset + query.limit)).collect();
                Ok::<_, ClientError>(Page { items, total: 50 })
            }
        };
        let route = Route::parse("/users?offset=50&limit=50&search=a");

        let listing = load(fetch, &route, 10, |n| n).await.unwrap();

        assert_eq!(*calls.lock().unwrap(), vec![50, 0]);
        assert_eq!(listing.route.to_string(), "/users?offset=0&limit=50&search=a");
        assert_eq!(
            listing.redirected_from.map(|r| r.to_string()).as_deref(),
            Some("/users?offset=50&limit=50&search=a")
        );
        assert_eq!(listing.items.len(), 50);
        assert_eq!(listing.previous, None);
    }

    #[tokio::test]
    async fn transport_errors_become_inline_listing() {
        let fetch = |_query: ListQuery| async {
            Err::<Page<u64>, _>(ClientError::Api {
                status: 503,
                message: "iam unavailable".into(),
            })
        };
        let listing = load(fetch, &Route::new(View::Users), 10, |n| n).await.unwrap();
        assert_eq!(listing.error.as_deref(), Some("iam unavailable"));
        assert!(listing.items.is_empty());
    }

    #[tokio::test]
    async fn failure_after_reconciling_names_the_page_that_failed() {
        // The requested page is past a total of 15; the last page then fails.
        let fetch = |query: ListQuery| async move {
            if query.offset == 40 {
                Ok(Page {
                    items: Vec::<u64>::new(),
                    total: 15,
                })
            } else {
                Err(ClientError::Api {
                    status: 503,
                    message: "iam unavailable".into(),
                })
            }
        };
        let route = Route::parse("/users?offset=40&search=a");

        let listing = load(fetch, &route, 10, |n| n).await.unwrap();

        assert_eq!(listing.route.to_string(), "/users?offset=10&search=a");
        assert_eq!(listing.error.as_deref(), Some("iam unavailable"));
    }

    #[test]
    fn return_route_must_match_the_list() {
        assert_eq!(
            return_route(Some("/users?offset=10"), View::Users).to_string(),
            "/users?offset=10"
        );
        assert_eq!(return_route(Some("/groups?offset=10"), View::Users).to_string(), "/users");
        assert_eq!(return_route(None, View::Policies).to_string(), "/policies");
    }
}
