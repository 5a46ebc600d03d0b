use std::future::Future;

use iamc_client::ClientError;
use iamc_core::identity::{exclude_related, resolve_id};
use iamc_core::{IdentityKind, IdentityRef, ListQuery, Page, Route, View};
use serde::Serialize;

use crate::commands::shared::inline::inline;

const CANDIDATE_PAGE: u64 = 100;

/// A related entity as shown in a detail view.
#[derive(Debug, Serialize)]
pub struct RelatedRow {
    pub name: String,
    pub id: String,
    pub route: Route,
}

impl RelatedRow {
    pub fn new(reference: &IdentityRef, kind: IdentityKind) -> Self {
        let id = resolve_id(reference).to_string();
        let view = match kind {
            IdentityKind::User | IdentityKind::Generic => View::User(id.clone()),
            IdentityKind::Group => View::Group(id.clone()),
            IdentityKind::Policy => View::Policy(id.clone()),
        };
        Self {
            name: reference.identifier(kind).to_string(),
            id,
            route: Route::new(view),
        }
    }
}

pub fn related_rows(references: &[IdentityRef], kind: IdentityKind) -> Vec<RelatedRow> {
    references
        .iter()
        .map(|reference| RelatedRow::new(reference, kind))
        .collect()
}

/// Entities that could be related to the one at `route`.
#[derive(Debug, Serialize)]
pub struct Candidates {
    pub route: Route,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    pub candidates: Vec<RelatedRow>,
}

/// Every item of a paged endpoint.
pub async fn fetch_all<T, F, Fut>(fetch: F) -> Result<Vec<T>, ClientError>
where
    F: Fn(ListQuery) -> Fut,
    Fut: Future<Output = Result<Page<T>, ClientError>>,
{
    let mut items = Vec::new();
    loop {
        let page = fetch(ListQuery::new(items.len() as u64, CANDIDATE_PAGE)).await?;
        let done = page.items.is_empty();
        items.extend(page.items);
        if done || items.len() as u64 >= page.total {
            return Ok(items);
        }
    }
}

/// List every entity from `fetch` not already in `related`, compared by
/// display identifier.
pub async fn candidates<T, F, Fut>(
    route: Route,
    fetch: F,
    to_ref: impl Fn(&T) -> IdentityRef,
    related: &[IdentityRef],
    kind: IdentityKind,
) -> anyhow::Result<Candidates>
where
    F: Fn(ListQuery) -> Fut,
    Fut: Future<Output = Result<Page<T>, ClientError>>,
{
    Ok(match inline(fetch_all(fetch).await)? {
        Ok(items) => {
            let all = items.iter().map(to_ref).collect();
            Candidates {
                route,
                error: None,
                candidates: related_rows(&exclude_related(all, related, kind), kind),
            }
        }
        Err(message) => Candidates {
            route,
            error: Some(message),
            candidates: Vec::new(),
        },
    })
}
