use iamc_core::entities::Session;
use iamc_core::{ListQuery, Route, View};
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::commands::shared::inline::inline;
use crate::commands::shared::listing::{self, Listing, page_size};
use crate::commands::users::get::SessionRow;
use crate::context::AppContext;
use crate::output::output;

/// A session connected to the Events service.
#[derive(Debug, Serialize)]
struct EventSessionRow {
    session: String,
    current: &'static str,
    route: Route,
}

/// Render the sessions list at `route`.
///
/// With a `user` parameter this is that user's paged IAM sessions;
/// without one it is every session connected to the Events service,
/// narrowed by `search`.
pub async fn run(route: &Route, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    match route.param("user") {
        Some(user) => user_sessions(user, route, ctx, flags).await,
        None => event_sessions(route, ctx, flags).await,
    }
}

async fn user_sessions(
    user: &str,
    route: &Route,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let iam = &ctx.iam;
    let fetch = move |query: ListQuery| async move { iam.sessions().list(user, &query).await };
    let current = ctx.iam.session_id();
    let listing = listing::load(fetch, route, page_size(route, ctx, flags), |session: Session| {
        SessionRow::new(session, current)
    })
    .await?;
    output(&listing, flags.format)
}

async fn event_sessions(route: &Route, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let listing = match inline(ctx.events.list_sessions().await)? {
        Ok(sessions) => {
            let current = ctx.iam.session_id();
            let rows = matching(sessions, route.param("search"))
                .into_iter()
                .map(|session| EventSessionRow {
                    current: if current == Some(session.as_str()) {
                        "active"
                    } else {
                        ""
                    },
                    route: Route::new(View::Session(session.clone())),
                    session,
                })
                .collect();
            Listing::all(route.clone(), rows)
        }
        Err(message) => Listing::failed(route.clone(), message),
    };
    output(&listing, flags.format)
}

fn matching(sessions: Vec<String>, search: Option<&str>) -> Vec<String> {
    match search.map(str::trim).filter(|term| !term.is_empty()) {
        Some(term) => sessions
            .into_iter()
            .filter(|session| session.contains(term))
            .collect(),
        None => sessions,
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn search_narrows_event_sessions() {
        let sessions = vec!["abc-1".to_string(), "def-2".to_string(), "abc-3".to_string()];
        assert_eq!(matching(sessions.clone(), Some("abc")), vec!["abc-1", "abc-3"]);
        assert_eq!(matching(sessions.clone(), Some(" ")).len(), 3);
        assert_eq!(matching(sessions, None).len(), 3);
    }
}
