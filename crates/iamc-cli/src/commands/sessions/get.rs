use iamc_core::entities::Session;
use iamc_core::{IdentityKind, Route, View};
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::commands::shared::inline::inline;
use crate::commands::shared::relations::RelatedRow;
use crate::context::AppContext;
use crate::output::output;

#[derive(Debug, Serialize)]
struct SessionDetail {
    route: Route,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    expiration: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    user: Option<RelatedRow>,
}

impl SessionDetail {
    fn loaded(route: Route, session: Session) -> Self {
        Self {
            route,
            error: None,
            user: Some(RelatedRow::new(&session.user, IdentityKind::User)),
            expiration: session.expiration.map(|at| at.to_rfc3339()),
            address: Some(session.address),
            id: Some(session.id),
        }
    }

    fn failed(route: Route, message: String) -> Self {
        Self {
            route,
            error: Some(message),
            id: None,
            address: None,
            expiration: None,
            user: None,
        }
    }
}

/// Render a session. Without `user` the owner is looked up through the
/// Events service first.
pub async fn run(
    id: &str,
    user: Option<&str>,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let route = Route::new(View::Session(id.to_string()));
    let owner = match user {
        Some(user) => user.to_string(),
        None => match inline(ctx.events.session_owner(id).await)? {
            Ok(owner) => owner,
            Err(message) => return output(&SessionDetail::failed(route, message), flags.format),
        },
    };

    let detail = match inline(ctx.iam.sessions().get(id, &owner).await)? {
        Ok(session) => SessionDetail::loaded(route, session),
        Err(message) => SessionDetail::failed(route, message),
    };
    output(&detail, flags.format)
}
