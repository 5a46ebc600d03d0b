use iamc_core::{IdentityKind, Route, View};
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::commands::shared::inline::inline;
use crate::commands::shared::relations::{RelatedRow, related_rows};
use crate::context::AppContext;
use crate::output::output;

#[derive(Debug, Serialize)]
struct GroupDetail {
    route: Route,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    name: Option<String>,
    users: Vec<RelatedRow>,
    policies: Vec<RelatedRow>,
}

pub async fn run(id: &str, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let route = Route::new(View::Group(id.to_string()));
    let detail = match inline(ctx.iam.groups().get(id).await)? {
        Ok(group) => GroupDetail {
            route,
            error: None,
            users: related_rows(&group.users, IdentityKind::User),
            policies: related_rows(&group.policies, IdentityKind::Policy),
            id: Some(group.id),
            name: group.name,
        },
        Err(message) => GroupDetail {
            route,
            error: Some(message),
            id: None,
            name: None,
            users: Vec::new(),
            policies: Vec::new(),
        },
    };
    output(&detail, flags.format)
}
