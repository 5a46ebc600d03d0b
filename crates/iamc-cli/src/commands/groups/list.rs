use iamc_core::entities::Group;
use iamc_core::{ListQuery, Route, View};
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::commands::shared::listing::{self, page_size};
use crate::context::AppContext;
use crate::output::output;

#[derive(Debug, Serialize)]
struct GroupRow {
    group: String,
    id: String,
    users: usize,
    policies: usize,
    route: Route,
}

impl From<Group> for GroupRow {
    fn from(group: Group) -> Self {
        Self {
            group: group.identifier(),
            users: group.users.len(),
            policies: group.policies.len(),
            route: Route::new(View::Group(group.id.clone())),
            id: group.id,
        }
    }
}

pub async fn run(route: &Route, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let iam = &ctx.iam;
    let fetch = move |query: ListQuery| async move { iam.groups().list(&query).await };
    let listing = listing::load(fetch, route, page_size(route, ctx, flags), GroupRow::from).await?;
    output(&listing, flags.format)
}
