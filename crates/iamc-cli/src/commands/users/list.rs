use iamc_core::entities::User;
use iamc_core::{ListQuery, Route, View};
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::commands::shared::listing::{self, page_size};
use crate::context::AppContext;
use crate::output::output;

#[derive(Debug, Serialize)]
struct UserRow {
    user: String,
    id: String,
    groups: usize,
    policies: usize,
    route: Route,
}

impl From<User> for UserRow {
    fn from(user: User) -> Self {
        Self {
            user: user.identifier(),
            groups: user.groups.len(),
            policies: user.policies.len(),
            route: Route::new(View::User(user.id.clone())),
            id: user.id,
        }
    }
}

/// Render the users list at `route`.
pub async fn run(route: &Route, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let iam = &ctx.iam;
    let fetch = move |query: ListQuery| async move { iam.users().list(&query).await };
    let listing = listing::load(fetch, route, page_size(route, ctx, flags), UserRow::from).await?;
    output(&listing, flags.format)
}
