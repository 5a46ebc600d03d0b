use iamc_core::entities::Policy;
use iamc_core::{ListQuery, Route, View};
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::commands::shared::listing::{self, page_size};
use crate::context::AppContext;
use crate::output::output;

#[derive(Debug, Serialize)]
struct PolicyRow {
    policy: String,
    id: String,
    hostname: String,
    statements: usize,
    route: Route,
}

impl From<Policy> for PolicyRow {
    fn from(policy: Policy) -> Self {
        Self {
            policy: policy.identifier(),
            statements: policy.statements.len(),
            route: Route::new(View::Policy(policy.id.clone())),
            hostname: policy.hostname,
            id: policy.id,
        }
    }
}

pub async fn run(route: &Route, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let iam = &ctx.iam;
    let fetch = move |query: ListQuery| async move { iam.policies().list(&query).await };
    let listing = listing::load(fetch, route, page_size(route, ctx, flags), PolicyRow::from).await?;
    output(&listing, flags.format)
}
