use iamc_core::entities::{Policy, Rule};
use iamc_core::{Route, View};
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::commands::shared::inline::inline;
use crate::context::AppContext;
use crate::output::output;

#[derive(Debug, Serialize)]
struct PolicyDetail {
    route: Route,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    hostname: Option<String>,
    statements: Vec<Rule>,
}

impl PolicyDetail {
    fn loaded(route: Route, policy: Policy) -> Self {
        Self {
            route,
            error: None,
            id: Some(policy.id),
            name: policy.name,
            hostname: Some(policy.hostname),
            statements: policy.statements,
        }
    }

    fn failed(route: Route, message: String) -> Self {
        Self {
            route,
            error: Some(message),
            id: None,
            name: None,
            hostname: None,
            statements: Vec::new(),
        }
    }
}

pub async fn run(id: &str, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let route = Route::new(View::Policy(id.to_string()));
    let detail = match inline(ctx.iam.policies().get(id).await)? {
        Ok(policy) => PolicyDetail::loaded(route, policy),
        Err(message) => PolicyDetail::failed(route, message),
    };
    output(&detail, flags.format)
}
