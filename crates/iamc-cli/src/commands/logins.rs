//! Login requests: list a user's requests and grant, deny or delete them.
//!
//! Every action returns to the user detail view, where logins are shown.

use iamc_core::{ListQuery, Route, View};

use crate::cli::GlobalFlags;
use crate::cli::root_commands::ListArgs;
use crate::cli::subcommands::LoginCommands;
use crate::commands::shared::inline::inline_unit;
use crate::commands::shared::listing::{self, list_route, page_size};
use crate::commands::shared::outcome::Failure;
use crate::commands::users;
use crate::commands::users::get::LoginRow;
use crate::context::AppContext;
use crate::output::output;

#[derive(Debug, Clone, Copy)]
enum Decision {
    Grant,
    Deny,
    Delete,
}

/// Handle `iamc logins`.
pub async fn handle(
    action: &LoginCommands,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match action {
        LoginCommands::List { user, list } => run_list(user, list, ctx, flags).await,
        LoginCommands::Grant { id, user } => decide(Decision::Grant, id, user, ctx, flags).await,
        LoginCommands::Deny { id, user } => decide(Decision::Deny, id, user, ctx, flags).await,
        LoginCommands::Delete { id, user } => decide(Decision::Delete, id, user, ctx, flags).await,
    }
}

async fn run_list(
    user: &str,
    args: &ListArgs,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let route = list_route(View::User(user.to_string()), args, flags)?;
    let iam = &ctx.iam;
    let fetch = move |query: ListQuery| async move { iam.logins().list(user, &query).await };
    let listing =
        listing::load(fetch, &route, page_size(&route, ctx, flags), LoginRow::from).await?;
    output(&listing, flags.format)
}

async fn decide(
    decision: Decision,
    id: &str,
    user: &str,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let logins = ctx.iam.logins();
    let result = match decision {
        Decision::Grant => logins.grant(id, user).await,
        Decision::Deny => logins.deny(id, user).await,
        Decision::Delete => logins.delete(id, user).await,
    };
    match inline_unit(result)? {
        Some(message) => output(
            &Failure::new(Route::new(View::User(user.to_string())), message),
            flags.format,
        ),
        None => {
            tracing::debug!(id, user, ?decision, "login request updated");
            users::get::run(user, ctx, flags).await
        }
    }
}
