use iamc_core::entities::{Group, Policy};
use iamc_core::{IdentityKind, ListQuery, Route, View};

use crate::cli::GlobalFlags;
use crate::commands::shared::inline::{inline, inline_unit};
use crate::commands::shared::outcome::Failure;
use crate::commands::shared::relations::candidates;
use crate::commands::users::get;
use crate::context::AppContext;
use crate::output::output;

/// Add the user to `group`, or list the groups it could join.
pub async fn add_group(
    id: &str,
    group: Option<&str>,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let Some(group) = group else {
        let user = match inline(ctx.iam.users().get(id).await)? {
            Ok(user) => user,
            Err(message) => return output(&Failure::new(user_view(id), message), flags.format),
        };
        let iam = &ctx.iam;
        let fetch = move |query: ListQuery| async move { iam.groups().list(&query).await };
        let listed = candidates(
            user_route(id),
            fetch,
            |group: &Group| group.to_ref(),
            &user.groups,
            IdentityKind::Group,
        )
        .await?;
        return output(&listed, flags.format);
    };

    let result = ctx.iam.groups().add_member(group, id).await;
    finish(id, inline_unit(result)?, ctx, flags).await
}

pub async fn remove_group(
    id: &str,
    group: &str,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let result = ctx.iam.groups().remove_member(group, id).await;
    finish(id, inline_unit(result)?, ctx, flags).await
}

/// Attach `policy`, or list the policies not yet attached.
pub async fn attach_policy(
    id: &str,
    policy: Option<&str>,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let Some(policy) = policy else {
        let user = match inline(ctx.iam.users().get(id).await)? {
            Ok(user) => user,
            Err(message) => return output(&Failure::new(user_view(id), message), flags.format),
        };
        let iam = &ctx.iam;
        let fetch = move |query: ListQuery| async move { iam.policies().list(&query).await };
        let listed = candidates(
            user_route(id),
            fetch,
            |policy: &Policy| policy.to_ref(),
            &user.policies,
            IdentityKind::Policy,
        )
        .await?;
        return output(&listed, flags.format);
    };

    let result = ctx.iam.users().attach_policy(id, policy).await;
    finish(id, inline_unit(result)?, ctx, flags).await
}

pub async fn detach_policy(
    id: &str,
    policy: &str,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let result = ctx.iam.users().detach_policy(id, policy).await;
    finish(id, inline_unit(result)?, ctx, flags).await
}

/// Show the refreshed user, or the error that stopped the action.
async fn finish(
    id: &str,
    error: Option<String>,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match error {
        Some(message) => output(&Failure::new(user_view(id), message), flags.format),
        None => get::run(id, ctx, flags).await,
    }
}

fn user_view(id: &str) -> View {
    View::User(id.to_string())
}

fn user_route(id: &str) -> Route {
    Route::new(user_view(id))
}
