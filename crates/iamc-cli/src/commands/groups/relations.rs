use iamc_core::entities::{Policy, User};
use iamc_core::{IdentityKind, ListQuery, Route, View};

use crate::cli::GlobalFlags;
use crate::commands::groups::get;
use crate::commands::shared::inline::{inline, inline_unit};
use crate::commands::shared::outcome::Failure;
use crate::commands::shared::relations::candidates;
use crate::context::AppContext;
use crate::output::output;

/// Add `user` to the group, or list the users not yet in it.
pub async fn add_member(
    id: &str,
    user: Option<&str>,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let Some(user) = user else {
        let group = match inline(ctx.iam.groups().get(id).await)? {
            Ok(group) => group,
            Err(message) => return output(&Failure::new(group_view(id), message), flags.format),
        };
        let iam = &ctx.iam;
        let fetch = move |query: ListQuery| async move { iam.users().list(&query).await };
        let listed = candidates(
            Route::new(group_view(id)),
            fetch,
            |user: &User| user.to_ref(),
            &group.users,
            IdentityKind::User,
        )
        .await?;
        return output(&listed, flags.format);
    };

    let result = ctx.iam.groups().add_member(id, user).await;
    finish(id, inline_unit(result)?, ctx, flags).await
}

pub async fn remove_member(
    id: &str,
    user: &str,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let result = ctx.iam.groups().remove_member(id, user).await;
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
        let group = match inline(ctx.iam.groups().get(id).await)? {
            Ok(group) => group,
            Err(message) => return output(&Failure::new(group_view(id), message), flags.format),
        };
        let iam = &ctx.iam;
        let fetch = move |query: ListQuery| async move { iam.policies().list(&query).await };
        let listed = candidates(
            Route::new(group_view(id)),
            fetch,
            |policy: &Policy| policy.to_ref(),
            &group.policies,
            IdentityKind::Policy,
        )
        .await?;
        return output(&listed, flags.format);
    };

    let result = ctx.iam.groups().attach_policy(id, policy).await;
    finish(id, inline_unit(result)?, ctx, flags).await
}

pub async fn detach_policy(
    id: &str,
    policy: &str,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let result = ctx.iam.groups().detach_policy(id, policy).await;
    finish(id, inline_unit(result)?, ctx, flags).await
}

async fn finish(
    id: &str,
    error: Option<String>,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match error {
        Some(message) => output(&Failure::new(group_view(id), message), flags.format),
        None => get::run(id, ctx, flags).await,
    }
}

fn group_view(id: &str) -> View {
    View::Group(id.to_string())
}
