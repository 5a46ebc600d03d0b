use iamc_core::View;

use crate::cli::GlobalFlags;
use crate::commands::shared::inline::inline_unit;
use crate::commands::shared::outcome::Failure;
use crate::commands::users;
use crate::context::AppContext;
use crate::output::output;

/// Delete one of a user's sessions, then show the user.
pub async fn run(id: &str, user: &str, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    match inline_unit(ctx.iam.sessions().delete(id, user).await)? {
        Some(message) => output(&Failure::new(View::User(user.to_string()), message), flags.format),
        None => users::get::run(user, ctx, flags).await,
    }
}
