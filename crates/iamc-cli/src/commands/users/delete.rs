use iamc_core::View;

use crate::cli::GlobalFlags;
use crate::commands::shared::inline::inline_unit;
use crate::commands::shared::listing::return_route;
use crate::commands::shared::outcome::Failure;
use crate::commands::users::list;
use crate::context::AppContext;
use crate::output::output;

/// Delete a user, then show the users list.
///
/// With `--return-to` that list page is reloaded, stepping back a page when
/// the delete emptied it.
pub async fn run(
    id: &str,
    return_to: Option<&str>,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    if let Some(message) = inline_unit(ctx.iam.users().delete(id).await)? {
        return output(&Failure::new(View::User(id.to_string()), message), flags.format);
    }
    tracing::debug!(id, "user deleted");

    list::run(&return_route(return_to, View::Users), ctx, flags).await
}
