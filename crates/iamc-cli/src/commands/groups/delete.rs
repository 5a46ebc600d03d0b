use iamc_core::View;

use crate::cli::GlobalFlags;
use crate::commands::groups::list;
use crate::commands::shared::inline::inline_unit;
use crate::commands::shared::listing::return_route;
use crate::commands::shared::outcome::Failure;
use crate::context::AppContext;
use crate::output::output;

/// Delete a group, then show the groups list.
pub async fn run(
    id: &str,
    return_to: Option<&str>,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    if let Some(message) = inline_unit(ctx.iam.groups().delete(id).await)? {
        return output(&Failure::new(View::Group(id.to_string()), message), flags.format);
    }
    tracing::debug!(id, "group deleted");

    list::run(&return_route(return_to, View::Groups), ctx, flags).await
}
