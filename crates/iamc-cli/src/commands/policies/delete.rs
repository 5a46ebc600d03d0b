use iamc_core::View;

use crate::cli::GlobalFlags;
use crate::commands::policies::list;
use crate::commands::shared::inline::inline_unit;
use crate::commands::shared::listing::return_route;
use crate::commands::shared::outcome::Failure;
use crate::context::AppContext;
use crate::output::output;

pub async fn run(
    id: &str,
    return_to: Option<&str>,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    if let Some(message) = inline_unit(ctx.iam.policies().delete(id).await)? {
        return output(&Failure::new(View::Policy(id.to_string()), message), flags.format);
    }
    tracing::debug!(id, "policy deleted");

    list::run(&return_route(return_to, View::Policies), ctx, flags).await
}
