use iamc_core::View;

use crate::cli::GlobalFlags;
use crate::commands::shared::inline::inline_unit;
use crate::commands::shared::outcome::Failure;
use crate::commands::topics::list;
use crate::context::AppContext;
use crate::output::output;

pub async fn run(id: &str, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    if let Some(message) = inline_unit(ctx.events.delete_topic(id).await)? {
        return output(&Failure::new(View::Topics, message), flags.format);
    }
    tracing::debug!(id, "topic deleted");

    list::run(Some(id), ctx, flags).await
}
