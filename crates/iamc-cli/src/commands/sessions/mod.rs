mod chat;
mod delete;
pub(crate) mod get;
pub(crate) mod list;

use iamc_core::View;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::SessionCommands;
use crate::commands::shared::listing::list_route;
use crate::commands::shared::stream::StreamBounds;
use crate::context::AppContext;

/// Handle `iamc sessions`.
pub async fn handle(
    action: &SessionCommands,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match action {
        SessionCommands::List { user, list } => {
            let route = list_route(View::Sessions, list, flags)?
                .with_optional_param("user", user.as_deref());
            list::run(&route, ctx, flags).await
        }
        SessionCommands::Get { id, user } => get::run(id, user.as_deref(), ctx, flags).await,
        SessionCommands::Delete { id, user } => delete::run(id, user, ctx, flags).await,
        SessionCommands::Chat {
            id,
            message,
            stream,
        } => chat::run(id, message.as_deref(), StreamBounds::from(stream), ctx, flags).await,
    }
}
