mod create;
mod delete;
pub(crate) mod list;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::ChatCommands;
use crate::commands::shared::stream::StreamBounds;
use crate::context::AppContext;

/// Handle `iamc chats`.
pub async fn handle(
    action: &ChatCommands,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match action {
        ChatCommands::List(stream) => list::run(None, StreamBounds::from(stream), ctx, flags).await,
        ChatCommands::Get { id, stream } => {
            list::run(Some(id.as_str()), StreamBounds::from(stream), ctx, flags).await
        }
        ChatCommands::Create { name } => create::run(name, ctx, flags).await,
        ChatCommands::Delete { id } => delete::run(id, ctx, flags).await,
    }
}
