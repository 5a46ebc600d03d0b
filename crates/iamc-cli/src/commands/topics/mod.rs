mod create;
mod delete;
pub(crate) mod get;
pub(crate) mod list;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::TopicCommands;
use crate::context::AppContext;

/// Handle `iamc topics`.
pub async fn handle(
    action: &TopicCommands,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match action {
        TopicCommands::List => list::run(None, ctx, flags).await,
        TopicCommands::Get { id } => get::run(id, ctx, flags).await,
        TopicCommands::Create {
            broadcast,
            log_events,
        } => create::run(*broadcast, *log_events, ctx, flags).await,
        TopicCommands::Delete { id } => delete::run(id, ctx, flags).await,
    }
}
