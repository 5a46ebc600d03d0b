mod create;
mod delete;
pub(crate) mod get;
pub(crate) mod list;

use iamc_core::View;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::PolicyCommands;
use crate::commands::shared::listing::list_route;
use crate::context::AppContext;

/// Handle `iamc policies`.
pub async fn handle(
    action: &PolicyCommands,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match action {
        PolicyCommands::List(args) => {
            list::run(&list_route(View::Policies, args, flags)?, ctx, flags).await
        }
        PolicyCommands::Get { id } => get::run(id, ctx, flags).await,
        PolicyCommands::Create {
            name,
            hostname,
            statements,
        } => create::run(name.as_deref(), hostname, statements, ctx, flags).await,
        PolicyCommands::Delete { id, ret } => {
            delete::run(id, ret.return_to.as_deref(), ctx, flags).await
        }
    }
}
