mod create;
mod delete;
pub(crate) mod get;
pub(crate) mod list;
mod relations;

use iamc_core::View;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::GroupCommands;
use crate::commands::shared::listing::list_route;
use crate::context::AppContext;

/// Handle `iamc groups`.
pub async fn handle(
    action: &GroupCommands,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match action {
        GroupCommands::List(args) => {
            list::run(&list_route(View::Groups, args, flags)?, ctx, flags).await
        }
        GroupCommands::Get { id } => get::run(id, ctx, flags).await,
        GroupCommands::Create { name } => create::run(name.as_deref(), ctx, flags).await,
        GroupCommands::Delete { id, ret } => {
            delete::run(id, ret.return_to.as_deref(), ctx, flags).await
        }
        GroupCommands::AddMember { id, user } => {
            relations::add_member(id, user.as_deref(), ctx, flags).await
        }
        GroupCommands::RemoveMember { id, user } => {
            relations::remove_member(id, user, ctx, flags).await
        }
        GroupCommands::AttachPolicy { id, policy } => {
            relations::attach_policy(id, policy.as_deref(), ctx, flags).await
        }
        GroupCommands::DetachPolicy { id, policy } => {
            relations::detach_policy(id, policy, ctx, flags).await
        }
    }
}
