mod create;
mod delete;
mod edit;
pub(crate) mod get;
pub(crate) mod list;
mod relations;

use iamc_core::View;
use iamc_core::route::UserField;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::UserCommands;
use crate::commands::shared::listing::list_route;
use crate::context::AppContext;

/// Handle `iamc users`.
pub async fn handle(
    action: &UserCommands,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match action {
        UserCommands::List(args) => list::run(&list_route(View::Users, args, flags)?, ctx, flags).await,
        UserCommands::Get { id } => get::run(id, ctx, flags).await,
        UserCommands::Create { email } => create::run(email.as_deref(), ctx, flags).await,
        UserCommands::Delete { id, ret } => {
            delete::run(id, ret.return_to.as_deref(), ctx, flags).await
        }
        UserCommands::SetName { id, name } => edit::run(id, UserField::Name, name, ctx, flags).await,
        UserCommands::SetEmail { id, email } => {
            edit::run(id, UserField::Email, email, ctx, flags).await
        }
        UserCommands::AddGroup { id, group } => {
            relations::add_group(id, group.as_deref(), ctx, flags).await
        }
        UserCommands::RemoveGroup { id, group } => {
            relations::remove_group(id, group, ctx, flags).await
        }
        UserCommands::AttachPolicy { id, policy } => {
            relations::attach_policy(id, policy.as_deref(), ctx, flags).await
        }
        UserCommands::DetachPolicy { id, policy } => {
            relations::detach_policy(id, policy, ctx, flags).await
        }
    }
}
