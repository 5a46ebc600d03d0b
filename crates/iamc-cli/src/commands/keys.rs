use iamc_core::View;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::KeyCommands;
use crate::commands::shared::inline::inline_unit;
use crate::commands::shared::outcome::Failure;
use crate::commands::users;
use crate::context::AppContext;
use crate::output::output;

/// Handle `iamc keys`.
pub async fn handle(
    action: &KeyCommands,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match action {
        KeyCommands::Delete { key, user } => {
            match inline_unit(ctx.iam.public_keys().delete(key, user).await)? {
                Some(message) => {
                    output(&Failure::new(View::User(user.clone()), message), flags.format)
                }
                None => users::get::run(user, ctx, flags).await,
            }
        }
    }
}
