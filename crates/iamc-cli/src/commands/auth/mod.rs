mod login;
mod logout;
mod status;

use iamc_auth::AuthError;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::AuthCommands;
use crate::context::AppContext;

/// Handle `iamc auth <subcommand>`.
pub async fn handle(
    action: &AuthCommands,
    ctx: &mut AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match action {
        AuthCommands::Login(args) => login::handle(args, ctx, flags).await,
        AuthCommands::Logout => logout::handle(ctx, flags).await,
        AuthCommands::Status => status::handle(ctx, flags),
    }
}

/// The message to show for a service failure, or the error itself.
fn inline_auth_error(error: AuthError) -> anyhow::Result<String> {
    match error {
        AuthError::Client(client) => match client.inline_message() {
            Some(message) => Ok(message),
            None => Err(AuthError::Client(client).into()),
        },
        other => Err(other.into()),
    }
}
