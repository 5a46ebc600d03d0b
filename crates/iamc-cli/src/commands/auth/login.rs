use iamc_core::enums::SessionState;
use iamc_core::{Route, View};
use serde::Serialize;

use super::inline_auth_error;
use crate::cli::GlobalFlags;
use crate::cli::subcommands::AuthLoginArgs;
use crate::context::AppContext;
use crate::output::output;

#[derive(Serialize)]
struct LoginResponse {
    state: SessionState,
    #[serde(skip_serializing_if = "Option::is_none")]
    account: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    session_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    route: Option<Route>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

/// Log in with the given account and secret key.
///
/// Blank fields are sent as-is; the service decides whether they are valid.
/// An existing session is ended first.
pub async fn handle(
    args: &AuthLoginArgs,
    ctx: &mut AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    if ctx.session.state() != SessionState::LoggedOut {
        ctx.session.logout().await?;
    }

    let response = match ctx.session.login(&args.account, &args.secret_key).await {
        Ok(credentials) => LoginResponse {
            state: SessionState::LoggedIn,
            account: Some(credentials.account.clone()),
            session_id: Some(credentials.session_id.clone()),
            route: Some(Route::new(View::Users)),
            error: None,
        },
        Err(error) => LoginResponse {
            state: SessionState::LoggedOut,
            account: None,
            session_id: None,
            route: None,
            error: Some(inline_auth_error(error)?),
        },
    };

    ctx.rebind()?;
    output(&response, flags.format)
}
