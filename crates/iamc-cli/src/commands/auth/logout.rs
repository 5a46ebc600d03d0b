use iamc_core::enums::SessionState;
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;

#[derive(Serialize)]
struct LogoutResponse {
    state: SessionState,
}

pub async fn handle(ctx: &mut AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    ctx.session.logout().await?;
    ctx.rebind()?;
    output(
        &LogoutResponse {
            state: ctx.session.state(),
        },
        flags.format,
    )
}
