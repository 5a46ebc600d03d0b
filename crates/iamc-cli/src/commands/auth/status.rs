use iamc_auth::CredentialStore;
use iamc_core::enums::SessionState;
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;

#[derive(Serialize)]
struct AuthStatusResponse {
    state: SessionState,
    account: Option<String>,
    session_id: Option<String>,
    iam_url: String,
    events_url: String,
    store: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    note: Option<String>,
}

pub fn handle(ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let credentials = ctx.session.credentials();
    let status = AuthStatusResponse {
        state: ctx.session.state(),
        account: credentials.map(|c| c.account.clone()),
        session_id: credentials.map(|c| c.session_id.clone()),
        iam_url: ctx.config.iam.url.clone(),
        events_url: ctx.config.events.url.clone(),
        store: ctx.session.store().describe(),
        note: ctx.notice.clone(),
    };
    output(&status, flags.format)
}
