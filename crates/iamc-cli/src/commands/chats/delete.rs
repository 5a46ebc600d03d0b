use iamc_core::{Route, View, topics};
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::commands::shared::inline::inline_unit;
use crate::commands::shared::outcome::Failure;
use crate::context::AppContext;
use crate::output::output;

#[derive(Debug, Serialize)]
struct Deleted<'a> {
    route: Route,
    deleted: &'a str,
}

/// Delete a chat announcement from the chats topic log.
pub async fn run(id: &str, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let route = Route::new(View::Chats);
    match inline_unit(ctx.events.delete_event(topics::CHATS, id).await)? {
        Some(message) => output(&Failure::new(route, message), flags.format),
        None => output(&Deleted { route, deleted: id }, flags.format),
    }
}
