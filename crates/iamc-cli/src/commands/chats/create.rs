use iamc_core::route::CreateForm;
use iamc_core::{Route, View, topics};
use serde::Serialize;
use serde_json::json;
use uuid::Uuid;

use crate::cli::GlobalFlags;
use crate::commands::shared::inline::inline;
use crate::context::AppContext;
use crate::output::output;

#[derive(Debug, Serialize)]
struct CreateChatResponse {
    route: Route,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    id: Option<String>,
    name: String,
}

/// Announce a chat on the chats topic, making sure the topic broadcasts
/// and keeps its events first.
pub async fn run(name: &str, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let id = Uuid::new_v4().to_string();
    let response = match inline(announce(&id, name, ctx).await)? {
        Ok(()) => CreateChatResponse {
            route: Route::new(View::Chats),
            error: None,
            id: Some(id),
            name: name.to_string(),
        },
        Err(message) => CreateChatResponse {
            route: Route::new(View::Create(CreateForm::Chat)),
            error: Some(message),
            id: None,
            name: name.to_string(),
        },
    };
    output(&response, flags.format)
}

async fn announce(id: &str, name: &str, ctx: &AppContext) -> Result<(), iamc_client::ClientError> {
    ctx.events.enable_broadcast(topics::CHATS).await?;
    ctx.events.enable_log_events(topics::CHATS).await?;

    let mut socket = ctx.events.connect().await?;
    let published = socket
        .publish(topics::CHATS, json!({ "id": id, "name": name }))
        .await;
    socket.close().await;
    published?;
    tracing::debug!(id, name, "chat announced");
    Ok(())
}
