use iamc_core::entities::NewTopic;
use iamc_core::route::CreateForm;
use iamc_core::{Route, View};
use serde::Serialize;
use uuid::Uuid;

use crate::cli::GlobalFlags;
use crate::commands::shared::inline::inline;
use crate::context::AppContext;
use crate::output::output;

#[derive(Debug, Serialize)]
struct CreateTopicResponse {
    route: Route,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    id: Option<String>,
}

/// Create a topic under a fresh v4 id and print the id.
pub async fn run(
    broadcast: bool,
    log_events: bool,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let topic = NewTopic {
        id: Uuid::new_v4().to_string(),
        broadcast,
        log_events,
    };

    let response = match inline(ctx.events.create_topic(&topic).await)? {
        Ok(created) => CreateTopicResponse {
            route: Route::new(View::Topic(created.id.clone())),
            error: None,
            id: Some(created.id),
        },
        Err(message) => CreateTopicResponse {
            route: Route::new(View::Create(CreateForm::Topic)),
            error: Some(message),
            id: None,
        },
    };
    output(&response, flags.format)
}
