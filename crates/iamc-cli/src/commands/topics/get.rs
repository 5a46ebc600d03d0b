use iamc_core::entities::Topic;
use iamc_core::{Route, View};
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::commands::shared::inline::inline;
use crate::context::AppContext;
use crate::output::output;

#[derive(Debug, Serialize)]
struct TopicDetail {
    route: Route,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
    #[serde(flatten)]
    topic: Option<Topic>,
}

pub async fn run(id: &str, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let route = Route::new(View::Topic(id.to_string()));
    let (topic, error) = match inline(ctx.events.get_topic(id).await)? {
        Ok(topic) => (Some(topic), None),
        Err(message) => (None, Some(message)),
    };
    output(&TopicDetail { route, error, topic }, flags.format)
}
