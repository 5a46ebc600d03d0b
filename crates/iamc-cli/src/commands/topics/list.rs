use iamc_core::entities::Topic;
use iamc_core::{Route, View};
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::commands::shared::inline::inline;
use crate::commands::shared::listing::Listing;
use crate::context::AppContext;
use crate::output::output;

#[derive(Debug, Serialize)]
struct TopicRow {
    id: String,
    broadcast: bool,
    log_events: bool,
    created_at: Option<String>,
    route: Route,
}

impl From<Topic> for TopicRow {
    fn from(topic: Topic) -> Self {
        Self {
            route: Route::new(View::Topic(topic.id.clone())),
            id: topic.id,
            broadcast: topic.broadcast,
            log_events: topic.log_events,
            created_at: topic.created_at,
        }
    }
}

/// Render every topic, leaving out `removed` if the service still lists it.
pub async fn run(removed: Option<&str>, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let route = Route::new(View::Topics);
    let listing = match inline(ctx.events.list_topics().await)? {
        Ok(topics) => Listing::all(route, without(topics, removed)),
        Err(message) => Listing::failed(route, message),
    };
    output(&listing, flags.format)
}

fn without(topics: Vec<Topic>, removed: Option<&str>) -> Vec<TopicRow> {
    topics
        .into_iter()
        .filter(|topic| removed != Some(topic.id.as_str()))
        .map(TopicRow::from)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn topic(id: &str) -> Topic {
        Topic {
            id: id.into(),
            ..Topic::default()
        }
    }

    #[test]
    fn deleted_topic_is_dropped_locally() {
        let rows = without(vec![topic("a"), topic("b")], Some("a"));
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].id, "b");
        assert_eq!(rows[0].route.to_string(), "/topics/b");
    }
}
