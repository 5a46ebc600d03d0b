use iamc_client::ServerFrame;
use iamc_core::entities::ChatEvent;
use iamc_core::{Route, View, topics};
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::commands::shared::inline::inline;
use crate::commands::shared::listing::Listing;
use crate::commands::shared::stream::{self, StreamBounds};
use crate::context::AppContext;
use crate::output::output;

#[derive(Debug, Serialize)]
struct ChatRow {
    name: Option<String>,
    id: String,
    route: Route,
}

impl From<ChatEvent> for ChatRow {
    fn from(event: ChatEvent) -> Self {
        Self {
            name: event.data.name,
            route: Route::new(View::Chat(event.id.clone())),
            id: event.id,
        }
    }
}

/// Whether a chat announcement is the chat `key`, by event id, chat id or
/// name.
fn is_chat(event: &ChatEvent, key: &str) -> bool {
    event.id == key
        || event.data.id.as_deref() == Some(key)
        || event.data.name.as_deref() == Some(key)
}

fn chat_event(frame: ServerFrame) -> Option<ChatEvent> {
    let ServerFrame::Publish { topic, event } = frame else {
        return None;
    };
    if topic != topics::CHATS {
        return None;
    }
    match event.decode::<ChatEvent>() {
        Ok(chat) => Some(chat),
        Err(error) => {
            tracing::warn!(%error, id = %event.id, "skipping malformed chat event");
            None
        }
    }
}

/// Replay and stream the chats topic, optionally only the chat `key`.
pub async fn run(
    key: Option<&str>,
    bounds: StreamBounds,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let route = Route::new(key.map_or(View::Chats, |key| View::Chat(key.to_string())));
    let mut socket = match inline(stream::open_topic(&ctx.events, topics::CHATS).await)? {
        Ok(socket) => socket,
        Err(message) => return output(&Listing::<ChatRow>::failed(route, message), flags.format),
    };

    let streamed = stream::collect(&mut socket, bounds, flags, |frame| {
        chat_event(frame)
            .filter(|event| key.is_none_or(|key| is_chat(event, key)))
            .map(ChatRow::from)
    })
    .await?;
    socket.close().await;

    stream::finish(route, streamed, flags)
}

#[cfg(test)]
mod tests {
    use iamc_client::TopicEvent;
    use serde_json::json;

    use super::*;

    fn publish(topic: &str, data: serde_json::Value) -> ServerFrame {
        ServerFrame::Publish {
            topic: topic.into(),
            event: TopicEvent {
                id: "e-1".into(),
                prev: None,
                data,
                created: Some("2024-05-01T10:00:00Z".into()),
            },
        }
    }

    #[test]
    fn decodes_chat_announcements() {
        let event = chat_event(publish(topics::CHATS, json!({"id": "c-1", "name": "ops"}))).unwrap();
        assert_eq!(event.id, "e-1");
        assert_eq!(event.data.name.as_deref(), Some("ops"));
        assert!(is_chat(&event, "ops"));
        assert!(is_chat(&event, "c-1"));
        assert!(is_chat(&event, "e-1"));
        assert!(!is_chat(&event, "dev"));
    }

    #[test]
    fn ignores_other_topics_and_frames() {
        assert!(chat_event(publish(topics::ANALYTICS, json!({"path": "/"}))).is_none());
        assert!(chat_event(ServerFrame::Unknown).is_none());
    }
}
