use iamc_client::ServerFrame;
use iamc_core::{Route, View};
use serde::Serialize;

use crate::cli::{GlobalFlags, OutputFormat};
use crate::commands::shared::inline::inline;
use crate::commands::shared::outcome::Failure;
use crate::commands::shared::parse::non_blank;
use crate::commands::shared::stream::{self, StreamBounds};
use crate::context::AppContext;
use crate::output::output;

#[derive(Debug, Serialize)]
struct ChatLine {
    from: Option<String>,
    message: String,
}

#[derive(Debug, Serialize)]
struct ChatTranscript {
    route: Route,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    sent: Option<String>,
    messages: Vec<ChatLine>,
}

/// Send `message` to the session `id` and print direct messages received
/// until the stream bounds are hit.
pub async fn run(
    id: &str,
    message: Option<&str>,
    bounds: StreamBounds,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let mut transcript = ChatTranscript {
        route: Route::new(View::Session(id.to_string())),
        error: None,
        sent: None,
        messages: Vec::new(),
    };

    let mut socket = match inline(ctx.events.connect().await)? {
        Ok(socket) => socket,
        Err(message) => {
            transcript.error = Some(message);
            return output(&transcript, flags.format);
        }
    };

    if let Some(text) = non_blank(message) {
        let from = ctx.require_login()?.session_id.clone();
        if let Err(message) = inline(socket.send_message(&from, id, text).await)? {
            transcript.error = Some(message);
            socket.close().await;
            return output(&transcript, flags.format);
        }
        tracing::debug!(to = id, "direct message sent");
        transcript.sent = Some(text.to_string());
    }

    let streamed = stream::collect(&mut socket, bounds, flags, |frame| match frame {
        ServerFrame::Message { message, sender } => Some(ChatLine {
            from: sender.map(|peer| peer.session),
            message,
        }),
        _ => None,
    })
    .await?;
    socket.close().await;

    if flags.format == OutputFormat::Json {
        transcript.error = streamed.error;
        transcript.messages = streamed.records;
        return output(&transcript, flags.format);
    }
    match streamed.error {
        Some(error) => output(&Failure::new(transcript.route, error), flags.format),
        None => Ok(()),
    }
}
