use iamc_client::{ClientError, EventSocket, EventsClient, ServerFrame};
use iamc_core::entities::PageView;
use iamc_core::{Route, View, topics};

use crate::cli::GlobalFlags;
use crate::cli::root_commands::StreamArgs;
use crate::commands::shared::inline::inline;
use crate::commands::shared::listing::Listing;
use crate::commands::shared::stream::{self, StreamBounds};
use crate::context::AppContext;
use crate::output::output;

fn page_view(frame: ServerFrame) -> Option<PageView> {
    let ServerFrame::Publish { topic, event } = frame else {
        return None;
    };
    if topic != topics::ANALYTICS {
        return None;
    }
    event
        .decode_data::<PageView>()
        .map_err(|error| tracing::warn!(%error, id = %event.id, "skipping malformed page view"))
        .ok()
}

async fn open_analytics(events: &EventsClient) -> Result<EventSocket, ClientError> {
    events.enable_send_receive(topics::ANALYTICS).await?;
    stream::open_topic(events, topics::ANALYTICS).await
}

/// Stream page views from the analytics topic.
///
/// The topic is switched to send/receive first so this session may read it.
pub async fn handle(args: &StreamArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let route = Route::new(View::PageViews);
    let mut socket = match inline(open_analytics(&ctx.events).await)? {
        Ok(socket) => socket,
        Err(message) => return output(&Listing::<PageView>::failed(route, message), flags.format),
    };

    let streamed = stream::collect(&mut socket, StreamBounds::from(args), flags, page_view).await?;
    socket.close().await;

    stream::finish(route, streamed, flags)
}
