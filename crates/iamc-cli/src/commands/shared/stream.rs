use std::time::Duration;

use iamc_client::{ClientError, EventSocket, EventsClient, ServerFrame};
use iamc_core::Route;
use serde::Serialize;

use crate::cli::root_commands::StreamArgs;
use crate::cli::{GlobalFlags, OutputFormat};
use crate::commands::shared::inline::inline;
use crate::commands::shared::listing::Listing;
use crate::commands::shared::outcome::Failure;
use crate::output::{output, output_line};

/// When to stop reading a socket.
#[derive(Debug, Clone, Copy)]
pub struct StreamBounds {
    pub max: Option<usize>,
    pub idle: Duration,
}

impl From<&StreamArgs> for StreamBounds {
    fn from(args: &StreamArgs) -> Self {
        Self {
            max: args.max,
            idle: Duration::from_secs(args.timeout.max(1)),
        }
    }
}

/// Records read from a socket, plus the read error that ended the stream.
#[derive(Debug)]
pub struct Streamed<T> {
    pub records: Vec<T>,
    pub error: Option<String>,
}

/// Connect, subscribe to `topic` and ask for its logged events.
pub async fn open_topic(events: &EventsClient, topic: &str) -> Result<EventSocket, ClientError> {
    let mut socket = events.connect().await?;
    socket.subscribe(topic).await?;
    socket.replay(topic).await?;
    tracing::debug!(topic, "subscribed with replay");
    Ok(socket)
}

/// Read frames until the socket closes, `max` records were accepted, or
/// nothing arrives for `idle`.
///
/// `accept` turns a frame into a record or skips it. In table and raw
/// formats each record is printed as it arrives; JSON callers print the
/// returned list once.
pub async fn collect<T: Serialize>(
    socket: &mut EventSocket,
    bounds: StreamBounds,
    flags: &GlobalFlags,
    mut accept: impl FnMut(ServerFrame) -> Option<T>,
) -> anyhow::Result<Streamed<T>> {
    let mut records = Vec::new();
    let mut error = None;
    while bounds.max.is_none_or(|max| records.len() < max) {
        let frame = match tokio::time::timeout(bounds.idle, socket.next_frame()).await {
            Ok(Ok(Some(frame))) => frame,
            Ok(Ok(None)) => {
                tracing::debug!("event socket closed");
                break;
            }
            Ok(Err(failure)) => {
                error = inline(Err::<(), _>(failure))?.err();
                break;
            }
            Err(_) => {
                tracing::debug!(idle = ?bounds.idle, "event socket idle");
                break;
            }
        };

        if let Some(record) = accept(frame) {
            if flags.format != OutputFormat::Json {
                output_line(&record, flags.format)?;
            }
            records.push(record);
        }
    }
    Ok(Streamed { records, error })
}

/// Finish a streamed list view. JSON prints everything collected at once;
/// the line formats already printed each record and only report a read
/// error.
pub fn finish<T: Serialize>(
    route: Route,
    streamed: Streamed<T>,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    if flags.format == OutputFormat::Json {
        let mut listing = Listing::all(route, streamed.records);
        listing.error = streamed.error;
        return output(&listing, flags.format);
    }
    match streamed.error {
        Some(error) => output(&Failure::new(route, error), flags.format),
        None => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_timeout_is_raised_to_one_second() {
        let bounds = StreamBounds::from(&StreamArgs {
            max: Some(3),
            timeout: 0,
        });
        assert_eq!(bounds.idle, Duration::from_secs(1));
        assert_eq!(bounds.max, Some(3));
    }
}
