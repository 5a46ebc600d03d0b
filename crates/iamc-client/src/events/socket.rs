//! Event socket over WebSocket.
//!
//! Frames are JSON objects tagged by `type`. The console sends `subscribe`,
//! `replay`, `publish` and direct `message` frames and reads `publish`
//! (topic events) and `message` (direct session messages) frames back.

use futures_util::{SinkExt, StreamExt};
use iamc_core::Credentials;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tokio::net::TcpStream;
use tokio_tungstenite::tungstenite::Message;
use tokio_tungstenite::tungstenite::client::IntoClientRequest;
use tokio_tungstenite::tungstenite::http::HeaderValue;
use tokio_tungstenite::{MaybeTlsStream, WebSocketStream};

use crate::error::ClientError;
use crate::http::{ACCOUNT_HEADER, SESSION_ID_HEADER};

/// One end of a direct message, addressed by session id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Peer {
    pub session: String,
}

/// Frames sent by the console.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum ClientFrame {
    Subscribe { topic: String },
    Replay { topic: String },
    Publish { topic: String, data: Value },
    Message {
        message: String,
        sender: Peer,
        recipient: Peer,
    },
}

/// An event published on a topic.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TopicEvent {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prev: Option<String>,
    #[serde(default)]
    pub data: Value,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created: Option<String>,
}

impl TopicEvent {
    /// Decode the whole event (id, data, timestamps) into `T`.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Decode`] when the event does not match `T`.
    pub fn decode<T: DeserializeOwned>(&self) -> Result<T, ClientError> {
        let value = serde_json::to_value(self).map_err(|e| ClientError::Decode(e.to_string()))?;
        serde_json::from_value(value).map_err(|e| ClientError::Decode(e.to_string()))
    }

    /// Decode only the event payload into `T`.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Decode`] when the payload does not match `T`.
    pub fn decode_data<T: DeserializeOwned>(&self) -> Result<T, ClientError> {
        serde_json::from_value(self.data.clone()).map_err(|e| ClientError::Decode(e.to_string()))
    }
}

/// Frames received from the service.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum ServerFrame {
    Publish {
        topic: String,
        event: TopicEvent,
    },
    Message {
        message: String,
        #[serde(default)]
        sender: Option<Peer>,
    },
    #[serde(other)]
    Unknown,
}

/// A connected event socket.
pub struct EventSocket {
    stream: WebSocketStream<MaybeTlsStream<TcpStream>>,
}

impl EventSocket {
    /// Connect to `url`, authenticating with `credentials` when given.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Socket`] when the URL is invalid or the
    /// handshake fails.
    pub async fn connect(url: &str, credentials: Option<&Credentials>) -> Result<Self, ClientError> {
        let mut request = url
            .into_client_request()
            .map_err(|e| ClientError::Socket(e.to_string()))?;
        if let Some(creds) = credentials {
            let headers = request.headers_mut();
            headers.insert("authorization", header(&format!("Bearer {}", creds.session_token))?);
            headers.insert(SESSION_ID_HEADER, header(&creds.session_id)?);
            headers.insert(ACCOUNT_HEADER, header(&creds.account)?);
        }

        tracing::debug!(url, "connecting event socket");
        let (stream, _resp) = tokio_tungstenite::connect_async(request)
            .await
            .map_err(|e| ClientError::Socket(e.to_string()))?;
        Ok(Self { stream })
    }

    /// # Errors
    ///
    /// Returns [`ClientError::Socket`] if the frame cannot be sent.
    pub async fn subscribe(&mut self, topic: &str) -> Result<(), ClientError> {
        self.send(&ClientFrame::Subscribe {
            topic: topic.to_string(),
        })
        .await
    }

    /// Ask the service to resend the topic's logged events.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Socket`] if the frame cannot be sent.
    pub async fn replay(&mut self, topic: &str) -> Result<(), ClientError> {
        self.send(&ClientFrame::Replay {
            topic: topic.to_string(),
        })
        .await
    }

    /// # Errors
    ///
    /// Returns [`ClientError::Socket`] if the frame cannot be sent.
    pub async fn publish(&mut self, topic: &str, data: Value) -> Result<(), ClientError> {
        self.send(&ClientFrame::Publish {
            topic: topic.to_string(),
            data,
        })
        .await
    }

    /// Send a direct message from one session to another.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Socket`] if the frame cannot be sent.
    pub async fn send_message(
        &mut self,
        from_session: &str,
        to_session: &str,
        message: &str,
    ) -> Result<(), ClientError> {
        self.send(&ClientFrame::Message {
            message: message.to_string(),
            sender: Peer {
                session: from_session.to_string(),
            },
            recipient: Peer {
                session: to_session.to_string(),
            },
        })
        .await
    }

    /// # Errors
    ///
    /// Returns [`ClientError::Socket`] if the frame cannot be sent.
    pub async fn send(&mut self, frame: &ClientFrame) -> Result<(), ClientError> {
        let text = serde_json::to_string(frame).map_err(|e| ClientError::Unexpected(e.to_string()))?;
        self.stream
            .send(Message::Text(text))
            .await
            .map_err(|e| ClientError::Socket(e.to_string()))
    }

    /// Next data frame, or `None` once the service closes the socket.
    ///
    /// Control frames are skipped; text that is not JSON is reported as a
    /// direct message so nothing the service sends is silently dropped.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Socket`] on a read failure.
    pub async fn next_frame(&mut self) -> Result<Option<ServerFrame>, ClientError> {
        while let Some(message) = self.stream.next().await {
            let message = message.map_err(|e| ClientError::Socket(e.to_string()))?;
            match message {
                Message::Text(text) => return Ok(Some(parse_frame(&text))),
                Message::Close(_) => return Ok(None),
                _ => {}
            }
        }
        Ok(None)
    }

    /// Close the socket, ignoring errors from an already-closed peer.
    pub async fn close(mut self) {
        if let Err(e) = self.stream.close(None).await {
            tracing::debug!(%e, "event socket close");
        }
    }
}

fn parse_frame(text: &str) -> ServerFrame {
    serde_json::from_str(text).unwrap_or_else(|_| ServerFrame::Message {
        message: text.to_string(),
        sender: None,
    })
}

fn header(value: &str) -> Result<HeaderValue, ClientError> {
    HeaderValue::from_str(value).map_err(|e| ClientError::Socket(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use iamc_core::entities::{ChatEvent, PageView};
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn direct_message_frame_shape() {
        let frame = ClientFrame::Message {
            message: "hi".into(),
            sender: Peer {
                session: "s-me".into(),
            },
            recipient: Peer {
                session: "s-you".into(),
            },
        };
        assert_eq!(
            serde_json::to_value(&frame).unwrap(),
            json!({
                "type": "message",
                "message": "hi",
                "sender": {"session": "s-me"},
                "recipient": {"session": "s-you"},
            })
        );
    }

    #[test]
    fn publish_frame_shape() {
        let frame = ClientFrame::Publish {
            topic: "t".into(),
            data: json!({"id": "c-1", "name": "general"}),
        };
        assert_eq!(
            serde_json::to_value(&frame).unwrap(),
            json!({"type": "publish", "topic": "t", "data": {"id": "c-1", "name": "general"}})
        );
    }

    #[test]
    fn chat_event_decodes_from_publish_frame() {
        let frame = parse_frame(
            r#"{"type":"publish","topic":"t","event":{"id":"e-1","data":{"id":"c-1","name":"general"},"created":"2024-01-01T00:00:00Z"}}"#,
        );
        let ServerFrame::Publish { event, .. } = frame else {
            panic!("expected publish frame");
        };
        let chat: ChatEvent = event.decode().unwrap();
        assert_eq!(chat.id, "e-1");
        assert_eq!(chat.data.name.as_deref(), Some("general"));
    }

    #[test]
    fn page_view_decodes_from_event_data() {
        let event = TopicEvent {
            id: "e-2".into(),
            prev: None,
            data: json!({"path": "/about", "referrer": "https://x.io"}),
            created: None,
        };
        let view: PageView = event.decode_data().unwrap();
        assert_eq!(view.path, "/about");
        assert_eq!(view.referrer, "https://x.io");
    }

    #[test]
    fn unknown_frame_types_are_tolerated() {
        assert_eq!(parse_frame(r#"{"type":"pong"}"#), ServerFrame::Unknown);
    }

    #[test]
    fn plain_text_becomes_a_message() {
        assert_eq!(
            parse_frame("hello there"),
            ServerFrame::Message {
                message: "hello there".into(),
                sender: None,
            }
        );
    }
}
