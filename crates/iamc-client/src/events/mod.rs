//! Client for the Events service.
//!
//! The HTTP side is a generic [`EventsClient::request`] plus typed helpers
//! for the endpoints the console uses. Live traffic goes over an
//! [`EventSocket`].

mod socket;

pub use socket::{ClientFrame, EventSocket, Peer, ServerFrame, TopicEvent};

use iamc_config::IamcConfig;
use iamc_core::Credentials;
use iamc_core::entities::{NewTopic, Topic};
use reqwest::Method;
use serde::Deserialize;
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::error::ClientError;
use crate::http::{Transport, seg, with_body};

#[derive(Deserialize)]
struct TopicsEnvelope {
    #[serde(default)]
    topics: Vec<Topic>,
}

#[derive(Deserialize)]
struct TopicEnvelope {
    topic: Topic,
}

#[derive(Deserialize)]
struct SessionsEnvelope {
    #[serde(default)]
    sessions: Vec<String>,
}

#[derive(Deserialize)]
struct SessionOwner {
    user: String,
}

/// Events client. Holds the IAM session credentials once logged in.
#[derive(Debug, Clone)]
pub struct EventsClient {
    transport: Transport,
    socket_url: String,
    credentials: Option<Credentials>,
}

impl EventsClient {
    /// # Errors
    ///
    /// Returns [`ClientError::InvalidUrl`] for a bad `events.url` and
    /// [`ClientError::Http`] if the reqwest client cannot be built.
    pub fn new(config: &IamcConfig) -> Result<Self, ClientError> {
        Ok(Self {
            transport: Transport::new(&config.events.url, &config.http)?,
            socket_url: config.events.socket_url(),
            credentials: None,
        })
    }

    #[must_use]
    pub fn with_credentials(mut self, credentials: Credentials) -> Self {
        self.credentials = Some(credentials);
        self
    }

    #[must_use]
    pub fn socket_url(&self) -> &str {
        &self.socket_url
    }

    /// Send an arbitrary request and return the decoded JSON body.
    ///
    /// An empty response body is returned as `Value::Null`.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Api`] for a non-success status.
    pub async fn request(
        &self,
        method: Method,
        path: &str,
        query: &[(&str, String)],
        body: Option<&Value>,
    ) -> Result<Value, ClientError> {
        self.typed(method, path, query, body).await
    }

    async fn typed<T: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        query: &[(&str, String)],
        body: Option<&Value>,
    ) -> Result<T, ClientError> {
        let builder =
            self.transport
                .request_with_query(method, path, query, self.credentials.as_ref())?;
        self.transport.json(with_body(builder, body)).await
    }

    /// # Errors
    ///
    /// Returns [`ClientError`] on transport or decode failure.
    pub async fn list_topics(&self) -> Result<Vec<Topic>, ClientError> {
        let envelope: TopicsEnvelope = self.typed(Method::GET, "/topics", &[], None).await?;
        Ok(envelope.topics)
    }

    /// # Errors
    ///
    /// Returns [`ClientError::Api`] with status 404 for an unknown topic.
    pub async fn get_topic(&self, id: &str) -> Result<Topic, ClientError> {
        self.typed(Method::GET, &topic_path(id), &[], None).await
    }

    /// # Errors
    ///
    /// Returns [`ClientError`] on transport or decode failure.
    pub async fn create_topic(&self, topic: &NewTopic) -> Result<Topic, ClientError> {
        let body =
            serde_json::to_value(topic).map_err(|e| ClientError::Unexpected(e.to_string()))?;
        let envelope: TopicEnvelope = self
            .typed(Method::POST, "/topics", &[], Some(&body))
            .await?;
        Ok(envelope.topic)
    }

    /// # Errors
    ///
    /// Returns [`ClientError`] on transport failure.
    pub async fn delete_topic(&self, id: &str) -> Result<(), ClientError> {
        self.request(Method::DELETE, &topic_path(id), &[], None)
            .await
            .map(drop)
    }

    /// Turn on broadcasting of published events to subscribers.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError`] on transport failure.
    pub async fn enable_broadcast(&self, id: &str) -> Result<(), ClientError> {
        self.topic_action(id, "broadcast").await
    }

    /// Turn on persistence of published events so they can be replayed.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError`] on transport failure.
    pub async fn enable_log_events(&self, id: &str) -> Result<(), ClientError> {
        self.topic_action(id, "log-events").await
    }

    /// Allow sessions to both publish to and receive from the topic.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError`] on transport failure.
    pub async fn enable_send_receive(&self, id: &str) -> Result<(), ClientError> {
        self.topic_action(id, "send-receive").await
    }

    async fn topic_action(&self, id: &str, action: &str) -> Result<(), ClientError> {
        let path = format!("{}/{action}", topic_path(id));
        self.request(Method::POST, &path, &[], None).await.map(drop)
    }

    /// Delete one logged event from a topic.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError`] on transport failure.
    pub async fn delete_event(&self, topic_id: &str, event_id: &str) -> Result<(), ClientError> {
        let path = format!("{}/events/{}", topic_path(topic_id), seg(event_id));
        self.request(Method::DELETE, &path, &[], None)
            .await
            .map(drop)
    }

    /// Ids of the sessions currently connected to the Events service.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError`] on transport or decode failure.
    pub async fn list_sessions(&self) -> Result<Vec<String>, ClientError> {
        let envelope: SessionsEnvelope = self.typed(Method::GET, "/sessions", &[], None).await?;
        Ok(envelope.sessions)
    }

    /// Id of the user that owns an Events session.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Api`] with status 404 for an unknown session.
    pub async fn session_owner(&self, session_id: &str) -> Result<String, ClientError> {
        let owner: SessionOwner = self
            .typed(Method::GET, &format!("/session/{}", seg(session_id)), &[], None)
            .await?;
        Ok(owner.user)
    }

    /// Open the event socket with this client's credentials.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Socket`] when the handshake fails.
    pub async fn connect(&self) -> Result<EventSocket, ClientError> {
        EventSocket::connect(&self.socket_url, self.credentials.as_ref()).await
    }
}

fn topic_path(id: &str) -> String {
    format!("/topics/{}", seg(id))
}
