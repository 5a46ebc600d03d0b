//! Events service endpoints.

use serde::{Deserialize, Serialize};

fn default_url() -> String {
    "https://events.mtaylor.io".to_string()
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct EventsConfig {
    /// Base URL of the Events HTTP API.
    #[serde(default = "default_url")]
    pub url: String,

    /// Event socket URL. Derived from `url` when empty.
    #[serde(default)]
    pub socket_url: String,
}

impl Default for EventsConfig {
    fn default() -> Self {
        Self {
            url: default_url(),
            socket_url: String::new(),
        }
    }
}

impl EventsConfig {
    /// The configured socket URL, or `url` with its scheme swapped to
    /// `ws`/`wss` and `/ws` appended.
    #[must_use]
    pub fn socket_url(&self) -> String {
        if !self.socket_url.is_empty() {
            return self.socket_url.clone();
        }
        let base = self.url.trim_end_matches('/');
        let swapped = if let Some(rest) = base.strip_prefix("https://") {
            format!("wss://{rest}")
        } else if let Some(rest) = base.strip_prefix("http://") {
            format!("ws://{rest}")
        } else {
            base.to_string()
        };
        format!("{swapped}/ws")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn socket_url_is_derived_from_https() {
        let config = EventsConfig::default();
        assert_eq!(config.socket_url(), "wss://events.mtaylor.io/ws");
    }

    #[test]
    fn socket_url_is_derived_from_http_with_trailing_slash() {
        let config = EventsConfig {
            url: "http://localhost:8080/".into(),
            socket_url: String::new(),
        };
        assert_eq!(config.socket_url(), "ws://localhost:8080/ws");
    }

    #[test]
    fn explicit_socket_url_wins() {
        let config = EventsConfig {
            url: "https://events.example".into(),
            socket_url: "wss://socket.example/live".into(),
        };
        assert_eq!(config.socket_url(), "wss://socket.example/live");
    }
}
