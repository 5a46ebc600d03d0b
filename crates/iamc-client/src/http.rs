//! Shared HTTP plumbing for the service clients.
//!
//! Centralizes base-URL joining, auth headers, status checks and body
//! decoding so the per-resource modules only describe paths and payloads.

use iamc_config::HttpConfig;
use iamc_core::Credentials;
use reqwest::{Method, RequestBuilder};
use serde::de::DeserializeOwned;
use serde::Serialize;
use url::Url;

use crate::error::ClientError;

/// Header carrying the session id alongside the bearer token.
pub const SESSION_ID_HEADER: &str = "x-session-id";

/// Header carrying the account the session belongs to.
pub const ACCOUNT_HEADER: &str = "x-account";

/// A reqwest client bound to one service base URL.
#[derive(Debug, Clone)]
pub(crate) struct Transport {
    http: reqwest::Client,
    base_url: Url,
}

impl Transport {
    pub(crate) fn new(base_url: &str, config: &HttpConfig) -> Result<Self, ClientError> {
        let base_url = Url::parse(base_url).map_err(|e| ClientError::InvalidUrl {
            url: base_url.to_string(),
            reason: e.to_string(),
        })?;
        let http = reqwest::Client::builder()
            .user_agent(config.user_agent.as_str())
            .timeout(config.timeout())
            .build()?;
        Ok(Self { http, base_url })
    }

    pub(crate) const fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// `base_url` with `path` appended to whatever path the base already has.
    pub(crate) fn url(&self, path: &str) -> Result<Url, ClientError> {
        let joined = format!(
            "{}/{}",
            self.base_url.as_str().trim_end_matches('/'),
            path.trim_start_matches('/')
        );
        Url::parse(&joined).map_err(|e| ClientError::InvalidUrl {
            url: joined,
            reason: e.to_string(),
        })
    }

    pub(crate) fn request(
        &self,
        method: Method,
        path: &str,
        credentials: Option<&Credentials>,
    ) -> Result<RequestBuilder, ClientError> {
        self.request_with_query(method, path, &[], credentials)
    }

    pub(crate) fn request_with_query(
        &self,
        method: Method,
        path: &str,
        query: &[(&str, String)],
        credentials: Option<&Credentials>,
    ) -> Result<RequestBuilder, ClientError> {
        let mut url = self.url(path)?;
        if !query.is_empty() {
            url.query_pairs_mut()
                .extend_pairs(query.iter().map(|(k, v)| (*k, v.as_str())));
        }
        tracing::debug!(%method, %url, "request");
        let builder = self.http.request(method, url);
        Ok(match credentials {
            Some(creds) => authorize(builder, creds),
            None => builder,
        })
    }

    /// Send a request and decode its JSON body.
    pub(crate) async fn json<T: DeserializeOwned>(
        &self,
        builder: RequestBuilder,
    ) -> Result<T, ClientError> {
        let resp = check_response(builder.send().await?).await?;
        read_json(resp).await
    }

    /// Send a request and discard its body.
    pub(crate) async fn empty(&self, builder: RequestBuilder) -> Result<(), ClientError> {
        check_response(builder.send().await?).await?;
        Ok(())
    }
}

fn authorize(builder: RequestBuilder, creds: &Credentials) -> RequestBuilder {
    builder
        .bearer_auth(&creds.session_token)
        .header(SESSION_ID_HEADER, &creds.session_id)
        .header(ACCOUNT_HEADER, &creds.account)
}

/// Attach a JSON body when one is given.
pub(crate) fn with_body<B: Serialize + ?Sized>(
    builder: RequestBuilder,
    body: Option<&B>,
) -> RequestBuilder {
    match body {
        Some(body) => builder.json(body),
        None => builder,
    }
}

/// Percent-encode one path segment.
pub(crate) fn seg(raw: &str) -> String {
    urlencoding::encode(raw).into_owned()
}

/// Check an HTTP response for a non-success status.
///
/// Returns the response unchanged on success. Otherwise returns
/// [`ClientError::Api`] carrying the body's `error` field, or
/// `request failed with status code N` when the body has none.
pub async fn check_response(resp: reqwest::Response) -> Result<reqwest::Response, ClientError> {
    let status = resp.status();
    if status.is_success() {
        return Ok(resp);
    }
    let body = resp.text().await.unwrap_or_default();
    Err(ClientError::Api {
        status: status.as_u16(),
        message: error_message(status.as_u16(), &body),
    })
}

fn error_message(status: u16, body: &str) -> String {
    serde_json::from_str::<serde_json::Value>(body)
        .ok()
        .and_then(|v| v.get("error").and_then(|e| e.as_str()).map(str::to_string))
        .filter(|message| !message.is_empty())
        .unwrap_or_else(|| format!("request failed with status code {status}"))
}

/// Decode a JSON body; an empty body decodes as `null`.
pub(crate) async fn read_json<T: DeserializeOwned>(
    resp: reqwest::Response,
) -> Result<T, ClientError> {
    let text = resp.text().await?;
    let text = if text.trim().is_empty() { "null" } else { &text };
    serde_json::from_str(text).map_err(|e| ClientError::Decode(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mock_response(status: u16, body: &str) -> reqwest::Response {
        reqwest::Response::from(
            ::http::Response::builder()
                .status(status)
                .body(body.to_string())
                .unwrap(),
        )
    }

    #[tokio::test]
    async fn success_passes_through() {
        let resp = check_response(mock_response(200, "{}")).await.unwrap();
        assert_eq!(resp.status(), 200);
    }

    #[tokio::test]
    async fn service_error_field_becomes_message() {
        let err = check_response(mock_response(409, r#"{"error":"group exists"}"#))
            .await
            .unwrap_err();
        match err {
            ClientError::Api { status, message } => {
                assert_eq!(status, 409);
                assert_eq!(message, "group exists");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[tokio::test]
    async fn missing_error_field_falls_back_to_status() {
        let err = check_response(mock_response(502, "<html>bad gateway</html>"))
            .await
            .unwrap_err();
        assert_eq!(
            err.inline_message().as_deref(),
            Some("request failed with status code 502")
        );
    }

    #[tokio::test]
    async fn empty_body_reads_as_null() {
        let value: serde_json::Value = read_json(mock_response(204, "")).await.unwrap();
        assert!(value.is_null());
    }

    #[tokio::test]
    async fn malformed_body_is_a_decode_error() {
        let err = read_json::<Vec<String>>(mock_response(200, "{"))
            .await
            .unwrap_err();
        assert!(matches!(err, ClientError::Decode(_)));
    }

    #[test]
    fn url_keeps_base_path() {
        let transport = Transport::new("http://localhost:9000/api/", &HttpConfig::default()).unwrap();
        assert_eq!(
            transport.url("/users/a%40x.io").unwrap().as_str(),
            "http://localhost:9000/api/users/a%40x.io"
        );
    }
}
