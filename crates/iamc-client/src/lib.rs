//! # iamc-client
//!
//! Thin JSON-over-HTTP bindings for the two services the console talks to:
//! - **IAM** ([`IamClient`]): login/refresh/logout plus per-resource
//!   sub-clients (`users()`, `groups()`, `policies()`, `sessions()`,
//!   `logins()`, `public_keys()`)
//! - **Events** ([`EventsClient`]): a generic `request`, typed topic and
//!   session helpers, and the [`EventSocket`]
//!
//! Every failure is a [`ClientError`]. Callers use
//! [`ClientError::is_transport`] to decide between rendering the message
//! inline and failing the operation.

pub mod events;
pub mod iam;

mod error;
mod http;

pub use error::ClientError;
pub use events::{EventSocket, EventsClient, ServerFrame, TopicEvent};
pub use http::{ACCOUNT_HEADER, SESSION_ID_HEADER, check_response};
pub use iam::{IamClient, SessionGrant};
