//! Read-models for the entities owned by the IAM and Events services.
//!
//! All structs use the services' camelCase field names on the wire and
//! tolerate missing optional fields.

mod chat;
mod group;
mod login;
mod pageview;
mod policy;
mod session;
mod topic;
mod user;

pub use chat::{ChatData, ChatEvent};
pub use group::Group;
pub use login::LoginRequest;
pub use pageview::PageView;
pub use policy::{NewPolicy, Policy, Rule};
pub use session::Session;
pub use topic::{NewTopic, Topic};
pub use user::{Principal, PublicKey, User, UserUpdate};
