mod auth;
mod chats;
mod groups;
mod keys;
mod logins;
mod policies;
mod sessions;
mod topics;
mod users;

pub use auth::{AuthCommands, AuthLoginArgs};
pub use chats::ChatCommands;
pub use groups::GroupCommands;
pub use keys::KeyCommands;
pub use logins::LoginCommands;
pub use policies::PolicyCommands;
pub use sessions::SessionCommands;
pub use topics::TopicCommands;
pub use users::UserCommands;
