pub mod auth;
pub mod chats;
pub mod dispatch;
pub mod groups;
pub mod keys;
pub mod logins;
pub mod open;
pub mod pageviews;
pub mod policies;
pub mod sessions;
pub mod shared;
pub mod topics;
pub mod users;
