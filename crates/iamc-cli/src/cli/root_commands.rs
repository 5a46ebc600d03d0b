use clap::{Args, Subcommand};

use crate::cli::subcommands::{
    AuthCommands, ChatCommands, GroupCommands, KeyCommands, LoginCommands, PolicyCommands,
    SessionCommands, TopicCommands, UserCommands,
};

/// Top-level command tree.
#[derive(Clone, Debug, Subcommand)]
pub enum Commands {
    /// Log in, log out, show the stored session.
    Auth {
        #[command(subcommand)]
        action: AuthCommands,
    },
    /// IAM users.
    Users {
        #[command(subcommand)]
        action: UserCommands,
    },
    /// IAM groups.
    Groups {
        #[command(subcommand)]
        action: GroupCommands,
    },
    /// IAM policies.
    Policies {
        #[command(subcommand)]
        action: PolicyCommands,
    },
    /// IAM sessions of a user, or connected Events sessions.
    Sessions {
        #[command(subcommand)]
        action: SessionCommands,
    },
    /// Login requests awaiting approval.
    Logins {
        #[command(subcommand)]
        action: LoginCommands,
    },
    /// User public keys.
    Keys {
        #[command(subcommand)]
        action: KeyCommands,
    },
    /// Events topics.
    Topics {
        #[command(subcommand)]
        action: TopicCommands,
    },
    /// Chats announced on the chats topic.
    Chats {
        #[command(subcommand)]
        action: ChatCommands,
    },
    /// Stream page-view analytics.
    Pageviews(StreamArgs),
    /// Render the view behind a route, e.g. `/users?offset=20`.
    Open(OpenArgs),
}

/// Query parameters shared by every paged list.
#[derive(Clone, Debug, Default, Args)]
pub struct ListArgs {
    /// First item to show.
    #[arg(long)]
    pub offset: Option<u64>,
    #[arg(long)]
    pub search: Option<String>,
    /// Field to sort by.
    #[arg(long)]
    pub sort: Option<String>,
    /// asc or desc
    #[arg(long)]
    pub order: Option<String>,
}

/// Bounds for views that stream socket events.
#[derive(Clone, Debug, Args)]
pub struct StreamArgs {
    /// Stop after this many records.
    #[arg(long)]
    pub max: Option<usize>,
    /// Stop after this many seconds without a new record.
    #[arg(long, default_value_t = 5)]
    pub timeout: u64,
}

/// Where a delete navigates afterwards.
#[derive(Clone, Debug, Default, Args)]
pub struct ReturnArgs {
    /// List route to reload after the delete, e.g. `/users?offset=50&limit=50`.
    #[arg(long)]
    pub return_to: Option<String>,
}

/// Arguments for `iamc open`.
#[derive(Clone, Debug, Args)]
pub struct OpenArgs {
    pub route: String,
    #[command(flatten)]
    pub stream: StreamArgs,
}
