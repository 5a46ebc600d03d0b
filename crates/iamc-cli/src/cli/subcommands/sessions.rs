use clap::Subcommand;

use crate::cli::root_commands::{ListArgs, StreamArgs};

/// Session commands.
#[derive(Clone, Debug, Subcommand)]
pub enum SessionCommands {
    /// List a user's IAM sessions, or connected Events sessions without --user.
    List {
        #[arg(long)]
        user: Option<String>,
        #[command(flatten)]
        list: ListArgs,
    },
    /// Show a session. Without --user the owner is looked up through Events.
    Get {
        id: String,
        #[arg(long)]
        user: Option<String>,
    },
    /// Delete a user's session.
    Delete {
        id: String,
        #[arg(long)]
        user: String,
    },
    /// Send a direct message to a session and print replies.
    Chat {
        id: String,
        #[arg(long)]
        message: Option<String>,
        #[command(flatten)]
        stream: StreamArgs,
    },
}
