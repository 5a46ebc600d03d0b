use clap::Subcommand;

use crate::cli::root_commands::StreamArgs;

/// Chat commands.
#[derive(Clone, Debug, Subcommand)]
pub enum ChatCommands {
    /// Replay and stream announced chats.
    List(StreamArgs),
    /// Show the chats announced with this id or name.
    Get {
        id: String,
        #[command(flatten)]
        stream: StreamArgs,
    },
    /// Announce a new chat.
    Create { name: String },
    /// Delete a chat announcement.
    Delete { id: String },
}
