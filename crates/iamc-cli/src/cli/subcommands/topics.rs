use clap::Subcommand;

/// Topic commands.
#[derive(Clone, Debug, Subcommand)]
pub enum TopicCommands {
    /// List topics.
    List,
    /// Show a topic.
    Get { id: String },
    /// Create a topic with a generated id.
    Create {
        #[arg(long)]
        broadcast: bool,
        #[arg(long)]
        log_events: bool,
    },
    /// Delete a topic.
    Delete { id: String },
}
