use clap::Subcommand;

use crate::cli::root_commands::{ListArgs, ReturnArgs};

/// Group commands.
#[derive(Clone, Debug, Subcommand)]
pub enum GroupCommands {
    /// List groups.
    List(ListArgs),
    /// Show a group with members and policies.
    Get { id: String },
    /// Create a group.
    Create {
        #[arg(long)]
        name: Option<String>,
    },
    /// Delete a group.
    Delete {
        id: String,
        #[command(flatten)]
        ret: ReturnArgs,
    },
    /// Add a member. Without a user, list the candidates.
    AddMember { id: String, user: Option<String> },
    /// Remove a member.
    RemoveMember { id: String, user: String },
    /// Attach a policy. Without a policy, list the candidates.
    AttachPolicy { id: String, policy: Option<String> },
    /// Detach a policy.
    DetachPolicy { id: String, policy: String },
}
