use clap::Subcommand;

use crate::cli::root_commands::{ListArgs, ReturnArgs};

/// User commands.
#[derive(Clone, Debug, Subcommand)]
pub enum UserCommands {
    /// List users.
    List(ListArgs),
    /// Show a user with groups, policies, keys, logins and sessions.
    Get { id: String },
    /// Create a user and print its key pair once.
    Create {
        #[arg(long)]
        email: Option<String>,
    },
    /// Delete a user.
    Delete {
        id: String,
        #[command(flatten)]
        ret: ReturnArgs,
    },
    /// Change a user's name.
    SetName { id: String, name: String },
    /// Change a user's email.
    SetEmail { id: String, email: String },
    /// Add the user to a group. Without a group, list the candidates.
    AddGroup { id: String, group: Option<String> },
    /// Remove the user from a group.
    RemoveGroup { id: String, group: String },
    /// Attach a policy. Without a policy, list the candidates.
    AttachPolicy { id: String, policy: Option<String> },
    /// Detach a policy.
    DetachPolicy { id: String, policy: String },
}
