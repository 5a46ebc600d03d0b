use clap::Subcommand;

use crate::cli::root_commands::ListArgs;

/// Login request commands.
#[derive(Clone, Debug, Subcommand)]
pub enum LoginCommands {
    /// List a user's login requests.
    List {
        #[arg(long)]
        user: String,
        #[command(flatten)]
        list: ListArgs,
    },
    /// Grant a pending login.
    Grant {
        id: String,
        #[arg(long)]
        user: String,
    },
    /// Deny a pending login.
    Deny {
        id: String,
        #[arg(long)]
        user: String,
    },
    /// Delete a login request.
    Delete {
        id: String,
        #[arg(long)]
        user: String,
    },
}
