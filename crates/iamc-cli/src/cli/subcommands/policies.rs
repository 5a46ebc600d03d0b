use clap::Subcommand;

use crate::cli::root_commands::{ListArgs, ReturnArgs};

/// Policy commands.
#[derive(Clone, Debug, Subcommand)]
pub enum PolicyCommands {
    /// List policies.
    List(ListArgs),
    /// Show a policy and its statements.
    Get { id: String },
    /// Create a policy.
    Create {
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        hostname: String,
        /// ACTION:EFFECT:RESOURCE, repeatable. A bare RESOURCE means Read:Allow.
        #[arg(long = "statement")]
        statements: Vec<String>,
    },
    /// Delete a policy.
    Delete {
        id: String,
        #[command(flatten)]
        ret: ReturnArgs,
    },
}
