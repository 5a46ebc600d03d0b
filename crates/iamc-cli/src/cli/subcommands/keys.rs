use clap::Subcommand;

/// Public key commands.
#[derive(Clone, Debug, Subcommand)]
pub enum KeyCommands {
    /// Delete one of a user's public keys.
    Delete {
        key: String,
        #[arg(long)]
        user: String,
    },
}
