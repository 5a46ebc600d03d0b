use clap::{Args, Subcommand};

/// Session commands.
#[derive(Clone, Debug, Subcommand)]
pub enum AuthCommands {
    /// Start a session and store its credentials.
    Login(AuthLoginArgs),
    /// End the session and clear stored credentials.
    Logout,
    /// Show the stored session.
    Status,
}

#[derive(Clone, Debug, Args)]
pub struct AuthLoginArgs {
    /// Account id or email.
    #[arg(long, default_value = "")]
    pub account: String,
    /// Secret key issued with the account.
    #[arg(long, default_value = "")]
    pub secret_key: String,
}
