use crate::cli::GlobalFlags;
use crate::cli::root_commands::Commands;
use crate::commands;
use crate::context::AppContext;

/// Dispatch a parsed command to the corresponding handler module.
///
/// Everything except `auth` requires a logged-in session.
pub async fn dispatch(
    command: Commands,
    ctx: &mut AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    if !matches!(command, Commands::Auth { .. }) {
        ctx.require_login()?;
    }

    match command {
        Commands::Auth { action } => commands::auth::handle(&action, ctx, flags).await,
        Commands::Users { action } => commands::users::handle(&action, ctx, flags).await,
        Commands::Groups { action } => commands::groups::handle(&action, ctx, flags).await,
        Commands::Policies { action } => commands::policies::handle(&action, ctx, flags).await,
        Commands::Sessions { action } => commands::sessions::handle(&action, ctx, flags).await,
        Commands::Logins { action } => commands::logins::handle(&action, ctx, flags).await,
        Commands::Keys { action } => commands::keys::handle(&action, ctx, flags).await,
        Commands::Topics { action } => commands::topics::handle(&action, ctx, flags).await,
        Commands::Chats { action } => commands::chats::handle(&action, ctx, flags).await,
        Commands::Pageviews(args) => commands::pageviews::handle(&args, ctx, flags).await,
        Commands::Open(args) => commands::open::handle(&args, ctx, flags).await,
    }
}
