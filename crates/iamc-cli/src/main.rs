use clap::Parser;
use tracing_subscriber::EnvFilter;

mod bootstrap;
mod cli;
mod commands;
mod context;
mod output;
mod ui;

/// Overrides the level chosen by `--quiet` / `--verbose`, e.g.
/// `IAMC_LOG=iamc_client=debug`.
const LOG_ENV: &str = "IAMC_LOG";

#[tokio::main]
async fn main() {
    if let Err(error) = run().await {
        eprintln!("iamc error: {error:#}");
        std::process::exit(1);
    }
}

async fn run() -> anyhow::Result<()> {
    let cli = cli::Cli::parse();
    let flags = cli.global_flags();
    init_tracing(&flags)?;
    ui::init(&flags);

    let config = bootstrap::load_config()?;
    let mut ctx = context::AppContext::init(config).await?;
    tracing::debug!(state = %ctx.session.state(), "session ready");

    commands::dispatch::dispatch(cli.command, &mut ctx, &flags).await
}

/// Log to stderr so stdout only ever carries command output.
fn init_tracing(flags: &cli::GlobalFlags) -> anyhow::Result<()> {
    let fallback = match (flags.quiet, flags.verbose) {
        (true, _) => "error",
        (false, true) => "debug",
        (false, false) => "warn",
    };
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(fallback));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|error| anyhow::anyhow!("failed to initialize tracing subscriber: {error}"))
}
