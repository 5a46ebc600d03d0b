use anyhow::Context;
use iamc_config::IamcConfig;

/// Load `.env` from the working directory, then the layered config.
pub fn load_config() -> anyhow::Result<IamcConfig> {
    load_dotenv()?;
    IamcConfig::load().context("failed to load iamc configuration")
}

fn load_dotenv() -> anyhow::Result<()> {
    let cwd = std::env::current_dir().context("failed to determine current directory")?;
    let env_path = cwd.join(".env");
    if env_path.exists() {
        dotenvy::from_path(&env_path)
            .with_context(|| format!("failed to load dotenv file at {}", env_path.display()))?;
        tracing::debug!(path = %env_path.display(), "loaded dotenv");
    }
    Ok(())
}
