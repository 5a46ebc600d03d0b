use anyhow::Context;
use iamc_auth::{CredentialStore, SessionManager};
use iamc_client::{EventsClient, IamClient};
use iamc_config::IamcConfig;
use iamc_core::Credentials;
use iamc_core::enums::SessionState;

pub type Session = SessionManager<IamClient, Box<dyn CredentialStore>>;

/// Shared application resources, rebuilt whenever the session changes.
pub struct AppContext {
    pub config: IamcConfig,
    pub session: Session,
    pub iam: IamClient,
    pub events: EventsClient,
    /// Set when the stored session could not be restored.
    pub notice: Option<String>,
}

impl AppContext {
    /// Open the credential store, rehydrate a stored session and build the
    /// service clients for it.
    pub async fn init(config: IamcConfig) -> anyhow::Result<Self> {
        let iam = IamClient::new(&config).context("failed to build IAM client")?;
        let events = EventsClient::new(&config).context("failed to build Events client")?;
        let store = iamc_auth::open_store(&config.storage)?;
        let mut session =
            SessionManager::new(iam.clone(), store).context("failed to read stored session")?;

        let mut notice = None;
        if session.state() == SessionState::Rehydrating {
            let outcome = session
                .rehydrate()
                .await
                .context("failed to restore the stored session")?;
            if let Some(message) = &outcome.notice {
                tracing::warn!(%message, "stored session could not be refreshed; logged out");
            }
            notice = outcome.notice;
        }

        let mut ctx = Self {
            config,
            session,
            iam,
            events,
            notice,
        };
        ctx.rebind()?;
        Ok(ctx)
    }

    /// Rebuild the clients for the current session credentials.
    pub fn rebind(&mut self) -> anyhow::Result<()> {
        let iam = IamClient::new(&self.config).context("failed to build IAM client")?;
        let events = EventsClient::new(&self.config).context("failed to build Events client")?;
        (self.iam, self.events) = match self.session.credentials() {
            Some(credentials) => (
                iam.with_credentials(credentials.clone()),
                events.with_credentials(credentials.clone()),
            ),
            None => (iam, events),
        };
        Ok(())
    }

    /// Credentials of the logged-in session, or an error telling the user to
    /// log in.
    pub fn require_login(&self) -> anyhow::Result<&Credentials> {
        self.session.require_logged_in().map_err(|error| match &self.notice {
            Some(notice) => anyhow::anyhow!("{error} (session restore failed: {notice})"),
            None => anyhow::Error::from(error),
        })
    }
}
