use iamc_client::ClientError;
use iamc_core::enums::SessionState;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AuthError {
    #[error("not authenticated; run `iamc auth login`")]
    NotAuthenticated,

    #[error("cannot go from {from} to {to}")]
    InvalidTransition { from: SessionState, to: SessionState },

    #[error("keyring error: {0}")]
    KeyringError(String),

    #[error("credential store error: {0}")]
    TokenStoreError(String),

    #[error(transparent)]
    Client(#[from] ClientError),
}
