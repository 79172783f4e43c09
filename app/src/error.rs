use crate::wallet::WalletError;
use thiserror::Error;
use veil_registry::RegistryError;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("no wallet account connected")]
    NotConnected,

    #[error(transparent)]
    Registry(#[from] RegistryError),

    #[error(transparent)]
    Wallet(#[from] WalletError),

    #[error("config error: {0}")]
    Config(String),
}
