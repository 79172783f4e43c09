//! The wallet/account collaborator.

use async_trait::async_trait;
use thiserror::Error;
use tokio::sync::watch;
use veil_types::AccountAddress;

#[derive(Debug, Error)]
pub enum WalletError {
    #[error("connection rejected")]
    Rejected,

    #[error("wallet provider error: {0}")]
    Provider(String),
}

/// External wallet provider: connection plus account-change notification.
///
/// Account changes are observed through a `watch` channel — only the
/// latest account matters, intermediate switches may be skipped. A
/// change must trigger a collection reload and must never trigger a
/// mint (see `MintOrchestrator::spawn_account_watcher`).
#[async_trait]
pub trait WalletProvider: Send + Sync {
    /// Negotiate a connection; resolves to the selected account.
    async fn connect(&self) -> Result<AccountAddress, WalletError>;

    /// Subscribe to account changes. `None` means disconnected.
    fn subscribe(&self) -> watch::Receiver<Option<AccountAddress>>;
}
