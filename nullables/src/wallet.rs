//! Nullable wallet — a preset account plus a drivable account channel.

use async_trait::async_trait;
use tokio::sync::watch;
use veil_app::{WalletError, WalletProvider};
use veil_types::AccountAddress;

/// A wallet provider for testing.
///
/// `connect` always succeeds with the preset account (unless told to
/// reject), and tests drive account-change notifications directly
/// through [`NullWallet::emit_account`].
pub struct NullWallet {
    account: AccountAddress,
    reject_connect: bool,
    tx: watch::Sender<Option<AccountAddress>>,
}

impl NullWallet {
    pub fn new(account: impl Into<String>) -> Self {
        let (tx, _) = watch::channel(None);
        Self {
            account: AccountAddress::new(account),
            reject_connect: false,
            tx,
        }
    }

    /// A wallet whose `connect` always fails.
    pub fn rejecting() -> Self {
        let mut wallet = Self::new("0xNULL");
        wallet.reject_connect = true;
        wallet
    }

    /// Push an account change to all subscribers.
    pub fn emit_account(&self, account: Option<AccountAddress>) {
        let _ = self.tx.send(account);
    }
}

#[async_trait]
impl WalletProvider for NullWallet {
    async fn connect(&self) -> Result<AccountAddress, WalletError> {
        if self.reject_connect {
            return Err(WalletError::Rejected);
        }
        self.tx.send_replace(Some(self.account.clone()));
        Ok(self.account.clone())
    }

    fn subscribe(&self) -> watch::Receiver<Option<AccountAddress>> {
        self.tx.subscribe()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_connect_reports_preset_account() {
        let wallet = NullWallet::new("0xAA");
        let account = wallet.connect().await.unwrap();
        assert_eq!(account.as_str(), "0xAA");
    }

    #[tokio::test]
    async fn test_rejecting_wallet() {
        let wallet = NullWallet::rejecting();
        assert!(wallet.connect().await.is_err());
    }

    #[tokio::test]
    async fn test_emit_account_reaches_subscribers() {
        let wallet = NullWallet::new("0xAA");
        let mut rx = wallet.subscribe();
        wallet.emit_account(Some(AccountAddress::new("0xBB")));
        rx.changed().await.unwrap();
        assert_eq!(rx.borrow().as_ref().unwrap().as_str(), "0xBB");
    }
}
