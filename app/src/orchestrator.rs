//! Mint orchestration — ties the registry store, the status slot, and
//! the application state into the user-facing flows.

use crate::error::AppError;
use crate::state::AppState;
use crate::status::{StatusSlot, TxStatus};
use crate::wallet::WalletProvider;
use std::sync::{Arc, Mutex};
use tokio::task::JoinHandle;
use tracing::{info, warn};
use veil_registry::{MembershipDraft, MintError, RegistryError, RegistryStore};
use veil_types::{AccountAddress, MembershipId, MembershipRecord, Tier};

/// Benefits preselected for a fresh mint draft.
pub const DEFAULT_BENEFITS: [&str; 2] = ["Private Access", "Exclusive Content"];

/// Drives mint, verify, and refresh, reporting progress through the
/// status slot and publishing results into the application state.
pub struct MintOrchestrator {
    registry: Arc<RegistryStore>,
    status: StatusSlot,
    state: Mutex<AppState>,
}

impl MintOrchestrator {
    pub fn new(registry: Arc<RegistryStore>, status: StatusSlot) -> Self {
        Self {
            registry,
            status,
            state: Mutex::new(AppState::new()),
        }
    }

    /// The current transaction status.
    pub fn status(&self) -> TxStatus {
        self.status.current()
    }

    /// Run a closure against the application state.
    ///
    /// The lock is the single serialization point for state mutation; do
    /// not hold the returned values across an await.
    pub fn with_state<R>(&self, f: impl FnOnce(&mut AppState) -> R) -> R {
        f(&mut self.state.lock().unwrap())
    }

    /// Connect through the wallet provider and record the account.
    pub async fn connect(&self, wallet: &dyn WalletProvider) -> Result<AccountAddress, AppError> {
        let account = wallet.connect().await?;
        info!(%account, "wallet connected");
        self.with_state(|s| s.set_account(account.clone()));
        Ok(account)
    }

    /// Reload the collection from the ledger.
    ///
    /// On failure the previous collection is left untouched and the
    /// error is returned as a non-fatal notice.
    pub async fn refresh(&self) -> Result<(), AppError> {
        let memberships = self.registry.load().await?;
        self.with_state(|s| s.replace_memberships(memberships));
        Ok(())
    }

    /// Mint a membership for the connected account.
    pub async fn mint(
        &self,
        tier: Tier,
        benefits: Vec<String>,
    ) -> Result<MembershipRecord, AppError> {
        let owner = self
            .with_state(|s| s.account().cloned())
            .ok_or(AppError::NotConnected)?;

        self.status.start("Encrypting membership level...");
        let draft = MembershipDraft {
            owner,
            tier,
            benefits,
        };
        match self.registry.create(draft).await {
            Ok(outcome) => {
                self.with_state(|s| s.replace_memberships(outcome.memberships));
                self.status.resolve(true, "Membership minted");
                info!(id = %outcome.minted.id, "mint complete");
                Ok(outcome.minted)
            }
            Err(e) => {
                self.status.resolve(false, mint_failure_message(&e));
                Err(e.into())
            }
        }
    }

    /// Verify a membership's proof, reporting the outcome as a status.
    pub async fn verify(&self, id: &MembershipId) -> Result<bool, AppError> {
        self.status.start("Verifying membership proof...");
        match self.registry.verify(id).await {
            Ok(check) => {
                self.status.resolve(check.valid, check.message.clone());
                Ok(check.valid)
            }
            Err(e) => {
                self.status.resolve(false, format!("Verification failed: {e}"));
                Err(e.into())
            }
        }
    }

    /// Watch the wallet's account channel: record each change and reload
    /// the collection. Account changes never mint.
    pub fn spawn_account_watcher(
        self: Arc<Self>,
        wallet: &dyn WalletProvider,
    ) -> JoinHandle<()> {
        let mut rx = wallet.subscribe();
        let this = self;
        tokio::spawn(async move {
            while rx.changed().await.is_ok() {
                let account = rx.borrow_and_update().clone();
                this.with_state(|s| match account {
                    Some(a) => s.set_account(a),
                    None => s.disconnect(),
                });
                if let Err(e) = this.refresh().await {
                    warn!(error = %e, "reload after account change failed");
                }
            }
        })
    }
}

/// Pick the user-facing message for a failed mint.
fn mint_failure_message(err: &RegistryError) -> String {
    match err {
        RegistryError::Mint(MintError::UserRejected) => {
            "Transaction rejected by user".to_string()
        }
        RegistryError::Unavailable => "Membership system is not available".to_string(),
        other => format!("Minting failed: {other}"),
    }
}
