//! Application layer for the veil membership registry.
//!
//! Owns the mutable UI-facing state: the connected account, the loaded
//! collection, the search/tab selection, and the single transaction
//! status slot. All mutation funnels through [`AppState`]'s named
//! operations and the [`MintOrchestrator`], giving concurrent triggers
//! one well-defined serialization point.

pub mod config;
pub mod error;
pub mod filter;
pub mod orchestrator;
pub mod state;
pub mod status;
pub mod wallet;

pub use config::AppConfig;
pub use error::AppError;
pub use filter::{filter_memberships, tier_stats, MembershipTab, TierStats};
pub use orchestrator::{MintOrchestrator, DEFAULT_BENEFITS};
pub use state::AppState;
pub use status::{StatusSlot, TxStatus};
pub use wallet::{WalletError, WalletProvider};

use std::sync::Arc;
use std::time::Duration;
use veil_fhe::SimulatedFhe;
use veil_ledger::HttpLedgerClient;
use veil_registry::RegistryStore;
use veil_utils::LogFormat;

/// Initialize logging as configured.
pub fn init_logging(config: &AppConfig) {
    veil_utils::init_logging(LogFormat::from_config(&config.log_format), &config.log_level);
}

/// Wire up a production orchestrator from configuration.
///
/// The ledger is reached through the configured HTTP gateway and the
/// encryption capability is the shipped simulation; swapping in a real
/// scheme means passing a different capability to [`RegistryStore::new`].
pub fn build_orchestrator(config: &AppConfig) -> Result<Arc<MintOrchestrator>, AppError> {
    let ledger = Arc::new(
        HttpLedgerClient::new(config.gateway_url.clone())
            .map_err(|e| AppError::Config(e.to_string()))?,
    );
    let fhe = Arc::new(SimulatedFhe::new());
    let registry = Arc::new(RegistryStore::new(ledger, fhe.clone(), fhe));
    let status = StatusSlot::with_holds(
        Duration::from_millis(config.status_success_hold_ms),
        Duration::from_millis(config.status_error_hold_ms),
    );
    Ok(Arc::new(MintOrchestrator::new(registry, status)))
}
