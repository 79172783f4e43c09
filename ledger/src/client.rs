//! The abstract ledger client trait.

use crate::error::LedgerError;
use async_trait::async_trait;

/// Narrow get/set interface onto the remote key/value ledger.
///
/// The ledger offers no transactions and no list queries; reconstructing
/// anything larger than a single record is the caller's problem (see
/// `veil-registry`). Implementations must be safe to share behind an
/// `Arc` across tasks.
#[async_trait]
pub trait LedgerClient: Send + Sync {
    /// Whether the backend is ready to serve reads and writes.
    async fn is_available(&self) -> Result<bool, LedgerError>;

    /// Read the bytes stored under `key`.
    ///
    /// An absent key yields an empty vec, not an error.
    async fn get_data(&self, key: &str) -> Result<Vec<u8>, LedgerError>;

    /// Write `value` under `key`, awaiting confirmation.
    ///
    /// `Ok(())` means the write is confirmed. Fails with
    /// [`LedgerError::UserRejected`] when the user declines to sign, or
    /// [`LedgerError::Network`] when the write cannot be confirmed.
    async fn set_data(&self, key: &str, value: &[u8]) -> Result<(), LedgerError>;
}
