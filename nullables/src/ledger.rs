//! Nullable ledger — thread-safe in-memory key/value storage for testing.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Mutex;
use veil_ledger::{LedgerClient, LedgerError};

/// An in-memory ledger for testing.
///
/// Thread-safe for use with tokio's multi-threaded runtime. Every trait
/// operation yields to the scheduler before touching storage, so
/// concurrent callers genuinely interleave at await points the way they
/// would against a remote backend.
pub struct NullLedger {
    data: Mutex<HashMap<String, Vec<u8>>>,
    available: AtomicBool,
    next_write_failure: Mutex<Option<LedgerError>>,
}

impl NullLedger {
    pub fn new() -> Self {
        Self {
            data: Mutex::new(HashMap::new()),
            available: AtomicBool::new(true),
            next_write_failure: Mutex::new(None),
        }
    }

    /// Toggle backend availability.
    pub fn set_available(&self, available: bool) {
        self.available.store(available, Ordering::SeqCst);
    }

    /// Make the next `set_data` call fail with `err`.
    pub fn fail_next_write(&self, err: LedgerError) {
        *self.next_write_failure.lock().unwrap() = Some(err);
    }

    /// Seed a stored value directly, bypassing the trait.
    pub fn insert(&self, key: &str, value: Vec<u8>) {
        self.data.lock().unwrap().insert(key.to_string(), value);
    }

    /// Read a stored value directly, bypassing the trait.
    pub fn get(&self, key: &str) -> Option<Vec<u8>> {
        self.data.lock().unwrap().get(key).cloned()
    }

    /// Number of stored keys.
    pub fn len(&self) -> usize {
        self.data.lock().unwrap().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn check_available(&self) -> Result<(), LedgerError> {
        if self.available.load(Ordering::SeqCst) {
            Ok(())
        } else {
            Err(LedgerError::Unavailable)
        }
    }
}

impl Default for NullLedger {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl LedgerClient for NullLedger {
    async fn is_available(&self) -> Result<bool, LedgerError> {
        tokio::task::yield_now().await;
        Ok(self.available.load(Ordering::SeqCst))
    }

    async fn get_data(&self, key: &str) -> Result<Vec<u8>, LedgerError> {
        tokio::task::yield_now().await;
        self.check_available()?;
        Ok(self.data.lock().unwrap().get(key).cloned().unwrap_or_default())
    }

    async fn set_data(&self, key: &str, value: &[u8]) -> Result<(), LedgerError> {
        tokio::task::yield_now().await;
        self.check_available()?;
        if let Some(err) = self.next_write_failure.lock().unwrap().take() {
            return Err(err);
        }
        self.data
            .lock()
            .unwrap()
            .insert(key.to_string(), value.to_vec());
        Ok(())
    }
}
