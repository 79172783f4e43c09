//! The transaction status slot.

use std::sync::{Arc, Mutex};
use std::time::Duration;
use tokio::task::JoinHandle;

/// How long a success notice stays visible before auto-dismissing.
const SUCCESS_HOLD: Duration = Duration::from_secs(2);

/// How long an error notice stays visible. Errors hold longer so the
/// member has time to read what went wrong.
const ERROR_HOLD: Duration = Duration::from_secs(3);

/// Lifecycle of the most recent user-triggered operation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TxStatus {
    Idle,
    Pending(String),
    Success(String),
    Error(String),
}

/// Single shared status slot with timed auto-reset.
///
/// One transaction is tracked system-wide: a `start` from any state
/// overwrites whatever was there. This assumes serialized user actions —
/// two operations in flight at once will clobber each other's messages.
/// Known limitation, kept deliberately.
///
/// `resolve` schedules a delayed reset back to `Idle`; any later
/// transition aborts the scheduled reset first, so a stale timer can
/// never clobber a newer state. Must be used inside a tokio runtime.
pub struct StatusSlot {
    state: Arc<Mutex<TxStatus>>,
    reset: Mutex<Option<JoinHandle<()>>>,
    success_hold: Duration,
    error_hold: Duration,
}

impl StatusSlot {
    pub fn new() -> Self {
        Self::with_holds(SUCCESS_HOLD, ERROR_HOLD)
    }

    /// Construct with explicit hold intervals (tests shrink them).
    pub fn with_holds(success_hold: Duration, error_hold: Duration) -> Self {
        Self {
            state: Arc::new(Mutex::new(TxStatus::Idle)),
            reset: Mutex::new(None),
            success_hold,
            error_hold,
        }
    }

    /// The current status.
    pub fn current(&self) -> TxStatus {
        self.state.lock().unwrap().clone()
    }

    /// Begin tracking a new transaction.
    pub fn start(&self, message: impl Into<String>) {
        self.cancel_reset();
        *self.state.lock().unwrap() = TxStatus::Pending(message.into());
    }

    /// Record the transaction outcome and schedule the auto-reset.
    pub fn resolve(&self, success: bool, message: impl Into<String>) {
        self.cancel_reset();
        let message = message.into();
        let (next, hold) = if success {
            (TxStatus::Success(message), self.success_hold)
        } else {
            (TxStatus::Error(message), self.error_hold)
        };
        *self.state.lock().unwrap() = next;

        let state = Arc::clone(&self.state);
        let handle = tokio::spawn(async move {
            tokio::time::sleep(hold).await;
            *state.lock().unwrap() = TxStatus::Idle;
        });
        *self.reset.lock().unwrap() = Some(handle);
    }

    fn cancel_reset(&self) {
        if let Some(handle) = self.reset.lock().unwrap().take() {
            handle.abort();
        }
    }
}

impl Default for StatusSlot {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for StatusSlot {
    fn drop(&mut self) {
        self.cancel_reset();
    }
}
