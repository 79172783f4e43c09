//! Nullable infrastructure for deterministic testing.
//!
//! The external collaborators (remote ledger, wallet provider) are
//! abstracted behind traits. This crate provides test-friendly
//! implementations that:
//! - Return deterministic values
//! - Can be controlled programmatically (availability, injected failures)
//! - Never touch the filesystem or network
//!
//! Usage: swap real implementations for nullables in tests.

pub mod ledger;
pub mod wallet;

pub use ledger::NullLedger;
pub use wallet::NullWallet;
