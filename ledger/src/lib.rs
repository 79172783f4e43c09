//! Remote ledger access.
//!
//! The ledger is the single store of record for memberships, reachable
//! only through availability checks and keyed byte reads/writes. Every
//! backend (the production HTTP gateway, the in-memory null ledger for
//! testing) implements [`LedgerClient`]; the rest of the workspace depends
//! only on the trait.

pub mod client;
pub mod error;
pub mod http;

pub use client::LedgerClient;
pub use error::LedgerError;
pub use http::HttpLedgerClient;
