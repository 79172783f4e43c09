use thiserror::Error;

#[derive(Debug, Error)]
pub enum LedgerError {
    #[error("ledger is not available")]
    Unavailable,

    #[error("transaction rejected by user")]
    UserRejected,

    #[error("network error: {0}")]
    Network(String),

    #[error("invalid ledger response: {0}")]
    InvalidResponse(String),
}
