use thiserror::Error;

/// Failure of a single encode/decode against the stored wire format.
///
/// Decode failures are isolated per record during a load; they are logged
/// and the record skipped, never aborting the whole operation.
#[derive(Debug, Error)]
pub enum CodecError {
    #[error("malformed stored JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid stored field: {0}")]
    InvalidField(String),
}

/// Why a mint did not go through.
#[derive(Debug, Error)]
pub enum MintError {
    #[error("transaction rejected by user")]
    UserRejected,

    #[error("ledger write failed: {0}")]
    RemoteWriteFailed(String),

    #[error("{0}")]
    Unknown(String),
}

/// Operation-boundary errors of the registry store.
///
/// Each variant is distinguishable so the orchestrator can choose the
/// right user-facing message. None of these are fatal; they terminate at
/// the operation boundary and become a status notice.
#[derive(Debug, Error)]
pub enum RegistryError {
    #[error("membership system is not available")]
    Unavailable,

    #[error("minting failed: {0}")]
    Mint(#[from] MintError),

    #[error("verification failed: {0}")]
    Verify(String),
}
