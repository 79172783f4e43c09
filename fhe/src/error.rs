use thiserror::Error;

#[derive(Debug, Error)]
pub enum FheError {
    #[error("encryption failed: {0}")]
    Encrypt(String),

    #[error("verifier failure: {0}")]
    Verifier(String),
}
