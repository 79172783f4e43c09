//! Pluggable encryption and proof-verification capabilities.
//!
//! The registry never performs cryptography itself; it hands the tier
//! selection to an [`Encryptor`] and proofs to a [`ProofVerifier`] and
//! treats everything that comes back as opaque. The shipped
//! [`SimulatedFhe`] implementation is an explicit stand-in — swapping in a
//! real scheme touches nothing outside this crate.

pub mod error;
pub mod sim;

pub use error::FheError;
pub use sim::SimulatedFhe;

use async_trait::async_trait;
use veil_types::Tier;

/// The opaque artifacts produced by encrypting a tier selection.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EncryptedTier {
    /// Ciphertext label stored as the membership's level.
    pub label: String,
    /// Proof artifact accompanying the ciphertext.
    pub proof: String,
}

/// Outcome of checking a membership proof.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ProofCheck {
    pub valid: bool,
    /// Human-readable outcome, surfaced as a status message.
    pub message: String,
}

/// Encrypts a tier selection into an opaque label and proof.
#[async_trait]
pub trait Encryptor: Send + Sync {
    async fn encrypt(&self, tier: Tier) -> Result<EncryptedTier, FheError>;
}

/// Verifies a membership proof.
#[async_trait]
pub trait ProofVerifier: Send + Sync {
    async fn verify(&self, proof: &str) -> Result<ProofCheck, FheError>;
}
