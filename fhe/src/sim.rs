//! Simulated encryption — NOT a security boundary.

use crate::error::FheError;
use crate::{EncryptedTier, Encryptor, ProofCheck, ProofVerifier};
use async_trait::async_trait;
use std::time::{Duration, SystemTime, UNIX_EPOCH};
use veil_types::Tier;

/// Simulated latency of a proof verification round-trip.
const VERIFY_LATENCY: Duration = Duration::from_secs(2);

/// Prefix every simulated proof carries.
const PROOF_PREFIX: &str = "FHE-PROOF-";

/// Placeholder capability producing recognizable-but-opaque artifacts.
///
/// The label is `FHE-L{level}` and the proof is `FHE-PROOF-{millis}` —
/// string concatenation, not cryptography. A production deployment
/// replaces this with a real homomorphic scheme behind the same traits.
#[derive(Clone, Copy, Debug, Default)]
pub struct SimulatedFhe;

impl SimulatedFhe {
    pub fn new() -> Self {
        Self
    }

    fn now_millis() -> u128 {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_millis())
            .unwrap_or(0)
    }
}

#[async_trait]
impl Encryptor for SimulatedFhe {
    async fn encrypt(&self, tier: Tier) -> Result<EncryptedTier, FheError> {
        Ok(EncryptedTier {
            label: format!("FHE-L{}", tier.level()),
            proof: format!("{PROOF_PREFIX}{}", Self::now_millis()),
        })
    }
}

#[async_trait]
impl ProofVerifier for SimulatedFhe {
    async fn verify(&self, proof: &str) -> Result<ProofCheck, FheError> {
        tokio::time::sleep(VERIFY_LATENCY).await;
        if proof.starts_with(PROOF_PREFIX) {
            Ok(ProofCheck {
                valid: true,
                message: "Proof verified".to_string(),
            })
        } else {
            Ok(ProofCheck {
                valid: false,
                message: "Unrecognized proof artifact".to_string(),
            })
        }
    }
}
