//! The registry store — collection reconstruction and the mint protocol.
//!
//! `load` rebuilds the whole collection from the index plus one payload
//! read per id, isolating corruption per record: a membership that fails
//! to resolve is skipped with a warning, never blocking the others.
//! `create` performs the two-write mint protocol (payload, then index
//! read-append-write) followed by a full reload. The index update is the
//! only read-modify-write against the ledger, and it is serialized
//! through a single async mutex so interleaved mints cannot lose ids.

use crate::codec;
use crate::error::{CodecError, MintError, RegistryError};
use crate::id::mint_membership_id;
use std::sync::Arc;
use thiserror::Error;
use tokio::sync::Mutex;
use tracing::{debug, warn};
use veil_fhe::{Encryptor, ProofCheck, ProofVerifier};
use veil_ledger::{LedgerClient, LedgerError};
use veil_types::{AccountAddress, MembershipId, MembershipRecord, Tier, Timestamp};

/// Key of the index record holding the ordered id list.
pub const INDEX_KEY: &str = "membership_keys";

/// Key of the payload record for one membership.
pub fn payload_key(id: &MembershipId) -> String {
    format!("membership_{id}")
}

/// What a member submits to mint.
#[derive(Clone, Debug)]
pub struct MembershipDraft {
    pub owner: AccountAddress,
    pub tier: Tier,
    pub benefits: Vec<String>,
}

/// Result of a successful mint: the new record plus the collection as
/// reloaded from the ledger after both writes landed.
#[derive(Clone, Debug)]
pub struct MintOutcome {
    pub minted: MembershipRecord,
    pub memberships: Vec<MembershipRecord>,
}

/// Why a single payload could not be resolved during a load.
#[derive(Debug, Error)]
enum PayloadReadError {
    #[error(transparent)]
    Ledger(#[from] LedgerError),
    #[error(transparent)]
    Codec(#[from] CodecError),
}

/// Sole writer of the membership namespace.
///
/// Holds the ledger client and the two pluggable capabilities. Cheap to
/// share behind an `Arc`; all methods take `&self`.
pub struct RegistryStore {
    ledger: Arc<dyn LedgerClient>,
    encryptor: Arc<dyn Encryptor>,
    verifier: Arc<dyn ProofVerifier>,
    /// Serializes every index read-append-write (single-writer arbitration).
    index_write: Mutex<()>,
}

impl RegistryStore {
    pub fn new(
        ledger: Arc<dyn LedgerClient>,
        encryptor: Arc<dyn Encryptor>,
        verifier: Arc<dyn ProofVerifier>,
    ) -> Self {
        Self {
            ledger,
            encryptor,
            verifier,
            index_write: Mutex::new(()),
        }
    }

    /// Reconstruct the full membership collection in index order.
    ///
    /// Fails only when the ledger is unavailable; a missing or malformed
    /// index degrades to an empty collection, and unresolvable payloads
    /// are skipped. Callers keep their previous collection on failure.
    pub async fn load(&self) -> Result<Vec<MembershipRecord>, RegistryError> {
        self.ensure_available().await?;

        let ids = match self.fetch_index().await {
            Ok(ids) => ids,
            Err(e) => {
                warn!(error = %e, "index read failed, treating as empty");
                Vec::new()
            }
        };

        let mut records = Vec::with_capacity(ids.len());
        for id in &ids {
            match self.fetch_payload(id).await {
                Ok(Some(record)) => records.push(record),
                Ok(None) => warn!(%id, "membership payload missing, skipping"),
                Err(e) => warn!(%id, error = %e, "membership payload unreadable, skipping"),
            }
        }

        debug!(
            loaded = records.len(),
            indexed = ids.len(),
            "membership collection reconstructed"
        );
        Ok(records)
    }

    /// Mint a membership: payload write, index append, full reload.
    ///
    /// Not transactional across the two writes — a payload whose index
    /// append fails stays on the ledger unreferenced, which `load`
    /// already tolerates.
    pub async fn create(&self, draft: MembershipDraft) -> Result<MintOutcome, RegistryError> {
        let now = Timestamp::now();
        let id = mint_membership_id(now);

        let sealed = self
            .encryptor
            .encrypt(draft.tier)
            .await
            .map_err(|e| MintError::Unknown(format!("encryption capability failed: {e}")))?;

        let record = MembershipRecord {
            id: id.clone(),
            encrypted_level: sealed.label,
            owner: draft.owner,
            join_date: now,
            benefits: draft.benefits,
            proof: sealed.proof,
        };

        let payload = codec::encode_payload(&record)
            .map_err(|e| MintError::Unknown(format!("payload encoding failed: {e}")))?;
        self.ledger
            .set_data(&payload_key(&id), &payload)
            .await
            .map_err(write_failure)?;

        {
            let _index_guard = self.index_write.lock().await;
            // Re-read remote truth under the lock; the in-memory
            // collection may be stale.
            let mut ids = self
                .fetch_index()
                .await
                .map_err(|e| MintError::Unknown(format!("index read failed: {e}")))?;
            ids.push(id.clone());
            let index = codec::encode_index(&ids)
                .map_err(|e| MintError::Unknown(format!("index encoding failed: {e}")))?;
            self.ledger
                .set_data(INDEX_KEY, &index)
                .await
                .map_err(write_failure)?;
        }

        let memberships = self.load().await?;
        debug!(id = %record.id, "membership minted");
        Ok(MintOutcome { minted: record, memberships })
    }

    /// Check a membership's proof through the verifier capability.
    ///
    /// Reads the payload back from the ledger rather than trusting any
    /// cached copy. Does not mutate the registry.
    pub async fn verify(&self, id: &MembershipId) -> Result<ProofCheck, RegistryError> {
        self.ensure_available().await?;

        let record = self
            .fetch_payload(id)
            .await
            .map_err(|e| RegistryError::Verify(format!("membership unreadable: {e}")))?
            .ok_or_else(|| RegistryError::Verify(format!("membership {id} not found")))?;

        self.verifier
            .verify(&record.proof)
            .await
            .map_err(|e| RegistryError::Verify(e.to_string()))
    }

    async fn ensure_available(&self) -> Result<(), RegistryError> {
        let available = self
            .ledger
            .is_available()
            .await
            .map_err(|_| RegistryError::Unavailable)?;
        if available {
            Ok(())
        } else {
            Err(RegistryError::Unavailable)
        }
    }

    /// Read and decode the index. A malformed index degrades to empty;
    /// a ledger read failure propagates.
    async fn fetch_index(&self) -> Result<Vec<MembershipId>, LedgerError> {
        let bytes = self.ledger.get_data(INDEX_KEY).await?;
        if bytes.is_empty() {
            return Ok(Vec::new());
        }
        match codec::decode_index(&bytes) {
            Ok(ids) => Ok(ids),
            Err(e) => {
                warn!(error = %e, "stored index is malformed, treating as empty");
                Ok(Vec::new())
            }
        }
    }

    /// Read and decode one payload. `None` when the key is absent.
    async fn fetch_payload(
        &self,
        id: &MembershipId,
    ) -> Result<Option<MembershipRecord>, PayloadReadError> {
        let bytes = self.ledger.get_data(&payload_key(id)).await?;
        if bytes.is_empty() {
            return Ok(None);
        }
        Ok(Some(codec::decode_payload(id, &bytes)?))
    }
}

/// Map a ledger write failure onto the mint taxonomy.
fn write_failure(err: LedgerError) -> RegistryError {
    match err {
        LedgerError::UserRejected => MintError::UserRejected.into(),
        LedgerError::Unavailable => RegistryError::Unavailable,
        other => MintError::RemoteWriteFailed(other.to_string()).into(),
    }
}
