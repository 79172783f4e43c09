//! Wire codec for stored membership records.
//!
//! Field names in the payload object are fixed by the data already on the
//! ledger and must not drift: `level`, `owner`, `joinDate`, `benefits`,
//! `fheProof`. The index is a bare JSON array of id strings. Both are
//! UTF-8 JSON.

use crate::error::CodecError;
use serde::{Deserialize, Serialize};
use veil_types::{AccountAddress, MembershipId, MembershipRecord, Timestamp};

/// The stored shape of one membership payload.
#[derive(Debug, Serialize, Deserialize)]
struct StoredMembership {
    level: String,
    owner: String,
    #[serde(rename = "joinDate")]
    join_date: u64,
    #[serde(default)]
    benefits: Vec<String>,
    #[serde(rename = "fheProof", default)]
    fhe_proof: String,
}

/// Encode a membership record into its stored payload form.
pub fn encode_payload(record: &MembershipRecord) -> Result<Vec<u8>, CodecError> {
    let stored = StoredMembership {
        level: record.encrypted_level.clone(),
        owner: record.owner.as_str().to_string(),
        join_date: record.join_date.as_secs(),
        benefits: record.benefits.clone(),
        fhe_proof: record.proof.clone(),
    };
    Ok(serde_json::to_vec(&stored)?)
}

/// Decode a stored payload into a membership record.
///
/// The id is not part of the payload; it comes from the key the payload
/// was stored under.
pub fn decode_payload(id: &MembershipId, bytes: &[u8]) -> Result<MembershipRecord, CodecError> {
    let stored: StoredMembership = serde_json::from_slice(bytes)?;
    if stored.join_date == 0 {
        return Err(CodecError::InvalidField("joinDate must be positive".into()));
    }
    Ok(MembershipRecord {
        id: id.clone(),
        encrypted_level: stored.level,
        owner: AccountAddress::new(stored.owner),
        join_date: Timestamp::new(stored.join_date),
        benefits: stored.benefits,
        proof: stored.fhe_proof,
    })
}

/// Encode the index — the ordered id list.
pub fn encode_index(ids: &[MembershipId]) -> Result<Vec<u8>, CodecError> {
    let raw: Vec<&str> = ids.iter().map(|id| id.as_str()).collect();
    Ok(serde_json::to_vec(&raw)?)
}

/// Decode the index record.
pub fn decode_index(bytes: &[u8]) -> Result<Vec<MembershipId>, CodecError> {
    let raw: Vec<String> = serde_json::from_slice(bytes)?;
    Ok(raw.into_iter().map(MembershipId::new).collect())
}
