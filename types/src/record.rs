//! The in-memory membership record.

use crate::{AccountAddress, MembershipId, Timestamp};
use serde::{Deserialize, Serialize};

/// A membership as reconstructed from the ledger.
///
/// Created exactly once by a mint, never mutated, never deleted. The
/// `encrypted_level` and `proof` fields are opaque artifacts produced by
/// the encryptor capability; nothing in the registry inspects them.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MembershipRecord {
    /// Globally unique identifier, assigned at mint time.
    pub id: MembershipId,
    /// Opaque ciphertext label for the member's tier.
    pub encrypted_level: String,
    /// Account that minted the membership.
    pub owner: AccountAddress,
    /// When the membership was minted.
    pub join_date: Timestamp,
    /// Benefit descriptions, in display order. May be empty.
    pub benefits: Vec<String>,
    /// Opaque proof artifact accompanying the encrypted tier.
    pub proof: String,
}
