//! Membership id synthesis.

use veil_types::{MembershipId, Timestamp};

/// Synthesize a fresh membership id: `MEM-{unix_secs}-{random hex}`.
///
/// Uniqueness is probabilistic — the id is never checked against the
/// stored index. The 32-bit suffix keeps collisions out of reach for any
/// realistic mint volume within one second.
pub fn mint_membership_id(now: Timestamp) -> MembershipId {
    let suffix: u32 = rand::random();
    MembershipId::new(format!("MEM-{}-{suffix:08x}", now.as_secs()))
}
