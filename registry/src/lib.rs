//! Membership registry core.
//!
//! The remote ledger stores memberships in a two-level key namespace: one
//! index record holding the ordered id list, plus one payload record per
//! id. The ledger offers no transactions and no list queries, so this
//! crate owns everything that makes the namespace usable as a collection:
//! the wire codec, reconstruction of the full collection with per-record
//! corruption isolation, and the non-atomic two-write mint protocol with
//! single-writer index arbitration.

pub mod codec;
pub mod error;
pub mod id;
pub mod store;

pub use error::{CodecError, MintError, RegistryError};
pub use id::mint_membership_id;
pub use store::{MembershipDraft, MintOutcome, RegistryStore, INDEX_KEY};
