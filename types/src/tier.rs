//! Membership tier selection.

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// The tier a member selects when minting.
///
/// This is the plaintext selection that gets handed to the encryptor
/// capability. The encrypted form stored on the ledger is an opaque label
/// and never round-trips back through this type.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Tier {
    /// Level 1 — basic access.
    Basic,
    /// Level 2 — premium features.
    Premium,
    /// Level 3 — VIP benefits.
    Vip,
}

#[derive(Debug, Error)]
#[error("unknown tier selection: {0}")]
pub struct ParseTierError(String);

impl Tier {
    /// The numeric level as presented to the member (1-based).
    pub fn level(&self) -> u8 {
        match self {
            Tier::Basic => 1,
            Tier::Premium => 2,
            Tier::Vip => 3,
        }
    }

    /// Parse the form value a member submits ("1", "2", "3").
    pub fn from_selection(value: &str) -> Result<Self, ParseTierError> {
        match value {
            "1" => Ok(Tier::Basic),
            "2" => Ok(Tier::Premium),
            "3" => Ok(Tier::Vip),
            other => Err(ParseTierError(other.to_string())),
        }
    }
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "L{}", self.level())
    }
}
