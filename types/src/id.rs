//! Membership identifier type.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A membership identifier.
///
/// Synthesized once at mint time (see `veil-registry`) and opaque
/// everywhere else. Assumed unique across the collection; uniqueness is
/// probabilistic, not enforced against the stored index.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MembershipId(String);

impl MembershipId {
    /// Create a membership id from a raw string.
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    /// Return the raw id string.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for MembershipId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for MembershipId {
    fn from(s: String) -> Self {
        Self::new(s)
    }
}

impl From<&str> for MembershipId {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}
