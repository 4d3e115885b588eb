//! Newtype wrapper around [`uuid::Uuid`] for organization identifiers.
//!
//! Organizations partition the folder store into disjoint forests; a
//! distinct type keeps an organization id from being confused with any
//! other UUID flowing through the system.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Identifier of the organization a folder belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OrgId(pub Uuid);

/// The organization used when none is configured or given on the command line.
pub const DEFAULT_ORG_ID: OrgId = OrgId(Uuid::from_u128(0xc1556e17_b7c0_45a3_a6ae_9546248fb17a));

impl OrgId {
    /// Create a new random identifier.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Create an identifier from an existing UUID.
    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    /// Create a random v4 identifier from caller-supplied random bytes.
    ///
    /// Used by seeded generators that must stay deterministic.
    pub fn from_random_bytes(bytes: [u8; 16]) -> Self {
        Self(uuid::Builder::from_random_bytes(bytes).into_uuid())
    }

    /// Return the inner UUID value.
    pub fn into_uuid(self) -> Uuid {
        self.0
    }

    /// Return a reference to the inner UUID.
    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl Default for OrgId {
    fn default() -> Self {
        DEFAULT_ORG_ID
    }
}

impl fmt::Display for OrgId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for OrgId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Uuid::parse_str(s).map(Self)
    }
}

impl From<Uuid> for OrgId {
    fn from(uuid: Uuid) -> Self {
        Self(uuid)
    }
}

impl From<OrgId> for Uuid {
    fn from(id: OrgId) -> Uuid {
        id.0
    }
}
