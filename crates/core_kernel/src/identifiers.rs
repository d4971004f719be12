//! Strongly-typed identifiers for actors and records
//!
//! Actors (owner, insurer, policyholders) are identified by an opaque
//! [`Identity`]. Records are identified by dense, zero-based sequence numbers
//! assigned in creation order, wrapped in newtypes so a policy id can never be
//! passed where a claim id is expected.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::num::ParseIntError;
use std::str::FromStr;
use uuid::Uuid;

/// Identity of an external actor
///
/// The core only compares identities; it never owns or mutates the actor
/// behind one. The nil UUID is reserved as the null identity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Identity(Uuid);

impl Identity {
    /// The null identity, never a valid holder, owner or insurer
    pub const NULL: Identity = Identity(Uuid::nil());

    /// Creates a new random identity
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Creates a new time-ordered identity (v7)
    pub fn new_v7() -> Self {
        Self(Uuid::now_v7())
    }

    /// Creates from an existing UUID
    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    /// Returns the underlying UUID
    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }

    /// Returns true for the null identity
    pub fn is_null(&self) -> bool {
        self.0.is_nil()
    }
}

impl Default for Identity {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for Identity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ID-{}", self.0)
    }
}

impl FromStr for Identity {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let uuid_str = s.strip_prefix("ID-").unwrap_or(s);
        Ok(Self(Uuid::parse_str(uuid_str)?))
    }
}

impl From<Uuid> for Identity {
    fn from(uuid: Uuid) -> Self {
        Self(uuid)
    }
}

macro_rules! define_seq_id {
    ($name:ident, $prefix:literal) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(u64);

        impl $name {
            /// Creates an identifier from its sequence number
            pub const fn new(seq: u64) -> Self {
                Self(seq)
            }

            /// Returns the sequence number
            pub fn value(&self) -> u64 {
                self.0
            }

            /// Returns the position of the record in its store
            pub fn index(&self) -> usize {
                self.0 as usize
            }

            /// Returns the identifier prefix for display
            pub fn prefix() -> &'static str {
                $prefix
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}-{}", $prefix, self.0)
            }
        }

        impl FromStr for $name {
            type Err = ParseIntError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                let seq = s.strip_prefix(concat!($prefix, "-")).unwrap_or(s);
                Ok(Self(seq.parse()?))
            }
        }

        impl From<u64> for $name {
            fn from(seq: u64) -> Self {
                Self(seq)
            }
        }

        impl From<$name> for u64 {
            fn from(id: $name) -> u64 {
                id.0
            }
        }
    };
}

define_seq_id!(PolicyId, "POL");
define_seq_id!(ClaimId, "CLM");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_null_identity() {
        assert!(Identity::NULL.is_null());
        assert!(!Identity::new().is_null());
        assert_eq!(Identity::from_uuid(Uuid::nil()), Identity::NULL);
    }

    #[test]
    fn test_identity_parsing() {
        let original = Identity::new_v7();
        let parsed: Identity = original.to_string().parse().unwrap();
        assert_eq!(original, parsed);

        let bare: Identity = original.as_uuid().to_string().parse().unwrap();
        assert_eq!(original, bare);
    }

    #[test]
    fn test_policy_id_display() {
        assert_eq!(PolicyId::new(0).to_string(), "POL-0");
        assert_eq!(ClaimId::new(42).to_string(), "CLM-42");
    }

    #[test]
    fn test_seq_id_parsing() {
        let parsed: PolicyId = "POL-7".parse().unwrap();
        assert_eq!(parsed, PolicyId::new(7));

        let bare: ClaimId = "3".parse().unwrap();
        assert_eq!(bare.index(), 3);

        assert!("POL-x".parse::<PolicyId>().is_err());
    }
}
