//! Pre-built Test Fixtures
//!
//! Ready-to-use actors and terms. The standard terms match the reference
//! scenario: premium 100, coverage 1000, duration 1000 seconds.

use fake::faker::lorem::en::Sentence;
use fake::Fake;

use core_kernel::{Amount, Identity, Timestamp};
use domain_policy::PolicyTerms;

/// Premium of the standard policy
pub const STANDARD_PREMIUM: u64 = 100;
/// Coverage of the standard policy
pub const STANDARD_COVERAGE: u64 = 1_000;
/// Duration of the standard policy, in seconds
pub const STANDARD_DURATION_SECS: u64 = 1_000;
/// Clock reading tests start from; non-zero so expiry applies
pub const START: Timestamp = Timestamp::from_secs(1_700_000_000);

/// The three roles every scenario needs, plus an outsider
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Actors {
    pub owner: Identity,
    pub insurer: Identity,
    pub holder: Identity,
    pub stranger: Identity,
}

impl Actors {
    /// Fresh random identities for every role
    pub fn new() -> Self {
        Self {
            owner: Identity::new(),
            insurer: Identity::new(),
            holder: Identity::new(),
            stranger: Identity::new(),
        }
    }
}

impl Default for Actors {
    fn default() -> Self {
        Self::new()
    }
}

/// Standard terms for `holder`
pub fn standard_terms(holder: Identity) -> PolicyTerms {
    PolicyTerms::new(
        holder,
        Amount::from(STANDARD_PREMIUM),
        Amount::from(STANDARD_COVERAGE),
        STANDARD_DURATION_SECS,
    )
}

/// A plausible free-text claim reason
pub fn claim_reason() -> String {
    Sentence(3..8).fake()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_terms_are_valid() {
        assert!(standard_terms(Identity::new()).validate().is_ok());
    }

    #[test]
    fn test_claim_reason_not_empty() {
        assert!(!claim_reason().trim().is_empty());
    }
}
