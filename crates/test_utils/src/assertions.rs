//! Custom Test Assertions
//!
//! Assertion helpers for policy and claim invariants that give more
//! meaningful messages than bare `assert!`.

use domain_claims::{Claim, ClaimStatus};
use domain_policy::Policy;

/// Asserts that a policy's total paid is a whole number of premiums
///
/// # Panics
///
/// Panics if `total_paid % premium != 0`
pub fn assert_total_paid_is_premium_multiple(policy: &Policy) {
    assert!(
        policy.total_paid().is_multiple_of(policy.premium()),
        "Policy {} has total paid {} which is not a multiple of premium {}",
        policy.id(),
        policy.total_paid(),
        policy.premium()
    );
}

/// Asserts that a claim is in the expected status
pub fn assert_claim_status(claim: &Claim, expected: ClaimStatus) {
    assert_eq!(
        claim.status, expected,
        "Claim {} is {:?}, expected {:?}",
        claim.id, claim.status, expected
    );
}

/// Asserts that a sequence of observed statuses only ever moves forward
///
/// Consecutive equal statuses are allowed; every change must be an edge of
/// the claim lifecycle.
pub fn assert_forward_only(history: &[ClaimStatus]) {
    for pair in history.windows(2) {
        let (from, to) = (pair[0], pair[1]);
        assert!(
            from == to || from.can_transition_to(to),
            "Claim status moved {:?} -> {:?}",
            from,
            to
        );
    }
}
