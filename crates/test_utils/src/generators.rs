//! Property-Based Test Generators
//!
//! Proptest strategies that respect the domain invariants unless their
//! name says otherwise.

use proptest::prelude::*;

use core_kernel::{Amount, Identity};
use domain_policy::PolicyTerms;

/// Strategy for strictly positive whole amounts up to `max`
pub fn positive_amount_strategy(max: u64) -> impl Strategy<Value = Amount> {
    (1..=max).prop_map(Amount::from)
}

/// Strategy for any whole amount up to `max`, zero included
pub fn amount_strategy(max: u64) -> impl Strategy<Value = Amount> {
    (0..=max).prop_map(Amount::from)
}

/// Strategy for valid policy terms held by a fresh identity
pub fn policy_terms_strategy() -> impl Strategy<Value = PolicyTerms> {
    (
        positive_amount_strategy(10_000),
        positive_amount_strategy(1_000_000),
        1u64..10_000_000,
    )
        .prop_map(|(premium, coverage, duration)| {
            PolicyTerms::new(Identity::new(), premium, coverage, duration)
        })
}

/// Strategy for an amount that differs from `premium`
pub fn mismatched_payment_strategy(premium: u64) -> impl Strategy<Value = Amount> {
    prop_oneof![0..premium, (premium + 1)..premium.saturating_mul(3).max(premium + 2)]
        .prop_map(Amount::from)
}
