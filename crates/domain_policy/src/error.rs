//! Policy domain errors
//!
//! This module defines all error types that can occur within the
//! policy lifecycle.

use thiserror::Error;

use core_kernel::{Amount, AmountError, Identity, PolicyId, Timestamp};

/// Errors that can occur in the policy domain
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PolicyError {
    /// Issuance terms violate a policy invariant
    #[error("Invalid policy terms: {0}")]
    InvalidTerms(String),

    /// No policy with this id has been issued
    #[error("Policy not found: {0}")]
    PolicyNotFound(PolicyId),

    /// Policy has been cancelled
    #[error("Policy {0} is cancelled")]
    Cancelled(PolicyId),

    /// Cancellation requested twice
    #[error("Policy {0} is already cancelled")]
    AlreadyCancelled(PolicyId),

    /// Validity window has elapsed
    #[error("Policy {policy_id} expired at {expired_at}")]
    Expired {
        policy_id: PolicyId,
        expired_at: Timestamp,
    },

    /// No premium has been accepted yet
    #[error("Policy {0} is not active")]
    Inactive(PolicyId),

    /// Caller is not the policyholder
    #[error("{caller} is not the holder of policy {policy_id}")]
    NotHolder {
        policy_id: PolicyId,
        caller: Identity,
    },

    /// Premium payments must match the premium exactly
    #[error("Premium mismatch: expected {expected}, received {received}")]
    PremiumMismatch {
        expected: Amount,
        received: Amount,
    },

    /// Claim amount outside `(0, coverage]`
    #[error("Claim amount {amount} outside coverage of {coverage}")]
    ClaimAmountOutOfRange {
        amount: Amount,
        coverage: Amount,
    },

    /// Premium quote no longer matches the policy's running total
    #[error("Premium receipt for policy {0} is stale")]
    StaleReceipt(PolicyId),

    /// Financial calculation error
    #[error("Financial error: {0}")]
    Financial(#[from] AmountError),
}

impl PolicyError {
    /// Creates an invalid terms error
    pub fn invalid_terms(message: impl Into<String>) -> Self {
        PolicyError::InvalidTerms(message.into())
    }
}
