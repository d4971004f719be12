//! Service errors
//!
//! Domain errors pass through unchanged; [`ServiceError::kind`] folds every
//! variant onto the small set of outcomes callers branch on.

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

use core_kernel::{Amount, ClaimId, CoreError, PortError};
use domain_access::AccessError;
use domain_claims::ClaimError;
use domain_policy::PolicyError;
use domain_treasury::TreasuryError;

/// Coarse classification of a failed call
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    Unauthorized,
    InvalidArgument,
    InvalidState,
    SystemPaused,
    InsufficientFunds,
    PayoutFailed,
    WithdrawFailed,
    DepositFailed,
    ReentrancyBlocked,
    NotFound,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ErrorKind::Unauthorized => "unauthorized",
            ErrorKind::InvalidArgument => "invalid_argument",
            ErrorKind::InvalidState => "invalid_state",
            ErrorKind::SystemPaused => "system_paused",
            ErrorKind::InsufficientFunds => "insufficient_funds",
            ErrorKind::PayoutFailed => "payout_failed",
            ErrorKind::WithdrawFailed => "withdraw_failed",
            ErrorKind::DepositFailed => "deposit_failed",
            ErrorKind::ReentrancyBlocked => "reentrancy_blocked",
            ErrorKind::NotFound => "not_found",
        };
        f.write_str(name)
    }
}

/// Errors returned by [`crate::InsuranceService`]
#[derive(Debug, Error)]
pub enum ServiceError {
    #[error(transparent)]
    Access(#[from] AccessError),

    #[error(transparent)]
    Policy(#[from] PolicyError),

    #[error(transparent)]
    Claim(#[from] ClaimError),

    #[error(transparent)]
    Treasury(#[from] TreasuryError),

    #[error(transparent)]
    Core(#[from] CoreError),

    /// A guarded call is already in flight
    #[error("Reentrant call blocked")]
    ReentrancyBlocked,

    /// The ledger refused to pay an approved claim
    #[error("Payout of {amount} for {claim_id} failed: {source}")]
    PayoutFailed {
        claim_id: ClaimId,
        amount: Amount,
        #[source]
        source: PortError,
    },

    /// The ledger refused a withdrawal
    #[error("Withdrawal of {amount} failed: {source}")]
    WithdrawFailed {
        amount: Amount,
        #[source]
        source: PortError,
    },

    /// The ledger refused to take value into custody
    #[error("Deposit of {amount} failed: {source}")]
    DepositFailed {
        amount: Amount,
        #[source]
        source: PortError,
    },
}

impl ServiceError {
    /// Classifies the error
    pub fn kind(&self) -> ErrorKind {
        match self {
            ServiceError::Access(e) => match e {
                AccessError::Unauthorized { .. } => ErrorKind::Unauthorized,
                AccessError::NullIdentity(_) => ErrorKind::InvalidArgument,
                AccessError::Paused => ErrorKind::SystemPaused,
                AccessError::NotPaused => ErrorKind::InvalidState,
            },
            ServiceError::Policy(e) => match e {
                PolicyError::InvalidTerms(_)
                | PolicyError::PremiumMismatch { .. }
                | PolicyError::ClaimAmountOutOfRange { .. }
                | PolicyError::Financial(_) => ErrorKind::InvalidArgument,
                PolicyError::Cancelled(_)
                | PolicyError::AlreadyCancelled(_)
                | PolicyError::Expired { .. }
                | PolicyError::Inactive(_)
                | PolicyError::StaleReceipt(_) => ErrorKind::InvalidState,
                PolicyError::NotHolder { .. } => ErrorKind::Unauthorized,
                PolicyError::PolicyNotFound(_) => ErrorKind::NotFound,
            },
            ServiceError::Claim(e) => match e {
                ClaimError::ClaimNotFound(_) => ErrorKind::NotFound,
                ClaimError::InvalidStatusTransition { .. } => ErrorKind::InvalidState,
            },
            ServiceError::Treasury(e) => match e {
                TreasuryError::ZeroAmount => ErrorKind::InvalidArgument,
                TreasuryError::InsufficientFunds { .. } => ErrorKind::InsufficientFunds,
                TreasuryError::TransferFailed(_) => ErrorKind::PayoutFailed,
                TreasuryError::DepositFailed(_) => ErrorKind::DepositFailed,
            },
            ServiceError::Core(_) => ErrorKind::InvalidArgument,
            ServiceError::ReentrancyBlocked => ErrorKind::ReentrancyBlocked,
            ServiceError::PayoutFailed { .. } => ErrorKind::PayoutFailed,
            ServiceError::WithdrawFailed { .. } => ErrorKind::WithdrawFailed,
            ServiceError::DepositFailed { .. } => ErrorKind::DepositFailed,
        }
    }
}
