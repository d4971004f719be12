//! Claim record and status machine

use serde::{Deserialize, Serialize};

use core_kernel::{Amount, ClaimId, Identity, PolicyId};
use crate::error::ClaimError;

/// Claim status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ClaimStatus {
    /// Submitted, awaiting adjudication
    Pending,
    /// Authorised for payout
    Approved,
    /// Refused; terminal
    Rejected,
    /// Value delivered; terminal
    Paid,
}

impl ClaimStatus {
    /// Returns true for statuses with no outgoing edge
    pub fn is_terminal(&self) -> bool {
        matches!(self, ClaimStatus::Rejected | ClaimStatus::Paid)
    }

    /// Checks whether `self -> target` is an edge of the lifecycle
    pub fn can_transition_to(&self, target: ClaimStatus) -> bool {
        use ClaimStatus::*;
        matches!(
            (self, target),
            (Pending, Approved) |
            (Pending, Rejected) |
            (Approved, Paid)
        )
    }
}

/// A claim against a policy
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claim {
    /// Global identifier
    pub id: ClaimId,
    /// Policy claimed against
    pub policy_id: PolicyId,
    /// Holder of the policy at submission
    pub claimant: Identity,
    /// Amount requested
    pub amount: Amount,
    /// Holder-supplied description
    pub reason: String,
    /// Status
    pub status: ClaimStatus,
}

impl Claim {
    /// Creates a new pending claim
    pub fn new(
        id: ClaimId,
        policy_id: PolicyId,
        claimant: Identity,
        amount: Amount,
        reason: impl Into<String>,
    ) -> Self {
        Self {
            id,
            policy_id,
            claimant,
            amount,
            reason: reason.into(),
            status: ClaimStatus::Pending,
        }
    }

    /// Moves the claim along one lifecycle edge
    pub fn update_status(&mut self, status: ClaimStatus) -> Result<(), ClaimError> {
        if !self.status.can_transition_to(status) {
            return Err(ClaimError::InvalidStatusTransition {
                claim_id: self.id,
                from: self.status,
                to: status,
            });
        }
        self.status = status;
        Ok(())
    }

    /// Puts a paid claim back to approved after a failed transfer
    pub(crate) fn revert_payment(&mut self) -> Result<(), ClaimError> {
        if self.status != ClaimStatus::Paid {
            return Err(ClaimError::InvalidStatusTransition {
                claim_id: self.id,
                from: self.status,
                to: ClaimStatus::Approved,
            });
        }
        self.status = ClaimStatus::Approved;
        Ok(())
    }
}
