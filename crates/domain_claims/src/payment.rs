//! Claim payouts

use serde::{Deserialize, Serialize};

use core_kernel::{Amount, ClaimId, Identity, PolicyId, Timestamp};
use crate::events::ClaimEvent;

/// A payout instruction for an approved claim
///
/// Produced when a claim is marked paid; the caller is responsible for moving
/// `amount` to `payee` and for undoing the status change if that fails.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClaimPayout {
    pub claim_id: ClaimId,
    pub policy_id: PolicyId,
    pub payee: Identity,
    pub amount: Amount,
}

impl ClaimPayout {
    /// Builds the notification for a completed payout
    pub fn event(&self, at: Timestamp) -> ClaimEvent {
        ClaimEvent::ClaimPaid {
            claim_id: self.claim_id,
            policy_id: self.policy_id,
            payee: self.payee,
            amount: self.amount,
            timestamp: at,
        }
    }
}
