//! Domain events for the claim lifecycle

use serde::{Deserialize, Serialize};

use core_kernel::{Amount, ClaimId, Identity, PolicyId, Timestamp};

/// Events emitted by the claim lifecycle
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ClaimEvent {
    /// A holder raised a claim
    ClaimSubmitted {
        claim_id: ClaimId,
        policy_id: PolicyId,
        claimant: Identity,
        amount: Amount,
        reason: String,
        timestamp: Timestamp,
    },

    /// The insurer authorised the claim for payout
    ClaimApproved {
        claim_id: ClaimId,
        policy_id: PolicyId,
        amount: Amount,
        timestamp: Timestamp,
    },

    /// The insurer refused the claim
    ClaimRejected {
        claim_id: ClaimId,
        policy_id: PolicyId,
        reason: String,
        timestamp: Timestamp,
    },

    /// Value for the claim reached the holder
    ClaimPaid {
        claim_id: ClaimId,
        policy_id: PolicyId,
        payee: Identity,
        amount: Amount,
        timestamp: Timestamp,
    },
}

impl ClaimEvent {
    /// Returns the claim ID associated with this event
    pub fn claim_id(&self) -> ClaimId {
        match self {
            ClaimEvent::ClaimSubmitted { claim_id, .. } => *claim_id,
            ClaimEvent::ClaimApproved { claim_id, .. } => *claim_id,
            ClaimEvent::ClaimRejected { claim_id, .. } => *claim_id,
            ClaimEvent::ClaimPaid { claim_id, .. } => *claim_id,
        }
    }

    /// Returns the policy ID associated with this event
    pub fn policy_id(&self) -> PolicyId {
        match self {
            ClaimEvent::ClaimSubmitted { policy_id, .. } => *policy_id,
            ClaimEvent::ClaimApproved { policy_id, .. } => *policy_id,
            ClaimEvent::ClaimRejected { policy_id, .. } => *policy_id,
            ClaimEvent::ClaimPaid { policy_id, .. } => *policy_id,
        }
    }

    /// Returns the timestamp of this event
    pub fn timestamp(&self) -> Timestamp {
        match self {
            ClaimEvent::ClaimSubmitted { timestamp, .. } => *timestamp,
            ClaimEvent::ClaimApproved { timestamp, .. } => *timestamp,
            ClaimEvent::ClaimRejected { timestamp, .. } => *timestamp,
            ClaimEvent::ClaimPaid { timestamp, .. } => *timestamp,
        }
    }

    /// Returns the event type name
    pub fn event_type(&self) -> &'static str {
        match self {
            ClaimEvent::ClaimSubmitted { .. } => "ClaimSubmitted",
            ClaimEvent::ClaimApproved { .. } => "ClaimApproved",
            ClaimEvent::ClaimRejected { .. } => "ClaimRejected",
            ClaimEvent::ClaimPaid { .. } => "ClaimPaid",
        }
    }
}
