//! Domain events for the policy lifecycle
//!
//! Events are the audit trail of the policy store. Each successful
//! transition produces exactly one event carrying the ids and amounts
//! involved, for external indexers.

use serde::{Deserialize, Serialize};

use core_kernel::{Amount, Identity, PolicyId, Timestamp};

/// Domain events emitted by the policy lifecycle
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum PolicyEvent {
    /// A policy has been issued
    PolicyIssued {
        policy_id: PolicyId,
        holder: Identity,
        premium: Amount,
        coverage: Amount,
        start_at: Timestamp,
        duration_secs: u64,
        timestamp: Timestamp,
    },

    /// A premium payment was accepted
    PremiumPaid {
        policy_id: PolicyId,
        payer: Identity,
        amount: Amount,
        total_paid: Amount,
        timestamp: Timestamp,
    },

    /// A policy has been cancelled
    PolicyCancelled {
        policy_id: PolicyId,
        timestamp: Timestamp,
    },
}

impl PolicyEvent {
    /// Returns the policy ID associated with this event
    pub fn policy_id(&self) -> PolicyId {
        match self {
            PolicyEvent::PolicyIssued { policy_id, .. } => *policy_id,
            PolicyEvent::PremiumPaid { policy_id, .. } => *policy_id,
            PolicyEvent::PolicyCancelled { policy_id, .. } => *policy_id,
        }
    }

    /// Returns the timestamp of this event
    pub fn timestamp(&self) -> Timestamp {
        match self {
            PolicyEvent::PolicyIssued { timestamp, .. } => *timestamp,
            PolicyEvent::PremiumPaid { timestamp, .. } => *timestamp,
            PolicyEvent::PolicyCancelled { timestamp, .. } => *timestamp,
        }
    }

    /// Returns the event type name
    pub fn event_type(&self) -> &'static str {
        match self {
            PolicyEvent::PolicyIssued { .. } => "PolicyIssued",
            PolicyEvent::PremiumPaid { .. } => "PremiumPaid",
            PolicyEvent::PolicyCancelled { .. } => "PolicyCancelled",
        }
    }
}
