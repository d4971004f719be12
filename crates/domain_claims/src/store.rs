//! Append-only claim store with a per-policy index
//!
//! Claim ids are global: the n-th claim ever submitted gets id n, whatever
//! policy it was raised against. The per-policy index lists those global ids
//! in submission order.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use core_kernel::{Amount, ClaimId, Identity, PolicyId, Timestamp};

use crate::claim::{Claim, ClaimStatus};
use crate::error::ClaimError;
use crate::events::ClaimEvent;
use crate::payment::ClaimPayout;

/// The system of record for claims
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ClaimStore {
    claims: Vec<Claim>,
    by_policy: BTreeMap<PolicyId, Vec<ClaimId>>,
}

impl ClaimStore {
    /// Creates an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of claims ever submitted
    pub fn len(&self) -> usize {
        self.claims.len()
    }

    /// Returns true if no claim has been submitted
    pub fn is_empty(&self) -> bool {
        self.claims.is_empty()
    }

    /// Iterates over all claims in submission order
    pub fn iter(&self) -> impl Iterator<Item = &Claim> {
        self.claims.iter()
    }

    /// Looks up a claim
    pub fn get(&self, id: ClaimId) -> Result<&Claim, ClaimError> {
        self.claims
            .get(id.index())
            .ok_or(ClaimError::ClaimNotFound(id))
    }

    fn get_mut(&mut self, id: ClaimId) -> Result<&mut Claim, ClaimError> {
        self.claims
            .get_mut(id.index())
            .ok_or(ClaimError::ClaimNotFound(id))
    }

    /// Global ids of the claims raised against `policy_id`, oldest first
    pub fn ids_for_policy(&self, policy_id: PolicyId) -> &[ClaimId] {
        self.by_policy
            .get(&policy_id)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Appends a pending claim and indexes it under its policy
    ///
    /// Eligibility against the policy is the caller's responsibility; the
    /// store only records.
    pub fn submit(
        &mut self,
        policy_id: PolicyId,
        claimant: Identity,
        amount: Amount,
        reason: impl Into<String>,
        now: Timestamp,
    ) -> (ClaimId, ClaimEvent) {
        let id = ClaimId::new(self.claims.len() as u64);
        let claim = Claim::new(id, policy_id, claimant, amount, reason);

        let event = ClaimEvent::ClaimSubmitted {
            claim_id: id,
            policy_id,
            claimant,
            amount,
            reason: claim.reason.clone(),
            timestamp: now,
        };

        tracing::debug!(claim_id = %id, policy_id = %policy_id, "Claim appended");
        self.claims.push(claim);
        self.by_policy.entry(policy_id).or_default().push(id);

        (id, event)
    }

    /// Pending -> Approved
    pub fn approve(&mut self, id: ClaimId, now: Timestamp) -> Result<ClaimEvent, ClaimError> {
        let claim = self.get_mut(id)?;
        claim.update_status(ClaimStatus::Approved)?;

        Ok(ClaimEvent::ClaimApproved {
            claim_id: id,
            policy_id: claim.policy_id,
            amount: claim.amount,
            timestamp: now,
        })
    }

    /// Pending -> Rejected
    pub fn reject(
        &mut self,
        id: ClaimId,
        reason: impl Into<String>,
        now: Timestamp,
    ) -> Result<ClaimEvent, ClaimError> {
        let claim = self.get_mut(id)?;
        claim.update_status(ClaimStatus::Rejected)?;

        Ok(ClaimEvent::ClaimRejected {
            claim_id: id,
            policy_id: claim.policy_id,
            reason: reason.into(),
            timestamp: now,
        })
    }

    /// Fails unless the claim is currently approved
    pub fn ensure_approved(&self, id: ClaimId) -> Result<&Claim, ClaimError> {
        let claim = self.get(id)?;
        if claim.status != ClaimStatus::Approved {
            return Err(ClaimError::InvalidStatusTransition {
                claim_id: id,
                from: claim.status,
                to: ClaimStatus::Paid,
            });
        }
        Ok(claim)
    }

    /// Approved -> Paid, returning the payout to execute
    ///
    /// The status flips before any value moves. If the transfer then fails,
    /// call [`ClaimStore::revert_payout`].
    pub fn mark_paid(&mut self, id: ClaimId) -> Result<ClaimPayout, ClaimError> {
        let claim = self.get_mut(id)?;
        claim.update_status(ClaimStatus::Paid)?;

        Ok(ClaimPayout {
            claim_id: id,
            policy_id: claim.policy_id,
            payee: claim.claimant,
            amount: claim.amount,
        })
    }

    /// Paid -> Approved, for a payout whose transfer failed
    pub fn revert_payout(&mut self, payout: &ClaimPayout) -> Result<(), ClaimError> {
        self.get_mut(payout.claim_id)?.revert_payment()
    }
}
