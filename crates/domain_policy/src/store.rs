//! Append-only policy store
//!
//! Policies are never removed. The id of a policy is its position in the
//! store, so ids are dense, zero-based and never reused.

use serde::{Deserialize, Serialize};

use core_kernel::{Amount, Identity, PolicyId, Timestamp};

use crate::aggregate::{Policy, PolicyTerms, PremiumReceipt};
use crate::error::PolicyError;
use crate::events::PolicyEvent;

/// The system of record for policies
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PolicyStore {
    policies: Vec<Policy>,
}

impl PolicyStore {
    /// Creates an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of policies ever issued
    pub fn len(&self) -> usize {
        self.policies.len()
    }

    /// Returns true if no policy has been issued
    pub fn is_empty(&self) -> bool {
        self.policies.is_empty()
    }

    /// Iterates over all policies in issuance order
    pub fn iter(&self) -> impl Iterator<Item = &Policy> {
        self.policies.iter()
    }

    /// Looks up a policy
    pub fn get(&self, id: PolicyId) -> Result<&Policy, PolicyError> {
        self.policies
            .get(id.index())
            .ok_or(PolicyError::PolicyNotFound(id))
    }

    fn get_mut(&mut self, id: PolicyId) -> Result<&mut Policy, PolicyError> {
        self.policies
            .get_mut(id.index())
            .ok_or(PolicyError::PolicyNotFound(id))
    }

    /// Issues a new policy starting at `now`
    ///
    /// # Returns
    ///
    /// The new policy's id and its issuance event
    pub fn issue(
        &mut self,
        terms: PolicyTerms,
        now: Timestamp,
    ) -> Result<(PolicyId, PolicyEvent), PolicyError> {
        let id = PolicyId::new(self.policies.len() as u64);
        let policy = Policy::issue(id, terms, now)?;

        let event = PolicyEvent::PolicyIssued {
            policy_id: id,
            holder: policy.holder(),
            premium: policy.premium(),
            coverage: policy.coverage(),
            start_at: policy.start_at(),
            duration_secs: policy.duration_secs(),
            timestamp: now,
        };

        tracing::debug!(policy_id = %id, holder = %policy.holder(), "Policy appended");
        self.policies.push(policy);

        Ok((id, event))
    }

    /// Accepts a premium payment on a policy
    pub fn record_premium(
        &mut self,
        id: PolicyId,
        caller: Identity,
        value: Amount,
        now: Timestamp,
    ) -> Result<PremiumReceipt, PolicyError> {
        self.get_mut(id)?.record_premium(caller, value, now)
    }

    /// Checks a premium payment without recording it
    pub fn quote_premium(
        &self,
        id: PolicyId,
        caller: Identity,
        value: Amount,
        now: Timestamp,
    ) -> Result<PremiumReceipt, PolicyError> {
        self.get(id)?.quote_premium(caller, value, now)
    }

    /// Commits a premium quoted by [`PolicyStore::quote_premium`]
    pub fn apply_premium(&mut self, receipt: &PremiumReceipt) -> Result<(), PolicyError> {
        self.get_mut(receipt.policy_id)?.apply_premium(receipt)
    }

    /// Cancels a policy
    pub fn cancel(&mut self, id: PolicyId, now: Timestamp) -> Result<PolicyEvent, PolicyError> {
        self.get_mut(id)?.cancel(now)
    }

    /// Applies the expiry rule to a policy
    pub fn is_expired(&self, id: PolicyId, now: Timestamp) -> Result<bool, PolicyError> {
        Ok(self.get(id)?.is_expired(now))
    }
}
