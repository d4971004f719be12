//! Policy record and its transitions
//!
//! The Policy is the consistency boundary for premium accounting and for the
//! gate in front of claim submission.
//!
//! # Invariants
//!
//! - `premium > 0`, `coverage > 0`, `duration > 0`, holder is not null
//! - `active` turns on with the first accepted premium and never turns off
//! - `cancelled` is monotonic; a cancelled policy takes no premiums or claims
//! - `total_paid` only ever grows by exactly `premium`

use serde::{Deserialize, Serialize};

use core_kernel::{Amount, Identity, PolicyId, Timestamp};

use crate::error::PolicyError;
use crate::events::PolicyEvent;

/// Terms supplied by the insurer at issuance
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PolicyTerms {
    /// Policyholder
    pub holder: Identity,
    /// Exact amount of each premium payment
    pub premium: Amount,
    /// Maximum amount of a single claim
    pub coverage: Amount,
    /// Validity window in seconds, counted from issuance
    pub duration_secs: u64,
}

impl PolicyTerms {
    /// Creates a set of terms
    pub fn new(holder: Identity, premium: Amount, coverage: Amount, duration_secs: u64) -> Self {
        Self {
            holder,
            premium,
            coverage,
            duration_secs,
        }
    }

    /// Validates the issuance invariants
    ///
    /// # Errors
    ///
    /// Returns [`PolicyError::InvalidTerms`] naming the first violated field.
    pub fn validate(&self) -> Result<(), PolicyError> {
        if self.holder.is_null() {
            return Err(PolicyError::invalid_terms("holder must not be the null identity"));
        }
        if self.premium.is_zero() {
            return Err(PolicyError::invalid_terms("premium must be positive"));
        }
        if self.coverage.is_zero() {
            return Err(PolicyError::invalid_terms("coverage must be positive"));
        }
        if self.duration_secs == 0 {
            return Err(PolicyError::invalid_terms("duration must be positive"));
        }
        Ok(())
    }
}

/// An issued insurance policy
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Policy {
    /// Store-assigned identifier
    id: PolicyId,
    /// Policyholder
    holder: Identity,
    /// Exact premium per payment
    premium: Amount,
    /// Claim ceiling
    coverage: Amount,
    /// Issuance time
    start_at: Timestamp,
    /// Validity window in seconds
    duration_secs: u64,
    /// Sum of all accepted premiums
    total_paid: Amount,
    /// Set by the first accepted premium
    active: bool,
    /// Set by cancellation
    cancelled: bool,
}

/// A premium the policy has agreed to accept
///
/// Produced by [`Policy::quote_premium`] without touching the policy, so the
/// caller can move value first and only then commit it with
/// [`Policy::apply_premium`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PremiumReceipt {
    pub policy_id: PolicyId,
    pub payer: Identity,
    pub amount: Amount,
    pub total_paid: Amount,
    previous_total: Amount,
}

impl PremiumReceipt {
    /// Builds the notification for this payment
    pub fn event(&self, at: Timestamp) -> PolicyEvent {
        PolicyEvent::PremiumPaid {
            policy_id: self.policy_id,
            payer: self.payer,
            amount: self.amount,
            total_paid: self.total_paid,
            timestamp: at,
        }
    }
}

impl Policy {
    /// Creates a policy from validated terms
    ///
    /// # Errors
    ///
    /// Returns error if the terms break an issuance invariant
    pub fn issue(
        id: PolicyId,
        terms: PolicyTerms,
        start_at: Timestamp,
    ) -> Result<Self, PolicyError> {
        terms.validate()?;
        Ok(Self {
            id,
            holder: terms.holder,
            premium: terms.premium,
            coverage: terms.coverage,
            start_at,
            duration_secs: terms.duration_secs,
            total_paid: Amount::ZERO,
            active: false,
            cancelled: false,
        })
    }

    /// Returns the policy ID
    pub fn id(&self) -> PolicyId {
        self.id
    }

    /// Returns the policyholder
    pub fn holder(&self) -> Identity {
        self.holder
    }

    /// Returns the premium
    pub fn premium(&self) -> Amount {
        self.premium
    }

    /// Returns the coverage ceiling
    pub fn coverage(&self) -> Amount {
        self.coverage
    }

    /// Returns the issuance time
    pub fn start_at(&self) -> Timestamp {
        self.start_at
    }

    /// Returns the validity window in seconds
    pub fn duration_secs(&self) -> u64 {
        self.duration_secs
    }

    /// Returns the total premium accepted
    pub fn total_paid(&self) -> Amount {
        self.total_paid
    }

    /// Returns true once a premium has been accepted
    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Returns true once cancelled
    pub fn is_cancelled(&self) -> bool {
        self.cancelled
    }

    /// Returns the instant the policy stops being valid
    ///
    /// `None` for an uninitialised slot (`start_at == 0`) or when the window
    /// does not fit in a timestamp; such policies never expire.
    pub fn expires_at(&self) -> Option<Timestamp> {
        if self.start_at.is_zero() {
            return None;
        }
        self.start_at.checked_add_secs(self.duration_secs)
    }

    /// Expiry rule: expired iff `now >= start_at + duration`
    pub fn is_expired(&self, now: Timestamp) -> bool {
        self.expires_at().is_some_and(|end| now >= end)
    }

    fn ensure_open(&self, now: Timestamp) -> Result<(), PolicyError> {
        if self.cancelled {
            return Err(PolicyError::Cancelled(self.id));
        }
        if let Some(expired_at) = self.expires_at().filter(|end| now >= *end) {
            return Err(PolicyError::Expired {
                policy_id: self.id,
                expired_at,
            });
        }
        Ok(())
    }

    fn ensure_holder(&self, caller: Identity) -> Result<(), PolicyError> {
        if caller != self.holder {
            return Err(PolicyError::NotHolder {
                policy_id: self.id,
                caller,
            });
        }
        Ok(())
    }

    /// Checks a premium payment and prices it, leaving the policy as is
    ///
    /// Preconditions, in order: not cancelled, not expired, caller is the
    /// holder, `value == premium`.
    pub fn quote_premium(
        &self,
        caller: Identity,
        value: Amount,
        now: Timestamp,
    ) -> Result<PremiumReceipt, PolicyError> {
        self.ensure_open(now)?;
        self.ensure_holder(caller)?;
        if value != self.premium {
            return Err(PolicyError::PremiumMismatch {
                expected: self.premium,
                received: value,
            });
        }

        Ok(PremiumReceipt {
            policy_id: self.id,
            payer: caller,
            amount: value,
            total_paid: self.total_paid.checked_add(value)?,
            previous_total: self.total_paid,
        })
    }

    /// Commits a quoted premium: `total_paid` moves to the quoted total and
    /// the policy becomes active
    ///
    /// The receipt must have been quoted against the current total. Open
    /// status is not rechecked, since it held when the value was taken.
    pub fn apply_premium(&mut self, receipt: &PremiumReceipt) -> Result<(), PolicyError> {
        if receipt.policy_id != self.id || receipt.previous_total != self.total_paid {
            return Err(PolicyError::StaleReceipt(receipt.policy_id));
        }
        self.total_paid = receipt.total_paid;
        self.active = true;
        Ok(())
    }

    /// Quotes and commits a premium in one step
    pub fn record_premium(
        &mut self,
        caller: Identity,
        value: Amount,
        now: Timestamp,
    ) -> Result<PremiumReceipt, PolicyError> {
        let receipt = self.quote_premium(caller, value, now)?;
        self.apply_premium(&receipt)?;
        Ok(receipt)
    }

    /// Checks whether `caller` may raise a claim of `amount` right now
    ///
    /// Preconditions, in order: not cancelled, not expired, active, caller is
    /// the holder, `0 < amount <= coverage`.
    pub fn ensure_claimable(
        &self,
        caller: Identity,
        amount: Amount,
        now: Timestamp,
    ) -> Result<(), PolicyError> {
        self.ensure_open(now)?;
        if !self.active {
            return Err(PolicyError::Inactive(self.id));
        }
        self.ensure_holder(caller)?;
        if amount.is_zero() || amount > self.coverage {
            return Err(PolicyError::ClaimAmountOutOfRange {
                amount,
                coverage: self.coverage,
            });
        }
        Ok(())
    }

    /// Cancels the policy
    ///
    /// Expired policies may still be cancelled; approved claims are left
    /// untouched.
    pub fn cancel(&mut self, at: Timestamp) -> Result<PolicyEvent, PolicyError> {
        if self.cancelled {
            return Err(PolicyError::AlreadyCancelled(self.id));
        }
        self.cancelled = true;
        Ok(PolicyEvent::PolicyCancelled {
            policy_id: self.id,
            timestamp: at,
        })
    }
}
