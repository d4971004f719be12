//! The insurance service
//!
//! Every mutating operation follows the same shape:
//!
//! 1. Lock state; check pause, then role, then (for guarded calls) take the
//!    reentrancy guard.
//! 2. Apply the store mutation while still locked. Value coming in is the
//!    exception: a premium is only quoted here.
//! 3. Unlock, then move value through the ledger if the call needs to.
//! 4. Relock to commit the premium and journal the event, or to undo step 2
//!    if a payout was refused.
//!
//! A failed call leaves no trace in state or in the journal.

use parking_lot::Mutex;
use std::sync::Arc;

use core_kernel::{Amount, ClaimId, Clock, Identity, PolicyId, Timestamp};
use domain_access::AccessContext;
use domain_claims::{Claim, ClaimStore};
use domain_policy::{Policy, PolicyStore, PolicyTerms};
use domain_treasury::{DepositKind, LedgerPort, Treasury, TreasuryError};

use crate::config::ServiceConfig;
use crate::context::CallContext;
use crate::error::ServiceError;
use crate::events::InsuranceEvent;
use crate::guard::{GuardToken, ReentrancyGuard};

#[derive(Debug)]
struct State {
    access: AccessContext,
    policies: PolicyStore,
    claims: ClaimStore,
    journal: Vec<InsuranceEvent>,
}

impl State {
    fn record(&mut self, event: impl Into<InsuranceEvent>) {
        self.journal.push(event.into());
    }
}

/// Policy and claim lifecycle with role-gated transitions and guarded custody
pub struct InsuranceService {
    state: Mutex<State>,
    treasury: Treasury,
    clock: Arc<dyn Clock>,
    guard: ReentrancyGuard,
}

impl std::fmt::Debug for InsuranceService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("InsuranceService")
            .field("treasury", &self.treasury)
            .field("guard", &self.guard)
            .finish_non_exhaustive()
    }
}

/// Runs a call body, logging it if refused
fn logged<T>(
    operation: &'static str,
    body: impl FnOnce() -> Result<T, ServiceError>,
) -> Result<T, ServiceError> {
    let result = body();
    if let Err(err) = &result {
        tracing::warn!(operation, kind = %err.kind(), error = %err, "Call refused");
    }
    result
}

impl InsuranceService {
    /// Creates a service with the given roles, ledger and clock
    pub fn new(
        owner: Identity,
        insurer: Identity,
        ledger: Arc<dyn LedgerPort>,
        clock: Arc<dyn Clock>,
    ) -> Result<Self, ServiceError> {
        let access = AccessContext::new(owner, insurer)?;
        tracing::info!(%owner, %insurer, "Insurance service initialised");

        Ok(Self {
            state: Mutex::new(State {
                access,
                policies: PolicyStore::new(),
                claims: ClaimStore::new(),
                journal: Vec::new(),
            }),
            treasury: Treasury::new(ledger),
            clock,
            guard: ReentrancyGuard::new(),
        })
    }

    /// Creates a service from validated configuration
    pub fn from_config(
        config: &ServiceConfig,
        ledger: Arc<dyn LedgerPort>,
        clock: Arc<dyn Clock>,
    ) -> Result<Self, ServiceError> {
        config.validate()?;
        Self::new(config.owner, config.insurer, ledger, clock)
    }

    fn enter(&self, operation: &'static str) -> Result<GuardToken<'_>, ServiceError> {
        self.guard.enter().ok_or_else(|| {
            tracing::warn!(operation, "Reentrant call blocked");
            ServiceError::ReentrancyBlocked
        })
    }

    // ------------------------------------------------------------------
    // Owner operations
    // ------------------------------------------------------------------

    /// Rotates the insurer role
    pub fn set_insurer(&self, ctx: CallContext, new_insurer: Identity) -> Result<(), ServiceError> {
        logged("set_insurer", || {
            let now = self.clock.now();
            let mut state = self.state.lock();
            let event = state.access.set_insurer(ctx.caller, new_insurer, now)?;
            state.record(event);
            Ok(())
        })
    }

    /// Hands the owner role to `new_owner`
    pub fn transfer_ownership(
        &self,
        ctx: CallContext,
        new_owner: Identity,
    ) -> Result<(), ServiceError> {
        logged("transfer_ownership", || {
            let now = self.clock.now();
            let mut state = self.state.lock();
            let event = state.access.transfer_ownership(ctx.caller, new_owner, now)?;
            state.record(event);
            Ok(())
        })
    }

    /// Engages the circuit breaker
    pub fn pause(&self, ctx: CallContext) -> Result<(), ServiceError> {
        logged("pause", || {
            let now = self.clock.now();
            let mut state = self.state.lock();
            let event = state.access.pause(ctx.caller, now)?;
            state.record(event);
            Ok(())
        })
    }

    /// Releases the circuit breaker
    pub fn unpause(&self, ctx: CallContext) -> Result<(), ServiceError> {
        logged("unpause", || {
            let now = self.clock.now();
            let mut state = self.state.lock();
            let event = state.access.unpause(ctx.caller, now)?;
            state.record(event);
            Ok(())
        })
    }

    // ------------------------------------------------------------------
    // Policy operations
    // ------------------------------------------------------------------

    /// Issues a policy to `holder`, valid for `duration_secs` from now
    ///
    /// # Returns
    ///
    /// The new policy's id, equal to the number of policies issued before it
    pub fn issue_policy(
        &self,
        ctx: CallContext,
        holder: Identity,
        premium: Amount,
        coverage: Amount,
        duration_secs: u64,
    ) -> Result<PolicyId, ServiceError> {
        logged("issue_policy", || {
            let now = self.clock.now();
            let mut state = self.state.lock();
            state.access.ensure_not_paused()?;
            state.access.ensure_insurer(ctx.caller)?;

            let terms = PolicyTerms::new(holder, premium, coverage, duration_secs);
            let (policy_id, event) = state.policies.issue(terms, now)?;
            state.record(event);

            tracing::info!(
                %policy_id,
                %holder,
                %premium,
                %coverage,
                duration_secs,
                "Policy issued"
            );
            Ok(policy_id)
        })
    }

    /// Pays one premium on a policy with the value attached to `ctx`
    ///
    /// The value must equal the premium exactly. The policy is only checked
    /// before the value moves into custody; it changes once custody holds
    /// the value, so a refused deposit leaves it untouched.
    ///
    /// # Returns
    ///
    /// The policy's new cumulative total
    pub fn pay_premium(
        &self,
        ctx: CallContext,
        policy_id: PolicyId,
    ) -> Result<Amount, ServiceError> {
        logged("pay_premium", || {
            let now = self.clock.now();
            let state = self.state.lock();
            state.access.ensure_not_paused()?;
            let _token = self.enter("pay_premium")?;

            let receipt = state.policies.quote_premium(policy_id, ctx.caller, ctx.value, now)?;
            drop(state);

            self.treasury.collect(ctx.caller, ctx.value).map_err(|err| match err {
                TreasuryError::DepositFailed(source) => ServiceError::DepositFailed {
                    amount: ctx.value,
                    source,
                },
                other => other.into(),
            })?;

            let mut state = self.state.lock();
            if let Err(err) = state.policies.apply_premium(&receipt) {
                drop(state);
                self.refund(ctx.caller, ctx.value);
                return Err(err.into());
            }
            state.record(receipt.event(now));
            drop(state);

            tracing::info!(
                %policy_id,
                caller = %ctx.caller,
                amount = %receipt.amount,
                total_paid = %receipt.total_paid,
                "Premium paid"
            );
            Ok(receipt.total_paid)
        })
    }

    /// Hands back value taken into custody for a premium that could not be
    /// committed
    fn refund(&self, to: Identity, amount: Amount) {
        match self.treasury.pay_out(to, amount) {
            Ok(()) => tracing::warn!(%to, %amount, "Premium refunded"),
            Err(err) => tracing::error!(%to, %amount, error = %err, "Premium refund failed"),
        }
    }

    /// Cancels a policy; approved claims on it stay payable
    pub fn cancel_policy(&self, ctx: CallContext, policy_id: PolicyId) -> Result<(), ServiceError> {
        logged("cancel_policy", || {
            let now = self.clock.now();
            let mut state = self.state.lock();
            state.access.ensure_not_paused()?;
            state.access.ensure_insurer(ctx.caller)?;

            let event = state.policies.cancel(policy_id, now)?;
            state.record(event);

            tracing::info!(%policy_id, "Policy cancelled");
            Ok(())
        })
    }

    // ------------------------------------------------------------------
    // Claim operations
    // ------------------------------------------------------------------

    /// Raises a claim against a policy
    ///
    /// # Returns
    ///
    /// The new claim's global id
    pub fn submit_claim(
        &self,
        ctx: CallContext,
        policy_id: PolicyId,
        amount: Amount,
        reason: impl Into<String>,
    ) -> Result<ClaimId, ServiceError> {
        let reason = reason.into();
        logged("submit_claim", || {
            let now = self.clock.now();
            let mut state = self.state.lock();
            state.access.ensure_not_paused()?;
            state
                .policies
                .get(policy_id)?
                .ensure_claimable(ctx.caller, amount, now)?;

            let (claim_id, event) = state.claims.submit(policy_id, ctx.caller, amount, reason, now);
            state.record(event);

            tracing::info!(%claim_id, %policy_id, caller = %ctx.caller, %amount, "Claim submitted");
            Ok(claim_id)
        })
    }

    /// Approves a pending claim; no value moves
    pub fn approve_claim(&self, ctx: CallContext, claim_id: ClaimId) -> Result<(), ServiceError> {
        logged("approve_claim", || {
            let now = self.clock.now();
            let mut state = self.state.lock();
            state.access.ensure_not_paused()?;
            state.access.ensure_insurer(ctx.caller)?;

            let event = state.claims.approve(claim_id, now)?;
            state.record(event);

            tracing::info!(%claim_id, "Claim approved");
            Ok(())
        })
    }

    /// Rejects a pending claim
    pub fn reject_claim(
        &self,
        ctx: CallContext,
        claim_id: ClaimId,
        reason: impl Into<String>,
    ) -> Result<(), ServiceError> {
        let reason = reason.into();
        logged("reject_claim", || {
            let now = self.clock.now();
            let mut state = self.state.lock();
            state.access.ensure_not_paused()?;
            state.access.ensure_insurer(ctx.caller)?;

            let event = state.claims.reject(claim_id, reason, now)?;
            state.record(event);

            tracing::info!(%claim_id, "Claim rejected");
            Ok(())
        })
    }

    /// Pays an approved claim to its claimant
    ///
    /// The claim is marked paid before the transfer starts. If the ledger
    /// refuses, it goes back to approved and the call fails with
    /// `PayoutFailed`.
    pub fn pay_claim(&self, ctx: CallContext, claim_id: ClaimId) -> Result<(), ServiceError> {
        logged("pay_claim", || {
            let now = self.clock.now();
            let mut state = self.state.lock();
            state.access.ensure_not_paused()?;
            state.access.ensure_insurer(ctx.caller)?;
            let _token = self.enter("pay_claim")?;

            let amount = state.claims.ensure_approved(claim_id)?.amount;
            self.treasury.ensure_covers(amount)?;
            let payout = state.claims.mark_paid(claim_id)?;
            drop(state);

            if let Err(err) = self.treasury.pay_out(payout.payee, payout.amount) {
                self.state.lock().claims.revert_payout(&payout)?;
                let source = match err {
                    TreasuryError::TransferFailed(source) => source,
                    other => return Err(other.into()),
                };
                return Err(ServiceError::PayoutFailed { claim_id, amount, source });
            }

            self.state.lock().record(payout.event(now));
            tracing::info!(
                %claim_id,
                policy_id = %payout.policy_id,
                payee = %payout.payee,
                %amount,
                "Claim paid"
            );
            Ok(())
        })
    }

    // ------------------------------------------------------------------
    // Treasury operations
    // ------------------------------------------------------------------

    /// Insurer top-up of custody with the attached value
    pub fn fund(&self, ctx: CallContext) -> Result<(), ServiceError> {
        logged("fund", || {
            {
                let state = self.state.lock();
                state.access.ensure_not_paused()?;
                state.access.ensure_insurer(ctx.caller)?;
            }
            self.deposit_into_custody(ctx, DepositKind::Funding)
        })
    }

    /// Adds the attached value to custody; open to any caller
    pub fn deposit(&self, ctx: CallContext) -> Result<(), ServiceError> {
        logged("deposit", || {
            self.state.lock().access.ensure_not_paused()?;
            self.deposit_into_custody(ctx, DepositKind::Open)
        })
    }

    fn deposit_into_custody(
        &self,
        ctx: CallContext,
        kind: DepositKind,
    ) -> Result<(), ServiceError> {
        let now = self.clock.now();
        let event = self
            .treasury
            .deposit(ctx.caller, kind, ctx.value, now)
            .map_err(|err| match err {
                TreasuryError::DepositFailed(source) => ServiceError::DepositFailed {
                    amount: ctx.value,
                    source,
                },
                other => other.into(),
            })?;

        self.state.lock().record(event);
        tracing::info!(caller = %ctx.caller, amount = %ctx.value, ?kind, "Custody deposit");
        Ok(())
    }

    /// Moves `amount` out of custody to the insurer
    pub fn withdraw(&self, ctx: CallContext, amount: Amount) -> Result<(), ServiceError> {
        logged("withdraw", || {
            let now = self.clock.now();
            let state = self.state.lock();
            state.access.ensure_not_paused()?;
            state.access.ensure_insurer(ctx.caller)?;
            let _token = self.enter("withdraw")?;
            drop(state);

            let event = self
                .treasury
                .withdraw(ctx.caller, amount, now)
                .map_err(|err| match err {
                    TreasuryError::TransferFailed(source) => {
                        ServiceError::WithdrawFailed { amount, source }
                    }
                    other => other.into(),
                })?;

            self.state.lock().record(event);
            tracing::info!(to = %ctx.caller, %amount, "Custody withdrawn");
            Ok(())
        })
    }

    // ------------------------------------------------------------------
    // Queries
    // ------------------------------------------------------------------

    /// Number of policies ever issued
    pub fn policy_count(&self) -> usize {
        self.state.lock().policies.len()
    }

    /// Number of claims ever submitted
    pub fn claim_count(&self) -> usize {
        self.state.lock().claims.len()
    }

    /// Snapshot of a policy
    pub fn policy(&self, policy_id: PolicyId) -> Result<Policy, ServiceError> {
        Ok(self.state.lock().policies.get(policy_id)?.clone())
    }

    /// Snapshot of a claim
    pub fn claim(&self, claim_id: ClaimId) -> Result<Claim, ServiceError> {
        Ok(self.state.lock().claims.get(claim_id)?.clone())
    }

    /// Global ids of the claims raised against a policy, oldest first
    pub fn claim_ids_for_policy(&self, policy_id: PolicyId) -> Result<Vec<ClaimId>, ServiceError> {
        let state = self.state.lock();
        state.policies.get(policy_id)?;
        Ok(state.claims.ids_for_policy(policy_id).to_vec())
    }

    /// Applies the expiry rule to a policy at the current time
    pub fn is_expired(&self, policy_id: PolicyId) -> Result<bool, ServiceError> {
        let now = self.clock.now();
        Ok(self.state.lock().policies.is_expired(policy_id, now)?)
    }

    /// Current owner
    pub fn owner(&self) -> Identity {
        self.state.lock().access.owner()
    }

    /// Current insurer
    pub fn insurer(&self) -> Identity {
        self.state.lock().access.insurer()
    }

    /// Returns true while the circuit breaker is engaged
    pub fn is_paused(&self) -> bool {
        self.state.lock().access.is_paused()
    }

    /// Value held in custody
    pub fn custody_balance(&self) -> Amount {
        self.treasury.balance()
    }

    /// Current time according to the service clock
    pub fn now(&self) -> Timestamp {
        self.clock.now()
    }

    /// Drains the event journal, oldest first
    pub fn take_events(&self) -> Vec<InsuranceEvent> {
        std::mem::take(&mut self.state.lock().journal)
    }
}
