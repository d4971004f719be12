//! Shared setup for service integration tests

#![allow(dead_code)]

use std::sync::Arc;

use core_kernel::{Amount, ClaimId, ManualClock, PolicyId};
use insurance_service::{CallContext, InsuranceService};
use test_utils::{
    claim_reason, Actors, ScriptedLedger, START, STANDARD_COVERAGE, STANDARD_DURATION_SECS,
    STANDARD_PREMIUM,
};

pub const HOLDER_FUNDS: u64 = 10_000;
pub const INSURER_FUNDS: u64 = 100_000;

pub struct World {
    pub service: Arc<InsuranceService>,
    pub ledger: Arc<ScriptedLedger>,
    pub clock: Arc<ManualClock>,
    pub actors: Actors,
}

pub fn world() -> World {
    let actors = Actors::new();
    let ledger = Arc::new(
        ScriptedLedger::new()
            .with_account(actors.holder, HOLDER_FUNDS)
            .with_account(actors.insurer, INSURER_FUNDS)
            .with_account(actors.stranger, HOLDER_FUNDS),
    );
    let clock = Arc::new(ManualClock::new(START));
    let service = InsuranceService::new(actors.owner, actors.insurer, ledger.clone(), clock.clone())
        .expect("valid roles");

    World {
        service: Arc::new(service),
        ledger,
        clock,
        actors,
    }
}

impl World {
    pub fn insurer(&self) -> CallContext {
        CallContext::new(self.actors.insurer)
    }

    pub fn owner(&self) -> CallContext {
        CallContext::new(self.actors.owner)
    }

    pub fn holder(&self) -> CallContext {
        CallContext::new(self.actors.holder)
    }

    pub fn premium_payment(&self) -> CallContext {
        CallContext::with_value(self.actors.holder, Amount::from(STANDARD_PREMIUM))
    }

    /// Issues the standard policy to the holder
    pub fn issue(&self) -> PolicyId {
        self.service
            .issue_policy(
                self.insurer(),
                self.actors.holder,
                Amount::from(STANDARD_PREMIUM),
                Amount::from(STANDARD_COVERAGE),
                STANDARD_DURATION_SECS,
            )
            .expect("issue")
    }

    /// Issues and pays the standard policy
    pub fn active_policy(&self) -> PolicyId {
        let id = self.issue();
        self.service.pay_premium(self.premium_payment(), id).expect("premium");
        id
    }

    /// Adds insurer funding to custody
    pub fn fund(&self, amount: u64) {
        self.service
            .fund(CallContext::with_value(self.actors.insurer, Amount::from(amount)))
            .expect("fund");
    }

    /// Active policy with one approved claim of `amount`
    pub fn approved_claim(&self, amount: u64) -> (PolicyId, ClaimId) {
        let policy_id = self.active_policy();
        let claim_id = self
            .service
            .submit_claim(self.holder(), policy_id, Amount::from(amount), claim_reason())
            .expect("submit");
        self.service.approve_claim(self.insurer(), claim_id).expect("approve");
        (policy_id, claim_id)
    }
}
