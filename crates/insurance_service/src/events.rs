//! Service-level event journal entries

use serde::{Deserialize, Serialize};

use core_kernel::Timestamp;
use domain_access::AccessEvent;
use domain_claims::ClaimEvent;
use domain_policy::PolicyEvent;
use domain_treasury::TreasuryEvent;

/// Any notification produced by a successful transition
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "domain", content = "event", rename_all = "snake_case")]
pub enum InsuranceEvent {
    Access(AccessEvent),
    Policy(PolicyEvent),
    Claim(ClaimEvent),
    Treasury(TreasuryEvent),
}

impl InsuranceEvent {
    /// Returns when the event occurred
    pub fn timestamp(&self) -> Timestamp {
        match self {
            InsuranceEvent::Access(e) => e.timestamp(),
            InsuranceEvent::Policy(e) => e.timestamp(),
            InsuranceEvent::Claim(e) => e.timestamp(),
            InsuranceEvent::Treasury(e) => e.timestamp(),
        }
    }

    /// Returns the event type name
    pub fn event_type(&self) -> &'static str {
        match self {
            InsuranceEvent::Access(e) => e.event_type(),
            InsuranceEvent::Policy(e) => e.event_type(),
            InsuranceEvent::Claim(e) => e.event_type(),
            InsuranceEvent::Treasury(e) => e.event_type(),
        }
    }
}

impl From<AccessEvent> for InsuranceEvent {
    fn from(event: AccessEvent) -> Self {
        InsuranceEvent::Access(event)
    }
}

impl From<PolicyEvent> for InsuranceEvent {
    fn from(event: PolicyEvent) -> Self {
        InsuranceEvent::Policy(event)
    }
}

impl From<ClaimEvent> for InsuranceEvent {
    fn from(event: ClaimEvent) -> Self {
        InsuranceEvent::Claim(event)
    }
}

impl From<TreasuryEvent> for InsuranceEvent {
    fn from(event: TreasuryEvent) -> Self {
        InsuranceEvent::Treasury(event)
    }
}
