//! Treasury notifications

use serde::{Deserialize, Serialize};

use core_kernel::{Amount, Identity, Timestamp};
use crate::treasury::DepositKind;

/// Events emitted when custody changes outside of premiums and payouts
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum TreasuryEvent {
    /// Value added to custody
    Deposited {
        from: Identity,
        kind: DepositKind,
        amount: Amount,
        timestamp: Timestamp,
    },

    /// Value removed from custody to the insurer
    Withdrawn {
        to: Identity,
        amount: Amount,
        timestamp: Timestamp,
    },
}

impl TreasuryEvent {
    /// Returns the amount moved
    pub fn amount(&self) -> Amount {
        match self {
            TreasuryEvent::Deposited { amount, .. } => *amount,
            TreasuryEvent::Withdrawn { amount, .. } => *amount,
        }
    }

    /// Returns when the event occurred
    pub fn timestamp(&self) -> Timestamp {
        match self {
            TreasuryEvent::Deposited { timestamp, .. } => *timestamp,
            TreasuryEvent::Withdrawn { timestamp, .. } => *timestamp,
        }
    }

    /// Returns the event type name
    pub fn event_type(&self) -> &'static str {
        match self {
            TreasuryEvent::Deposited { .. } => "Deposited",
            TreasuryEvent::Withdrawn { .. } => "Withdrawn",
        }
    }
}
