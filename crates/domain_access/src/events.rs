//! Access control notifications

use serde::{Deserialize, Serialize};

use core_kernel::{Identity, Timestamp};

/// Events emitted when roles or the pause flag change
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum AccessEvent {
    /// Ownership handed to a new identity
    OwnershipTransferred {
        previous_owner: Identity,
        new_owner: Identity,
        timestamp: Timestamp,
    },

    /// Operational insurer rotated
    InsurerChanged {
        previous_insurer: Identity,
        new_insurer: Identity,
        timestamp: Timestamp,
    },

    /// Circuit breaker engaged
    Paused {
        by: Identity,
        timestamp: Timestamp,
    },

    /// Circuit breaker released
    Unpaused {
        by: Identity,
        timestamp: Timestamp,
    },
}

impl AccessEvent {
    /// Returns the timestamp of this event
    pub fn timestamp(&self) -> Timestamp {
        match self {
            AccessEvent::OwnershipTransferred { timestamp, .. } => *timestamp,
            AccessEvent::InsurerChanged { timestamp, .. } => *timestamp,
            AccessEvent::Paused { timestamp, .. } => *timestamp,
            AccessEvent::Unpaused { timestamp, .. } => *timestamp,
        }
    }

    /// Returns the event type name
    pub fn event_type(&self) -> &'static str {
        match self {
            AccessEvent::OwnershipTransferred { .. } => "OwnershipTransferred",
            AccessEvent::InsurerChanged { .. } => "InsurerChanged",
            AccessEvent::Paused { .. } => "Paused",
            AccessEvent::Unpaused { .. } => "Unpaused",
        }
    }
}
