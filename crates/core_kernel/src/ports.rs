//! Ports for external collaborators
//!
//! The core talks to everything it does not own (the settlement ledger, the
//! clock) through narrow port traits. Each domain defines its own port trait
//! extending [`DomainPort`]; adapters implement it for a concrete substrate.
//!
//! ```text
//!   InsuranceService ──► LedgerPort ──► InMemoryLedger / settlement substrate
//!                    └─► Clock      ──► SystemClock / ManualClock
//! ```

use std::fmt;
use thiserror::Error;

/// Error type for port operations
///
/// Every adapter reports failures through this type so the core can treat
/// them uniformly. A port error never leaves partial effects behind in the
/// adapter.
#[derive(Debug, Error)]
pub enum PortError {
    /// The counterparty refused the operation
    #[error("Rejected by {party}: {reason}")]
    Rejected {
        party: String,
        reason: String,
    },

    /// The paying side does not hold enough value
    #[error("Insufficient balance for {party}: {message}")]
    InsufficientBalance {
        party: String,
        message: String,
    },

    /// The external system is unavailable
    #[error("Service unavailable: {service}")]
    ServiceUnavailable {
        service: String,
    },

    /// An internal error occurred
    #[error("Internal error: {message}")]
    Internal {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },
}

impl PortError {
    /// Creates a Rejected error
    pub fn rejected(party: impl fmt::Display, reason: impl Into<String>) -> Self {
        PortError::Rejected {
            party: party.to_string(),
            reason: reason.into(),
        }
    }

    /// Creates an InsufficientBalance error
    pub fn insufficient_balance(party: impl fmt::Display, message: impl Into<String>) -> Self {
        PortError::InsufficientBalance {
            party: party.to_string(),
            message: message.into(),
        }
    }

    /// Creates an Internal error
    pub fn internal(message: impl Into<String>) -> Self {
        PortError::Internal {
            message: message.into(),
            source: None,
        }
    }

    /// Returns true if the failure may succeed when resubmitted later
    pub fn is_transient(&self) -> bool {
        matches!(self, PortError::ServiceUnavailable { .. })
    }
}

/// Marker trait for all domain ports
///
/// Ports must be shareable across threads so the service that owns them can
/// be handed out behind an `Arc`.
pub trait DomainPort: Send + Sync + 'static {}
