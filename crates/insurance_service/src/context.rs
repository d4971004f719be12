//! Per-call context

use serde::{Deserialize, Serialize};

use core_kernel::{Amount, Identity};

/// Who is calling, and what value rides along with the call
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CallContext {
    /// Verified identity of the caller
    pub caller: Identity,
    /// Value attached to the call; zero when none
    pub value: Amount,
}

impl CallContext {
    /// A call carrying no value
    pub fn new(caller: Identity) -> Self {
        Self {
            caller,
            value: Amount::ZERO,
        }
    }

    /// A call carrying `value`
    pub fn with_value(caller: Identity, value: Amount) -> Self {
        Self { caller, value }
    }
}

impl From<Identity> for CallContext {
    fn from(caller: Identity) -> Self {
        Self::new(caller)
    }
}
