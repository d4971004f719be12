//! Ledger port
//!
//! The settlement substrate that actually holds value. Implementations may
//! run arbitrary recipient code during a transfer, including calls back into
//! the service that initiated it; callers must not hold locks across these
//! methods.

use core_kernel::{Amount, DomainPort, Identity, PortError};

/// Atomic value movement in and out of custody
pub trait LedgerPort: DomainPort {
    /// Moves `amount` from `from` into custody
    fn receive(&self, from: Identity, amount: Amount) -> Result<(), PortError>;

    /// Moves `amount` out of custody to `to`
    fn transfer(&self, to: Identity, amount: Amount) -> Result<(), PortError>;

    /// Value currently held in custody
    fn custody_balance(&self) -> Amount;
}
