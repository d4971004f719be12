//! Treasury domain errors

use thiserror::Error;

use core_kernel::{Amount, PortError};

/// Errors that can occur in the treasury domain
#[derive(Debug, Error)]
pub enum TreasuryError {
    /// Zero-value deposits and withdrawals are refused
    #[error("Amount must be positive")]
    ZeroAmount,

    /// Custody holds less than requested
    #[error("Insufficient funds in custody: available {available}, requested {requested}")]
    InsufficientFunds {
        available: Amount,
        requested: Amount,
    },

    /// The ledger refused to move value out of custody
    #[error("Transfer out of custody failed: {0}")]
    TransferFailed(#[source] PortError),

    /// The ledger refused to move value into custody
    #[error("Deposit into custody failed: {0}")]
    DepositFailed(#[source] PortError),
}
