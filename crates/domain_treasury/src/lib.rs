//! Treasury Domain
//!
//! Custody of the funds used to pay approved claims. The balance itself is
//! never duplicated locally: it lives with the settlement ledger, reached
//! through the [`LedgerPort`].
//!
//! # Value Flows
//!
//! ```text
//! holder --premium--> custody          (LedgerPort::receive)
//! anyone --deposit--> custody          (LedgerPort::receive)
//! custody --payout--> holder           (LedgerPort::transfer)
//! custody --withdraw--> insurer        (LedgerPort::transfer)
//! ```
//!
//! Every ledger call is all-or-nothing: a failed call moves nothing.

pub mod ports;
pub mod ledger;
pub mod treasury;
pub mod events;
pub mod error;

pub use ports::LedgerPort;
pub use ledger::{InMemoryLedger, LedgerEntry};
pub use treasury::{DepositKind, Treasury};
pub use events::TreasuryEvent;
pub use error::TreasuryError;
