//! Core Kernel - Foundational types for the policy and claims core
//!
//! This crate provides the building blocks shared by every domain crate:
//! - Actor identities and dense sequential record identifiers
//! - Non-negative amounts with precise decimal arithmetic
//! - Timestamps and the clock port used for lazy expiry checks
//! - Port error types for external collaborators

pub mod amount;
pub mod temporal;
pub mod identifiers;
pub mod ports;
pub mod error;

pub use amount::{Amount, AmountError};
pub use temporal::{Clock, ManualClock, SystemClock, Timestamp};
pub use identifiers::{ClaimId, Identity, PolicyId};
pub use ports::{DomainPort, PortError};
pub use error::CoreError;
