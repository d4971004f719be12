//! Claims Domain
//!
//! This crate implements the claim store and the claim state machine, from
//! submission through adjudication to payout.
//!
//! # Claim Lifecycle
//!
//! ```text
//! Pending -> Approved -> Paid
//!        \-> Rejected
//! ```
//!
//! Each edge is traversed at most once and there are no reverse edges. The
//! single exception is internal: a payout whose value transfer fails is put
//! back from Paid to Approved so it can be retried.

pub mod claim;
pub mod store;
pub mod payment;
pub mod events;
pub mod error;

pub use claim::{Claim, ClaimStatus};
pub use store::ClaimStore;
pub use payment::ClaimPayout;
pub use events::ClaimEvent;
pub use error::ClaimError;
