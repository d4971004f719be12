//! Policy Domain
//!
//! This crate implements the policy half of the insurance core: an
//! append-only store of policies and the transitions a policy may go through.
//!
//! # Policy Lifecycle
//!
//! ```text
//! issue (insurer) -> inactive --pay_premium (holder)--> active
//!                       \                                 \
//!                        \-> cancelled <--cancel (insurer)-/
//! ```
//!
//! `active` and `cancelled` are one-way flags. Expiry is never stored: it
//! is evaluated from `start_at + duration` against the clock whenever a gated
//! operation runs.
//!
//! # Example
//!
//! ```rust,ignore
//! use domain_policy::{PolicyStore, PolicyTerms};
//!
//! let mut store = PolicyStore::new();
//! let (policy_id, _event) = store.issue(
//!     PolicyTerms::new(holder, Amount::from(100), Amount::from(1000), 1000),
//!     clock.now(),
//! )?;
//! let receipt = store.record_premium(policy_id, holder, Amount::from(100), clock.now())?;
//! ```

pub mod aggregate;
pub mod store;
pub mod events;
pub mod error;

pub use aggregate::{Policy, PolicyTerms, PremiumReceipt};
pub use store::PolicyStore;
pub use events::PolicyEvent;
pub use error::PolicyError;
