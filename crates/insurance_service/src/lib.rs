//! Insurance Service
//!
//! The composition root of the policy and claims core. An
//! [`InsuranceService`] owns the access context, both record stores, the
//! treasury and the event journal, and exposes every operation as a method
//! taking a [`CallContext`].
//!
//! # Request Flow
//!
//! ```text
//! call ──► pause check ──► role check ──► reentrancy guard ──► store mutation
//!                                                                   │
//!                              journal ◄── relock ◄── ledger call ◄─┘
//! ```
//!
//! Store state is locked only for the checks and effects of a call. The lock
//! is released before value moves through the ledger, so a recipient that
//! calls back in reaches the service and is refused by the guard instead of
//! deadlocking.
//!
//! # Example
//!
//! ```rust,ignore
//! let service = InsuranceService::new(owner, insurer, ledger, clock)?;
//! let policy_id =
//!     service.issue_policy(CallContext::new(insurer), holder, premium, coverage, 1000)?;
//! service.pay_premium(CallContext::with_value(holder, premium), policy_id)?;
//! ```

pub mod config;
pub mod context;
pub mod error;
pub mod events;
pub mod guard;
pub mod service;
pub mod telemetry;

pub use config::{LogConfig, ServiceConfig};
pub use context::CallContext;
pub use error::{ErrorKind, ServiceError};
pub use events::InsuranceEvent;
pub use guard::{GuardToken, ReentrancyGuard};
pub use service::InsuranceService;
