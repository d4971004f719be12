//! Access Control Domain
//!
//! Holds the two administrative roles and the global circuit breaker:
//!
//! - **Owner**: the ultimate authority. Set once at construction and changed
//!   only by the owner itself. Rotates the insurer and flips the pause flag.
//! - **Insurer**: the operational role that issues policies, adjudicates and
//!   pays claims, and manages custody.
//! - **Paused**: when set, every state-mutating policy, claim and treasury
//!   operation is refused.
//!
//! Role checks are evaluated against the current context on every call, so a
//! rotation takes effect for the very next call.

pub mod context;
pub mod events;
pub mod error;

pub use context::{AccessContext, Role};
pub use events::AccessEvent;
pub use error::AccessError;
