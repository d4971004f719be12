//! Test Utilities Crate
//!
//! Provides shared test infrastructure, fixtures, and helpers for the
//! insurance core test suite.
//!
//! # Modules
//!
//! - `fixtures`: Actors and standard policy terms
//! - `builders`: Builder for policy terms with sensible defaults
//! - `ledger`: Scripted ledger with failure injection and transfer hooks
//! - `assertions`: Assertion helpers for policy and claim invariants
//! - `generators`: Property-based test data generators

pub mod fixtures;
pub mod builders;
pub mod ledger;
pub mod assertions;
pub mod generators;

pub use fixtures::*;
pub use builders::*;
pub use ledger::*;
pub use assertions::*;
pub use generators::*;
