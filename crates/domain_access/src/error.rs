//! Access control errors

use thiserror::Error;

use core_kernel::Identity;
use crate::context::Role;

/// Errors that can occur in the access domain
#[derive(Debug, Error, PartialEq, Eq)]
pub enum AccessError {
    /// Caller does not hold the required role
    #[error("Unauthorized: {caller} is not the {required}")]
    Unauthorized {
        caller: Identity,
        required: Role,
    },

    /// A role was about to be handed to the null identity
    #[error("Invalid argument: {0} must not be the null identity")]
    NullIdentity(&'static str),

    /// The circuit breaker is engaged
    #[error("System is paused")]
    Paused,

    /// Unpause requested while not paused
    #[error("System is not paused")]
    NotPaused,
}
