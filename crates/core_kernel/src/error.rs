//! Kernel-level errors

use thiserror::Error;
use crate::amount::AmountError;

/// Errors raised outside any single domain
#[derive(Debug, Error)]
pub enum CoreError {
    #[error("Amount error: {0}")]
    Amount(#[from] AmountError),

    /// Startup settings that cannot produce a working service
    #[error("Configuration error: {0}")]
    Configuration(String),
}

impl CoreError {
    pub fn configuration(message: impl Into<String>) -> Self {
        CoreError::Configuration(message.into())
    }
}
