//! Claims domain errors

use thiserror::Error;

use core_kernel::ClaimId;
use crate::claim::ClaimStatus;

/// Errors that can occur in the claims domain
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ClaimError {
    #[error("Claim not found: {0}")]
    ClaimNotFound(ClaimId),

    #[error("Invalid status transition for {claim_id} from {from:?} to {to:?}")]
    InvalidStatusTransition {
        claim_id: ClaimId,
        from: ClaimStatus,
        to: ClaimStatus,
    },
}
