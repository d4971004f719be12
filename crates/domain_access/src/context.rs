//! The access context: roles and the circuit breaker
//!
//! An [`AccessContext`] is a plain value. The service owns one, and tests can
//! build any role configuration they need without shared fixtures.

use serde::{Deserialize, Serialize};
use std::fmt;

use core_kernel::{Identity, Timestamp};
use crate::error::AccessError;
use crate::events::AccessEvent;

/// Administrative roles
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Role {
    Owner,
    Insurer,
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Role::Owner => write!(f, "owner"),
            Role::Insurer => write!(f, "insurer"),
        }
    }
}

/// Role assignments and pause flag
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccessContext {
    owner: Identity,
    insurer: Identity,
    paused: bool,
}

impl AccessContext {
    /// Creates a context with the given owner and insurer, not paused
    ///
    /// # Errors
    ///
    /// Returns [`AccessError::NullIdentity`] if either role would be held by
    /// the null identity.
    pub fn new(owner: Identity, insurer: Identity) -> Result<Self, AccessError> {
        if owner.is_null() {
            return Err(AccessError::NullIdentity("owner"));
        }
        if insurer.is_null() {
            return Err(AccessError::NullIdentity("insurer"));
        }
        Ok(Self {
            owner,
            insurer,
            paused: false,
        })
    }

    /// Returns the current owner
    pub fn owner(&self) -> Identity {
        self.owner
    }

    /// Returns the current insurer
    pub fn insurer(&self) -> Identity {
        self.insurer
    }

    /// Returns true while the circuit breaker is engaged
    pub fn is_paused(&self) -> bool {
        self.paused
    }

    /// Fails unless `caller` is the current owner
    pub fn ensure_owner(&self, caller: Identity) -> Result<(), AccessError> {
        if caller != self.owner {
            return Err(AccessError::Unauthorized {
                caller,
                required: Role::Owner,
            });
        }
        Ok(())
    }

    /// Fails unless `caller` is the current insurer
    pub fn ensure_insurer(&self, caller: Identity) -> Result<(), AccessError> {
        if caller != self.insurer {
            return Err(AccessError::Unauthorized {
                caller,
                required: Role::Insurer,
            });
        }
        Ok(())
    }

    /// Fails while the circuit breaker is engaged
    pub fn ensure_not_paused(&self) -> Result<(), AccessError> {
        if self.paused {
            return Err(AccessError::Paused);
        }
        Ok(())
    }

    /// Rotates the insurer role
    ///
    /// # Errors
    ///
    /// - [`AccessError::Unauthorized`] if `caller` is not the owner
    /// - [`AccessError::NullIdentity`] if `new_insurer` is null
    pub fn set_insurer(
        &mut self,
        caller: Identity,
        new_insurer: Identity,
        at: Timestamp,
    ) -> Result<AccessEvent, AccessError> {
        self.ensure_owner(caller)?;
        if new_insurer.is_null() {
            return Err(AccessError::NullIdentity("insurer"));
        }

        let previous_insurer = std::mem::replace(&mut self.insurer, new_insurer);
        tracing::info!(%previous_insurer, %new_insurer, "Insurer changed");

        Ok(AccessEvent::InsurerChanged {
            previous_insurer,
            new_insurer,
            timestamp: at,
        })
    }

    /// Hands ownership to a new identity
    ///
    /// # Errors
    ///
    /// - [`AccessError::Unauthorized`] if `caller` is not the owner
    /// - [`AccessError::NullIdentity`] if `new_owner` is null
    pub fn transfer_ownership(
        &mut self,
        caller: Identity,
        new_owner: Identity,
        at: Timestamp,
    ) -> Result<AccessEvent, AccessError> {
        self.ensure_owner(caller)?;
        if new_owner.is_null() {
            return Err(AccessError::NullIdentity("owner"));
        }

        let previous_owner = std::mem::replace(&mut self.owner, new_owner);
        tracing::info!(%previous_owner, %new_owner, "Ownership transferred");

        Ok(AccessEvent::OwnershipTransferred {
            previous_owner,
            new_owner,
            timestamp: at,
        })
    }

    /// Engages the circuit breaker
    pub fn pause(&mut self, caller: Identity, at: Timestamp) -> Result<AccessEvent, AccessError> {
        self.ensure_owner(caller)?;
        self.ensure_not_paused()?;

        self.paused = true;
        tracing::warn!(by = %caller, "System paused");

        Ok(AccessEvent::Paused {
            by: caller,
            timestamp: at,
        })
    }

    /// Releases the circuit breaker
    pub fn unpause(&mut self, caller: Identity, at: Timestamp) -> Result<AccessEvent, AccessError> {
        self.ensure_owner(caller)?;
        if !self.paused {
            return Err(AccessError::NotPaused);
        }

        self.paused = false;
        tracing::info!(by = %caller, "System unpaused");

        Ok(AccessEvent::Unpaused {
            by: caller,
            timestamp: at,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn context() -> (AccessContext, Identity, Identity) {
        let owner = Identity::new();
        let insurer = Identity::new();
        (AccessContext::new(owner, insurer).unwrap(), owner, insurer)
    }

    #[test]
    fn test_new_rejects_null_roles() {
        assert_eq!(
            AccessContext::new(Identity::NULL, Identity::new()),
            Err(AccessError::NullIdentity("owner"))
        );
        assert_eq!(
            AccessContext::new(Identity::new(), Identity::NULL),
            Err(AccessError::NullIdentity("insurer"))
        );
    }

    #[test]
    fn test_insurer_guard() {
        let (ctx, owner, insurer) = context();
        assert!(ctx.ensure_insurer(insurer).is_ok());
        assert_eq!(
            ctx.ensure_insurer(owner),
            Err(AccessError::Unauthorized {
                caller: owner,
                required: Role::Insurer
            })
        );
    }

    #[test]
    fn test_set_insurer_checks_owner_before_argument() {
        let (mut ctx, _, insurer) = context();
        let err = ctx.set_insurer(insurer, Identity::NULL, Timestamp::ZERO).unwrap_err();
        assert!(matches!(err, AccessError::Unauthorized { .. }));
        assert_eq!(ctx.insurer(), insurer);
    }

    #[test]
    fn test_pause_twice_fails() {
        let (mut ctx, owner, _) = context();
        ctx.pause(owner, Timestamp::ZERO).unwrap();
        assert_eq!(ctx.pause(owner, Timestamp::ZERO), Err(AccessError::Paused));
        assert!(ctx.is_paused());
    }
}
