//! Reentrancy guard
//!
//! A single flag shared by every guarded operation. Entering hands out a
//! [`GuardToken`]; the flag clears when the token drops, on every exit path.

use std::sync::atomic::{AtomicBool, Ordering};

/// Mutual exclusion flag for operations that move value out of custody
#[derive(Debug, Default)]
pub struct ReentrancyGuard {
    entered: AtomicBool,
}

impl ReentrancyGuard {
    /// Creates a released guard
    pub fn new() -> Self {
        Self::default()
    }

    /// Claims the guard, or returns `None` if a guarded call is in flight
    pub fn enter(&self) -> Option<GuardToken<'_>> {
        self.entered
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .ok()
            .map(|_| GuardToken { guard: self })
    }

    /// Returns true while a token is alive
    pub fn is_entered(&self) -> bool {
        self.entered.load(Ordering::Acquire)
    }
}

/// Proof of holding the [`ReentrancyGuard`]
#[derive(Debug)]
#[must_use = "the guard is released as soon as the token is dropped"]
pub struct GuardToken<'a> {
    guard: &'a ReentrancyGuard,
}

impl Drop for GuardToken<'_> {
    fn drop(&mut self) {
        self.guard.entered.store(false, Ordering::Release);
    }
}
