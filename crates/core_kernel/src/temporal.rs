//! Time handling for lifecycle rules
//!
//! Policy validity windows are measured in whole seconds since the Unix
//! epoch. The current time is read through the [`Clock`] port so that expiry
//! can be exercised deterministically in tests with [`ManualClock`].

use chrono::{DateTime, TimeZone, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

/// A point in time, in seconds since the Unix epoch
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Timestamp(u64);

impl Timestamp {
    /// The epoch; marks a slot that was never initialised
    pub const ZERO: Timestamp = Timestamp(0);

    /// Creates a timestamp from seconds since the epoch
    pub const fn from_secs(secs: u64) -> Self {
        Self(secs)
    }

    /// Returns seconds since the epoch
    pub fn as_secs(&self) -> u64 {
        self.0
    }

    /// Returns true for the epoch
    pub fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Adds a number of seconds, or `None` on overflow
    pub fn checked_add_secs(&self, secs: u64) -> Option<Timestamp> {
        self.0.checked_add(secs).map(Timestamp)
    }

    /// Converts to a UTC date-time for display and export
    pub fn to_datetime(&self) -> Option<DateTime<Utc>> {
        let secs = i64::try_from(self.0).ok()?;
        Utc.timestamp_opt(secs, 0).single()
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.to_datetime() {
            Some(dt) => write!(f, "{}", dt.to_rfc3339()),
            None => write!(f, "{}s", self.0),
        }
    }
}

impl From<DateTime<Utc>> for Timestamp {
    fn from(dt: DateTime<Utc>) -> Self {
        Self(u64::try_from(dt.timestamp()).unwrap_or(0))
    }
}

/// Source of the current time
pub trait Clock: Send + Sync {
    /// Returns the current time
    fn now(&self) -> Timestamp;
}

/// Wall clock backed by the system time
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Timestamp {
        Timestamp::from(Utc::now())
    }
}

/// A clock that only moves when told to
#[derive(Debug, Default)]
pub struct ManualClock {
    secs: AtomicU64,
}

impl ManualClock {
    /// Creates a clock frozen at `start`
    pub fn new(start: Timestamp) -> Self {
        Self {
            secs: AtomicU64::new(start.as_secs()),
        }
    }

    /// Moves the clock to `at`
    pub fn set(&self, at: Timestamp) {
        self.secs.store(at.as_secs(), Ordering::SeqCst);
    }

    /// Moves the clock forward by `secs`
    pub fn advance(&self, secs: u64) {
        let _ = self
            .secs
            .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |cur| {
                Some(cur.saturating_add(secs))
            });
    }
}

impl Clock for ManualClock {
    fn now(&self) -> Timestamp {
        Timestamp(self.secs.load(Ordering::SeqCst))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_checked_add_overflow() {
        assert_eq!(
            Timestamp::from_secs(10).checked_add_secs(5),
            Some(Timestamp::from_secs(15))
        );
        assert_eq!(Timestamp::from_secs(u64::MAX).checked_add_secs(1), None);
    }

    #[test]
    fn test_manual_clock() {
        let clock = ManualClock::new(Timestamp::from_secs(1_000));
        assert_eq!(clock.now().as_secs(), 1_000);

        clock.advance(500);
        assert_eq!(clock.now().as_secs(), 1_500);

        clock.set(Timestamp::from_secs(42));
        assert_eq!(clock.now().as_secs(), 42);

        clock.set(Timestamp::from_secs(u64::MAX - 1));
        clock.advance(10);
        assert_eq!(clock.now().as_secs(), u64::MAX);
    }

    #[test]
    fn test_datetime_round_trip() {
        let dt = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
        let ts = Timestamp::from(dt);
        assert_eq!(ts.to_datetime(), Some(dt));
        assert!(ts.to_string().starts_with("2024-01-01"));
    }

    #[test]
    fn test_system_clock_is_after_epoch() {
        assert!(!SystemClock.now().is_zero());
    }
}
