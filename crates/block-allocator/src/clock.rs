// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Injected time source for intake and expiry stamps.
//!
//! The allocator and the ledger never read the system clock directly; they
//! ask a [`Clock`] handed to them at construction. Production code uses
//! [`SystemClock`]; tests use [`ManualClock`] to pin and advance time.

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::{SystemTime, UNIX_EPOCH};

const MILLIS_PER_DAY: u64 = 24 * 60 * 60 * 1000;

/// A point in time as milliseconds since the Unix epoch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize)]
pub struct Timestamp(u64);

impl Timestamp {
    /// Creates a timestamp from Unix milliseconds.
    pub fn from_millis(millis: u64) -> Self {
        Self(millis)
    }

    /// Returns the timestamp as Unix milliseconds.
    pub fn as_millis(self) -> u64 {
        self.0
    }

    /// Returns this timestamp shifted forward by whole days.
    pub fn plus_days(self, days: u32) -> Self {
        Self(self.0.saturating_add(u64::from(days) * MILLIS_PER_DAY))
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}ms", self.0)
    }
}

/// Source of the current time.
pub trait Clock: Send + Sync {
    fn now(&self) -> Timestamp;
}

/// Wall-clock time.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Timestamp {
        let millis = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_millis() as u64)
            .unwrap_or(0);
        Timestamp(millis)
    }
}

/// A clock that only moves when told to.
///
/// Cloning shares the underlying time, so a test can keep one handle and
/// give another to the component under test.
#[derive(Debug, Clone, Default)]
pub struct ManualClock {
    millis: Arc<AtomicU64>,
}

impl ManualClock {
    /// Creates a clock pinned at `start`.
    pub fn new(start: Timestamp) -> Self {
        Self {
            millis: Arc::new(AtomicU64::new(start.as_millis())),
        }
    }

    /// Moves the clock to `at`.
    pub fn set(&self, at: Timestamp) {
        self.millis.store(at.as_millis(), Ordering::Release);
    }

    /// Advances the clock by whole days.
    pub fn advance_days(&self, days: u32) {
        self.millis
            .fetch_add(u64::from(days) * MILLIS_PER_DAY, Ordering::AcqRel);
    }
}

impl Clock for ManualClock {
    fn now(&self) -> Timestamp {
        Timestamp(self.millis.load(Ordering::Acquire))
    }
}

impl<C: Clock + ?Sized> Clock for Arc<C> {
    fn now(&self) -> Timestamp {
        (**self).now()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plus_days() {
        let t = Timestamp::from_millis(1_000);
        assert_eq!(t.plus_days(30).as_millis(), 1_000 + 30 * MILLIS_PER_DAY);
        assert_eq!(t.plus_days(0), t);
    }

    #[test]
    fn test_plus_days_saturates() {
        let t = Timestamp::from_millis(u64::MAX - 1);
        assert_eq!(t.plus_days(1).as_millis(), u64::MAX);
    }

    #[test]
    fn test_manual_clock_shared() {
        let clock = ManualClock::new(Timestamp::from_millis(500));
        let handle = clock.clone();
        handle.advance_days(2);
        assert_eq!(clock.now().as_millis(), 500 + 2 * MILLIS_PER_DAY);

        clock.set(Timestamp::from_millis(7));
        assert_eq!(handle.now(), Timestamp::from_millis(7));
    }

    #[test]
    fn test_system_clock_moves_forward() {
        let a = SystemClock.now();
        let b = SystemClock.now();
        assert!(b >= a);
        assert!(a.as_millis() > 0);
    }
}
