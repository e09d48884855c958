//! Test clocks — deterministic `Clock` implementations for tests.

use std::sync::Mutex;

use chrono::{DateTime, Duration, Utc};
use timekeep_core::Clock;

/// A clock that always returns the instant it was constructed with.
///
/// Pure and idempotent: any number of `now` calls, in any order relative
/// to other operations, return the same value. Construct one per test case
/// with a literal instant; separate instances share no state.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub DateTime<Utc>);

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}

/// A clock whose time moves only when the test says so.
///
/// Starts at the given instant; `advance` shifts it forward by a duration
/// and `set` repositions it absolutely. Between mutations it behaves like
/// a [`FixedClock`]. Useful when one test must observe time passing across
/// several consumer calls.
#[derive(Debug)]
pub struct ManualClock {
    current: Mutex<DateTime<Utc>>,
}

impl ManualClock {
    /// Create a manual clock positioned at `start`.
    #[must_use]
    pub fn new(start: DateTime<Utc>) -> Self {
        Self {
            current: Mutex::new(start),
        }
    }

    /// Move the clock forward by `delta`. Negative durations move it
    /// backward; the clock imposes no monotonicity of its own.
    ///
    /// # Panics
    ///
    /// Panics if the internal mutex is poisoned.
    pub fn advance(&self, delta: Duration) {
        let mut current = self.current.lock().unwrap();
        *current += delta;
    }

    /// Reposition the clock to an absolute instant.
    ///
    /// # Panics
    ///
    /// Panics if the internal mutex is poisoned.
    pub fn set(&self, instant: DateTime<Utc>) {
        let mut current = self.current.lock().unwrap();
        *current = instant;
    }
}

impl Clock for ManualClock {
    fn now(&self) -> DateTime<Utc> {
        *self.current.lock().unwrap()
    }
}

/// A clock that returns instants from a predetermined sequence, one per
/// `now` call. Panics if the sequence is exhausted — a test that reads the
/// clock more often than it programmed is a test bug. Used when a consumer
/// must observe specific successive readings (e.g., a value crossing an
/// hour boundary between two calls).
#[derive(Debug)]
pub struct SequenceClock {
    instants: Mutex<(Vec<DateTime<Utc>>, usize)>,
}

impl SequenceClock {
    /// Create a new `SequenceClock` that will yield `instants` in order.
    #[must_use]
    pub fn new(instants: Vec<DateTime<Utc>>) -> Self {
        Self {
            instants: Mutex::new((instants, 0)),
        }
    }
}

impl Clock for SequenceClock {
    fn now(&self) -> DateTime<Utc> {
        let mut state = self.instants.lock().unwrap();
        let instant = state.0[state.1];
        state.1 += 1;
        instant
    }
}
