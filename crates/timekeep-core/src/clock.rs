//! Clock abstraction for deterministic time handling.

use std::sync::Arc;

use chrono::{DateTime, Utc};

/// Capability for obtaining the current instant.
///
/// Components that depend on "the current time" accept a `Clock` at
/// construction instead of reading an ambient source directly, so tests
/// can wire in a deterministic implementation without touching the
/// component's logic.
///
/// No implementation guarantees monotonicity or caching: two `now` calls
/// within one logical operation may differ. Callers that need a stable
/// reading should call `now` once and reuse the value.
pub trait Clock: Send + Sync {
    /// Returns the current instant in UTC. This operation never fails; an
    /// unavailable host clock is an environment fault, not an error value.
    fn now(&self) -> DateTime<Utc>;
}

/// Production clock backed by the host's wall clock.
///
/// Stateless. Successive calls may return different values. Wraps the
/// wall clock, not a monotonic source, so readings carry calendar meaning
/// (consumers derive values such as hour of day from them).
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

// Lets an `Arc<dyn Clock>` (or `Arc<SystemClock>`) satisfy `C: Clock`
// bounds directly.
impl<C: Clock + ?Sized> Clock for Arc<C> {
    fn now(&self) -> DateTime<Utc> {
        (**self).now()
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::{Clock, SystemClock};

    #[test]
    fn test_system_clock_successive_readings_do_not_decrease() {
        let clock = SystemClock;

        let first = clock.now();
        let second = clock.now();

        assert!(second >= first);
    }

    #[test]
    fn test_arc_dyn_clock_delegates_to_inner_clock() {
        let clock: Arc<dyn Clock> = Arc::new(SystemClock);

        let before = SystemClock.now();
        let reading = clock.now();
        let after = SystemClock.now();

        assert!(reading >= before);
        assert!(reading <= after);
    }
}
