//! Wall-clock abstraction for TTL and throttle arithmetic.
//!
//! Slot expiry and event throttling compare epoch-millisecond timestamps.
//! Components take an `Arc<dyn Clock>` instead of calling the system clock
//! directly so tests can advance time deterministically.

use std::sync::atomic::{AtomicI64, Ordering};
use std::sync::Arc;

/// Source of epoch-millisecond timestamps.
///
/// All implementations must be `Send + Sync` for use across async tasks.
pub trait Clock: Send + Sync {
    /// Current wall-clock time as milliseconds since the Unix epoch.
    fn epoch_millis(&self) -> i64;
}

/// System clock backed by `chrono`.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn epoch_millis(&self) -> i64 {
        chrono::Utc::now().timestamp_millis()
    }
}

/// Manually advanced clock for deterministic tests.
///
/// Starts at an arbitrary fixed instant; `advance()` moves it forward.
#[derive(Debug, Default)]
pub struct MockClock {
    now_millis: AtomicI64,
}

impl MockClock {
    /// Create a mock clock starting at the given epoch-millisecond instant.
    pub fn at(epoch_millis: i64) -> Arc<Self> {
        Arc::new(Self {
            now_millis: AtomicI64::new(epoch_millis),
        })
    }

    /// Advance the clock by the given number of milliseconds.
    pub fn advance(&self, millis: i64) {
        self.now_millis.fetch_add(millis, Ordering::SeqCst);
    }
}

impl Clock for MockClock {
    fn epoch_millis(&self) -> i64 {
        self.now_millis.load(Ordering::SeqCst)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_system_clock_is_monotonic_enough() {
        let clock = SystemClock;
        let a = clock.epoch_millis();
        let b = clock.epoch_millis();
        assert!(b >= a);
        // Sanity: after 2020-01-01.
        assert!(a > 1_577_836_800_000);
    }

    #[test]
    fn test_mock_clock_advance() {
        let clock = MockClock::at(1_000_000);
        assert_eq!(clock.epoch_millis(), 1_000_000);

        clock.advance(1_100);
        assert_eq!(clock.epoch_millis(), 1_001_100);
    }

    #[test]
    fn test_trait_object_usage() {
        let clock: Arc<dyn Clock> = MockClock::at(42);
        assert_eq!(clock.epoch_millis(), 42);
    }
}
