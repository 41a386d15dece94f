//! Point-in-time telemetry copy.

/// A plain copy of all runtime counters, safe to hand to display code.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TelemetrySnapshot {
    /// Cache consumptions that returned a usable slot.
    pub cache_hits: u64,
    /// Cache consumptions that found nothing.
    pub cache_misses: u64,
    /// Entries dropped on read because their TTL had elapsed.
    pub cache_expired: u64,
    /// Slots accepted into the cache.
    pub slots_cached: u64,
    /// Slots rejected as invalid.
    pub slots_rejected: u64,
    /// Bid requests issued.
    pub bid_requests: u64,
    /// Bid requests that failed.
    pub bid_failures: u64,
    /// Creative fetches that completed with content.
    pub creatives_loaded: u64,
    /// Creative fetches that failed.
    pub creative_failures: u64,
    /// Lifecycle events forwarded to the sink.
    pub events_dispatched: u64,
    /// Lifecycle events suppressed by the throttle.
    pub events_suppressed: u64,
}

impl TelemetrySnapshot {
    /// Fraction of cache consumptions that hit, in `[0, 1]`.
    ///
    /// Returns zero when no consumption has happened yet.
    pub fn cache_hit_rate(&self) -> f64 {
        let total = self.cache_hits + self.cache_misses;
        if total == 0 {
            return 0.0;
        }
        self.cache_hits as f64 / total as f64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hit_rate_empty() {
        let snapshot = TelemetrySnapshot::default();
        assert_eq!(snapshot.cache_hit_rate(), 0.0);
    }

    #[test]
    fn test_hit_rate() {
        let snapshot = TelemetrySnapshot {
            cache_hits: 3,
            cache_misses: 1,
            ..Default::default()
        };
        assert!((snapshot.cache_hit_rate() - 0.75).abs() < f64::EPSILON);
    }
}
