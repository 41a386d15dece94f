//! Lock-free metric counters.

use std::sync::atomic::{AtomicU64, Ordering};

use super::snapshot::TelemetrySnapshot;

/// Counters recording what the runtime has done so far.
///
/// All counters are monotonic and updated with relaxed atomics; callers
/// never observe torn values, only slightly stale ones. Use
/// [`RuntimeMetrics::snapshot`] to get a consistent-enough copy for display.
#[derive(Debug, Default)]
pub struct RuntimeMetrics {
    cache_hits: AtomicU64,
    cache_misses: AtomicU64,
    cache_expired: AtomicU64,
    slots_cached: AtomicU64,
    slots_rejected: AtomicU64,
    bid_requests: AtomicU64,
    bid_failures: AtomicU64,
    creatives_loaded: AtomicU64,
    creative_failures: AtomicU64,
    events_dispatched: AtomicU64,
    events_suppressed: AtomicU64,
}

impl RuntimeMetrics {
    /// Create a new metrics instance with all counters at zero.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a cache consumption that returned a usable slot.
    pub fn cache_hit(&self) {
        self.cache_hits.fetch_add(1, Ordering::Relaxed);
    }

    /// Record a cache consumption that found nothing.
    pub fn cache_miss(&self) {
        self.cache_misses.fetch_add(1, Ordering::Relaxed);
    }

    /// Record a cache entry dropped because its TTL had elapsed.
    pub fn cache_expired(&self) {
        self.cache_expired.fetch_add(1, Ordering::Relaxed);
    }

    /// Record a slot accepted into the cache.
    pub fn slot_cached(&self) {
        self.slots_cached.fetch_add(1, Ordering::Relaxed);
    }

    /// Record a slot rejected as invalid.
    pub fn slot_rejected(&self) {
        self.slots_rejected.fetch_add(1, Ordering::Relaxed);
    }

    /// Record a bid request issued to the remote service.
    pub fn bid_request(&self) {
        self.bid_requests.fetch_add(1, Ordering::Relaxed);
    }

    /// Record a bid request that failed.
    pub fn bid_failure(&self) {
        self.bid_failures.fetch_add(1, Ordering::Relaxed);
    }

    /// Record a creative fetch that completed with content.
    pub fn creative_loaded(&self) {
        self.creatives_loaded.fetch_add(1, Ordering::Relaxed);
    }

    /// Record a creative fetch that failed.
    pub fn creative_failure(&self) {
        self.creative_failures.fetch_add(1, Ordering::Relaxed);
    }

    /// Record a lifecycle event forwarded to the sink.
    pub fn event_dispatched(&self) {
        self.events_dispatched.fetch_add(1, Ordering::Relaxed);
    }

    /// Record a lifecycle event suppressed by the throttle.
    pub fn event_suppressed(&self) {
        self.events_suppressed.fetch_add(1, Ordering::Relaxed);
    }

    /// Take a point-in-time copy of all counters.
    pub fn snapshot(&self) -> TelemetrySnapshot {
        TelemetrySnapshot {
            cache_hits: self.cache_hits.load(Ordering::Relaxed),
            cache_misses: self.cache_misses.load(Ordering::Relaxed),
            cache_expired: self.cache_expired.load(Ordering::Relaxed),
            slots_cached: self.slots_cached.load(Ordering::Relaxed),
            slots_rejected: self.slots_rejected.load(Ordering::Relaxed),
            bid_requests: self.bid_requests.load(Ordering::Relaxed),
            bid_failures: self.bid_failures.load(Ordering::Relaxed),
            creatives_loaded: self.creatives_loaded.load(Ordering::Relaxed),
            creative_failures: self.creative_failures.load(Ordering::Relaxed),
            events_dispatched: self.events_dispatched.load(Ordering::Relaxed),
            events_suppressed: self.events_suppressed.load(Ordering::Relaxed),
        }
    }
}
