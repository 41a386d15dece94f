//! Concurrent slot cache with insertion-time classification.

use std::sync::Arc;

use dashmap::DashMap;
use tracing::debug;

use crate::clock::Clock;
use crate::geometry::DeviceGeometry;
use crate::slot::{is_standard_banner_size, AdFormat, Slot, SlotKey};
use crate::telemetry::RuntimeMetrics;

/// Cache of won bids, keyed by placement, geometry, and format.
///
/// One instance is owned by each logical session; it is safe to share
/// across tasks via `Arc`. Mutating operations on the same key serialize
/// against each other, but a `peek` followed by a `take` is not atomic:
/// the entry may be consumed in between, and callers must tolerate an
/// empty `take` after a successful `peek`.
///
/// # Expiry policy
///
/// `take` enforces TTL: an entry whose window has elapsed is removed and
/// reported as absent, so an expired slot is never delivered to a
/// consumer. `peek` is a diagnostic lookup and deliberately skips the
/// expiry check.
pub struct SlotCache {
    /// Keyed slot storage. Lock-striped; `remove` is atomic per key.
    slots: DashMap<SlotKey, Slot>,
    /// Full-screen reference sizes for interstitial classification.
    geometry: Arc<dyn DeviceGeometry>,
    /// Wall clock for stamping and expiry checks.
    clock: Arc<dyn Clock>,
    /// Shared runtime counters.
    metrics: Arc<RuntimeMetrics>,
}

impl SlotCache {
    /// Create an empty cache.
    ///
    /// # Arguments
    ///
    /// * `geometry` - Device geometry provider for classification
    /// * `clock` - Wall clock used for stamping and expiry
    /// * `metrics` - Shared telemetry counters
    pub fn new(
        geometry: Arc<dyn DeviceGeometry>,
        clock: Arc<dyn Clock>,
        metrics: Arc<RuntimeMetrics>,
    ) -> Self {
        Self {
            slots: DashMap::new(),
            geometry,
            clock,
            metrics,
        }
    }

    /// Classify a slot's rendering format.
    ///
    /// A slot that declares itself native is `Native` no matter what its
    /// geometry says; the native check strictly precedes the size checks.
    /// Otherwise a slot whose dimensions exactly match either full-screen
    /// reference size is `Interstitial`, and everything else is `Banner`.
    pub fn classify(&self, slot: &Slot) -> AdFormat {
        if slot.is_native {
            return AdFormat::Native;
        }
        let portrait = self.geometry.portrait();
        let landscape = self.geometry.landscape();
        if portrait.matches(slot.width, slot.height) || landscape.matches(slot.width, slot.height)
        {
            return AdFormat::Interstitial;
        }
        AdFormat::Banner
    }

    /// Insert a slot, replacing any existing entry under the same key.
    ///
    /// Invalid slots are rejected silently: degenerate geometry, missing
    /// payload, or a typed size that is neither a recognized standard
    /// banner size nor a full-screen reference size. Rejection mutates
    /// nothing.
    pub fn put(&self, mut slot: Slot) {
        if !self.accepts(&slot) {
            debug!(
                placement = %slot.placement_id,
                width = slot.width,
                height = slot.height,
                "Rejected invalid slot"
            );
            self.metrics.slot_rejected();
            return;
        }

        let format = self.classify(&slot);
        slot.stamp(self.clock.epoch_millis());
        let key = SlotKey::new(slot.placement_id.clone(), slot.width, slot.height, format);

        debug!(
            placement = %slot.placement_id,
            format = %format,
            ttl_seconds = slot.ttl_seconds,
            "Cached slot"
        );
        self.metrics.slot_cached();
        // Last write wins; no merge with a previous entry.
        self.slots.insert(key, slot);
    }

    /// Insert each slot in input order.
    ///
    /// Later entries for the same key overwrite earlier ones. An empty
    /// input is a no-op, not an error.
    pub fn put_all(&self, slots: Vec<Slot>) {
        for slot in slots {
            self.put(slot);
        }
    }

    /// Read-only diagnostic lookup.
    ///
    /// Does not remove the entry and does not check expiry. Callers that
    /// act on the content must use [`take`](Self::take).
    pub fn peek(&self, key: &SlotKey) -> Option<Slot> {
        self.slots.get(key).map(|entry| entry.value().clone())
    }

    /// Remove and return the slot for the key, enforcing TTL.
    ///
    /// At most one of any number of concurrent `take` calls for the same
    /// key receives the slot; the rest observe absence. An entry whose TTL
    /// has elapsed is dropped and reported as absent.
    pub fn take(&self, key: &SlotKey) -> Option<Slot> {
        match self.slots.remove(key) {
            Some((_, slot)) => {
                if slot.is_expired(self.clock.epoch_millis()) {
                    debug!(
                        placement = %slot.placement_id,
                        ttl_seconds = slot.ttl_seconds,
                        "Dropped expired slot"
                    );
                    self.metrics.cache_expired();
                    self.metrics.cache_miss();
                    return None;
                }
                self.metrics.cache_hit();
                Some(slot)
            }
            None => {
                self.metrics.cache_miss();
                None
            }
        }
    }

    /// Delete the entry for the key, if any.
    pub fn remove(&self, key: &SlotKey) {
        self.slots.remove(key);
    }

    /// Current entry count.
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// True when the cache holds no entries.
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Drop all entries. Used on session teardown.
    pub fn clear(&self) {
        self.slots.clear();
    }

    /// A slot is cacheable when it is basically valid and, for typed
    /// variants, declares a recognized size.
    fn accepts(&self, slot: &Slot) -> bool {
        if !slot.is_valid() {
            return false;
        }
        if slot.is_native {
            return true;
        }
        is_standard_banner_size(slot.width, slot.height)
            || self.geometry.portrait().matches(slot.width, slot.height)
            || self.geometry.landscape().matches(slot.width, slot.height)
    }
}
