//! Session context owning the cache, throttle, and remote boundary.
//!
//! `AdSession` replaces process-wide singleton access with an explicit
//! context object: it owns the slot cache, the event throttle, and the bid
//! fetcher for one logical session, and every collaborator receives its
//! dependencies through it. Single-instance-per-session semantics are
//! preserved without hidden global mutable state.
//!
//! # Display flow
//!
//! ```text
//! request_slot ──► SlotCache.take ──hit──► Slot
//!                      │ miss
//!                      ▼
//!               BidFetcher.fetch_bids ──► put_all ──► take ──► Slot?
//! ```
//!
//! A failed fetch mutates nothing; the caller simply sees no ad. The
//! `prefetch` path runs the populate half alone so a later display request
//! is served from cache.

use std::sync::Arc;

use parking_lot::Mutex;
use tracing::{debug, info, warn};

use crate::cache::SlotCache;
use crate::clock::Clock;
use crate::config::{RemoteConfig, SdkConfig};
use crate::creative::CreativeDownloader;
use crate::events::{AppEvent, EventSink, EventThrottle};
use crate::geometry::DeviceGeometry;
use crate::remote::{AdUnitRequest, BidFetcher, BidRequest, CreativeFetcher};
use crate::slot::{AdFormat, Slot, SlotKey};
use crate::telemetry::{RuntimeMetrics, TelemetrySnapshot};

/// Server-adjustable session state.
#[derive(Debug, Clone, Copy)]
struct SessionState {
    kill_switch: bool,
    slot_ttl_seconds: i64,
}

/// One logical SDK session.
///
/// Owns the cache and throttle for their whole lifetime; both are rebuilt
/// from scratch each process lifetime, nothing is persisted.
pub struct AdSession {
    config: SdkConfig,
    cache: Arc<SlotCache>,
    throttle: Arc<EventThrottle>,
    bids: Arc<dyn BidFetcher>,
    metrics: Arc<RuntimeMetrics>,
    state: Mutex<SessionState>,
}

impl AdSession {
    /// Assemble a session from its boundary collaborators.
    ///
    /// # Arguments
    ///
    /// * `config` - Static host configuration
    /// * `geometry` - Device geometry provider for classification
    /// * `bids` - Bidding service boundary
    /// * `sink` - Lifecycle event reporting boundary
    /// * `clock` - Wall clock shared by cache and throttle
    pub fn new(
        config: SdkConfig,
        geometry: Arc<dyn DeviceGeometry>,
        bids: Arc<dyn BidFetcher>,
        sink: Arc<dyn EventSink>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        let metrics = Arc::new(RuntimeMetrics::new());
        let cache = Arc::new(SlotCache::new(
            geometry,
            Arc::clone(&clock),
            Arc::clone(&metrics),
        ));
        let throttle = Arc::new(EventThrottle::new(
            config.default_throttle_seconds,
            sink,
            clock,
            Arc::clone(&metrics),
        ));
        let state = SessionState {
            kill_switch: config.kill_switch,
            slot_ttl_seconds: config.default_slot_ttl_seconds,
        };

        info!(
            publisher = %config.publisher_id,
            bundle = %config.bundle_id,
            "Session started"
        );

        Self {
            config,
            cache,
            throttle,
            bids,
            metrics,
            state: Mutex::new(state),
        }
    }

    /// Consume a slot for display, fetching bids on a cache miss.
    ///
    /// The cache is consulted first and a hit short-circuits the network.
    /// On a miss, one bid request is issued for the key's ad unit; its
    /// slots are cached and the key is consumed again. Returns `None` when
    /// bidding is disabled, the fetch fails, or the service returned no
    /// usable bid.
    pub async fn request_slot(&self, key: &SlotKey) -> Option<Slot> {
        if self.state.lock().kill_switch {
            debug!(ad_unit = %key.ad_unit_id(), "Bidding disabled by kill switch");
            return None;
        }

        if let Some(slot) = self.cache.take(key) {
            return Some(slot);
        }

        self.populate(key).await;
        self.cache.take(key)
    }

    /// Warm the cache for a key without consuming anything.
    ///
    /// Used by the next-creative flow so a later display request is served
    /// from cache. No-op when bidding is disabled.
    pub async fn prefetch(&self, key: &SlotKey) {
        if self.state.lock().kill_switch {
            return;
        }
        self.populate(key).await;
    }

    /// Spawn [`prefetch`](Self::prefetch) onto the current runtime.
    pub fn spawn_prefetch(self: &Arc<Self>, key: SlotKey) {
        let session = Arc::clone(self);
        tokio::spawn(async move {
            session.prefetch(&key).await;
        });
    }

    /// Apply a remote configuration response.
    ///
    /// Updates the kill switch, the slot TTL override, and the throttle
    /// window for the rest of the session.
    pub fn apply_remote_config(&self, remote: &RemoteConfig) {
        {
            let mut state = self.state.lock();
            state.kill_switch = remote.kill_switch;
            if remote.slot_ttl_seconds > 0 {
                state.slot_ttl_seconds = remote.slot_ttl_seconds;
            }
        }
        self.throttle.set_throttle(remote.app_event_throttle_seconds);
        info!(
            kill_switch = remote.kill_switch,
            throttle_seconds = remote.app_event_throttle_seconds,
            slot_ttl_seconds = remote.slot_ttl_seconds,
            "Remote configuration applied"
        );
    }

    /// Report an application lifecycle event through the throttle.
    pub fn lifecycle(&self, event: AppEvent) -> bool {
        self.throttle.post_event(event)
    }

    /// Create a creative downloader sharing this session's metrics.
    pub fn new_downloader(&self, fetcher: Arc<dyn CreativeFetcher>) -> CreativeDownloader {
        CreativeDownloader::new(fetcher, Arc::clone(&self.metrics))
    }

    /// The session's slot cache.
    pub fn cache(&self) -> &SlotCache {
        &self.cache
    }

    /// The session's event throttle.
    pub fn throttle(&self) -> &EventThrottle {
        &self.throttle
    }

    /// Point-in-time copy of the session's runtime counters.
    pub fn telemetry_snapshot(&self) -> TelemetrySnapshot {
        self.metrics.snapshot()
    }

    /// Issue one bid request for the key's ad unit and cache the result.
    async fn populate(&self, key: &SlotKey) {
        let request = self.bid_request_for(key);
        self.metrics.bid_request();
        match self.bids.fetch_bids(request).await {
            Ok(mut slots) => {
                let default_ttl = self.state.lock().slot_ttl_seconds;
                for slot in &mut slots {
                    slot.apply_default_ttl(default_ttl);
                }
                self.cache.put_all(slots);
            }
            Err(e) => {
                self.metrics.bid_failure();
                warn!(
                    ad_unit = %key.ad_unit_id(),
                    error = %e,
                    "Bid request failed, cache left untouched"
                );
            }
        }
    }

    fn bid_request_for(&self, key: &SlotKey) -> BidRequest {
        BidRequest {
            publisher_id: self.config.publisher_id.clone(),
            bundle_id: self.config.bundle_id.clone(),
            sdk_version: env!("CARGO_PKG_VERSION").to_string(),
            ad_units: vec![AdUnitRequest {
                placement_id: key.ad_unit_id().to_string(),
                sizes: vec![format!("{}x{}", key.width(), key.height())],
                is_native: key.format() == AdFormat::Native,
            }],
        }
    }
}
