//! Keyed, TTL-aware cache of won bids.
//!
//! This module provides the slot cache at the center of the runtime: a
//! concurrent map from [`SlotKey`](crate::slot::SlotKey) to
//! [`Slot`](crate::slot::Slot) with insertion-time classification,
//! last-write-wins replacement, at-most-once consumption, and TTL expiry on
//! the consuming read path.
//!
//! # Why dashmap?
//!
//! The cache is read and written from FUSE-style concurrent request paths:
//! worker tasks populating it after a bid response and display paths
//! consuming from it. `dashmap` gives lock-striped access where `remove` is
//! atomic per key, which is exactly the "remove visible to exactly one
//! consumer" guarantee the consuming path needs. There is no LRU layer:
//! entries are bounded by the publisher's declared ad units and removed
//! eagerly on consumption, so TTL is a freshness guard rather than a
//! capacity mechanism.

mod slot_cache;

pub use slot_cache::SlotCache;
