//! Bidstream - client-side bid caching and creative prefetch
//!
//! This library provides the core runtime of a mobile advertising SDK: it
//! requests ad creatives from a remote bidding service, caches won bids
//! keyed by ad-slot identity, prefetches creative payloads ahead of display
//! requests, and throttles outbound lifecycle telemetry.
//!
//! # Architecture
//!
//! ```text
//! Host app ──► AdSession ──► SlotCache (keyed, TTL-aware)
//!                 │              ▲
//!                 │              │ put_all
//!                 ├──► BidFetcher (remote bidding service)
//!                 ├──► CreativeDownloader (async prefetch state machine)
//!                 └──► EventThrottle ──► EventSink (reporting)
//! ```
//!
//! Rendering, mediation adapters, and platform glue live in the host; this
//! crate treats them as boundary traits. All failure paths degrade to "no
//! ad available" rather than propagating upward.

pub mod cache;
pub mod clock;
pub mod config;
pub mod creative;
pub mod events;
pub mod geometry;
pub mod remote;
pub mod session;
pub mod slot;
pub mod telemetry;
