//! Runtime telemetry for observability and diagnostics.
//!
//! This module provides metrics collection for the bid cache and prefetch
//! pipeline. It uses lock-free atomic counters for low-overhead
//! instrumentation from any task.
//!
//! # Architecture
//!
//! ```text
//! Cache / Downloader / Throttle ──► RuntimeMetrics ──► TelemetrySnapshot ──► Host app
//!                                   (atomic counters)  (point-in-time copy)
//! ```
//!
//! # Example
//!
//! ```
//! use bidstream::telemetry::RuntimeMetrics;
//! use std::sync::Arc;
//!
//! let metrics = Arc::new(RuntimeMetrics::new());
//! metrics.cache_hit();
//! metrics.cache_miss();
//!
//! let snapshot = metrics.snapshot();
//! assert_eq!(snapshot.cache_hits, 1);
//! assert_eq!(snapshot.cache_misses, 1);
//! ```

mod metrics;
mod snapshot;

pub use metrics::RuntimeMetrics;
pub use snapshot::TelemetrySnapshot;
