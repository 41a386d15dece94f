//! Lifecycle event reporting with server-controlled throttling.
//!
//! The host application reports launch/active/inactive transitions. The
//! [`EventThrottle`] forwards at most one event per server-configured
//! cool-down window to the reporting sink, and collapses overlapping sends
//! so at most one outbound task is in flight at a time. Telemetry loss is
//! acceptable by design: failed sends are logged and dropped, never
//! retried.

mod sink;
mod throttle;

pub use sink::{AppEvent, EventSink, NullSink};
pub use throttle::EventThrottle;

#[cfg(test)]
pub use sink::tests::RecordingSink;
