//! Lifecycle event types and the reporting sink boundary.

use std::fmt;

use crate::remote::{BoxFuture, FetchError};

/// An application lifecycle event worth reporting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppEvent {
    /// The application started.
    Launch,
    /// The application came to the foreground.
    Active,
    /// The application left the foreground.
    Inactive,
}

impl AppEvent {
    /// Wire name expected by the reporting endpoint.
    pub fn as_str(&self) -> &'static str {
        match self {
            AppEvent::Launch => "Launch",
            AppEvent::Active => "Active",
            AppEvent::Inactive => "Inactive",
        }
    }
}

impl fmt::Display for AppEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Destination for dispatched lifecycle events.
///
/// Implementations must be `Send + Sync`. Send failures are the caller's to
/// swallow; this layer never retries.
pub trait EventSink: Send + Sync {
    /// Deliver one event to the reporting endpoint.
    fn send(&self, event: AppEvent) -> BoxFuture<'_, Result<(), FetchError>>;
}

/// Sink that drops every event. Useful when reporting is disabled.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullSink;

impl EventSink for NullSink {
    fn send(&self, _event: AppEvent) -> BoxFuture<'_, Result<(), FetchError>> {
        Box::pin(async { Ok(()) })
    }
}

#[cfg(test)]
pub mod tests {
    use super::*;
    use parking_lot::Mutex;

    /// Sink that records every delivered event.
    #[derive(Debug, Default)]
    pub struct RecordingSink {
        events: Mutex<Vec<AppEvent>>,
    }

    impl RecordingSink {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn events(&self) -> Vec<AppEvent> {
            self.events.lock().clone()
        }
    }

    impl EventSink for RecordingSink {
        fn send(&self, event: AppEvent) -> BoxFuture<'_, Result<(), FetchError>> {
            self.events.lock().push(event);
            Box::pin(async { Ok(()) })
        }
    }

    #[test]
    fn test_app_event_as_str() {
        assert_eq!(AppEvent::Launch.as_str(), "Launch");
        assert_eq!(AppEvent::Active.as_str(), "Active");
        assert_eq!(AppEvent::Inactive.as_str(), "Inactive");
    }

    #[test]
    fn test_app_event_display() {
        assert_eq!(format!("{}", AppEvent::Launch), "Launch");
    }

    #[tokio::test]
    async fn test_null_sink_accepts_everything() {
        let sink = NullSink;
        assert!(sink.send(AppEvent::Launch).await.is_ok());
    }

    #[tokio::test]
    async fn test_recording_sink_records() {
        let sink = RecordingSink::new();
        sink.send(AppEvent::Launch).await.unwrap();
        sink.send(AppEvent::Inactive).await.unwrap();
        assert_eq!(sink.events(), vec![AppEvent::Launch, AppEvent::Inactive]);
    }
}
