//! Server-configured lifecycle event throttle.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use parking_lot::Mutex;
use tracing::{debug, info};

use super::sink::{AppEvent, EventSink};
use crate::clock::Clock;
use crate::telemetry::RuntimeMetrics;

/// Cool-down window state.
///
/// The window starts when the server configures it and is never moved by a
/// dispatch: only a fresh `set_throttle` restarts it.
#[derive(Debug, Clone, Copy)]
struct ThrottleWindow {
    /// Window length in seconds; non-positive disables throttling.
    window_seconds: i64,
    /// When the window was configured, epoch milliseconds.
    window_set_at_epoch_millis: i64,
}

/// Gates lifecycle events behind a server-configured cool-down window.
///
/// Session-wide state: one instance lives as long as the owning session and
/// is reset only by a configuration update. Dispatch is fire-and-forget; a
/// failed send is logged and lost.
pub struct EventThrottle {
    window: Mutex<ThrottleWindow>,
    sink: Arc<dyn EventSink>,
    clock: Arc<dyn Clock>,
    metrics: Arc<RuntimeMetrics>,
    /// Guards the outbound send: a new task starts only once the previous
    /// one finished.
    send_in_flight: Arc<AtomicBool>,
}

impl EventThrottle {
    /// Create a throttle with the given initial window.
    ///
    /// # Arguments
    ///
    /// * `initial_window_seconds` - Starting window; non-positive disables
    /// * `sink` - Reporting destination
    /// * `clock` - Wall clock for window arithmetic
    /// * `metrics` - Shared telemetry counters
    pub fn new(
        initial_window_seconds: i64,
        sink: Arc<dyn EventSink>,
        clock: Arc<dyn Clock>,
        metrics: Arc<RuntimeMetrics>,
    ) -> Self {
        let now = clock.epoch_millis();
        Self {
            window: Mutex::new(ThrottleWindow {
                window_seconds: initial_window_seconds,
                window_set_at_epoch_millis: now,
            }),
            sink,
            clock,
            metrics,
            send_in_flight: Arc::new(AtomicBool::new(false)),
        }
    }

    /// Configure the cool-down window from a server response.
    ///
    /// Records the window length and restarts it at the current time. A
    /// non-positive value disables throttling entirely.
    pub fn set_throttle(&self, window_seconds: i64) {
        let mut window = self.window.lock();
        window.window_seconds = window_seconds;
        window.window_set_at_epoch_millis = self.clock.epoch_millis();
        info!(window_seconds, "Event throttle window configured");
    }

    /// Report a lifecycle event, subject to the throttle.
    ///
    /// Returns true when the event was handed to the sink. Suppressed
    /// events (window still open) and events dropped because a send is
    /// already in flight return false. A dispatch does not restart the
    /// window.
    ///
    /// # Panics
    ///
    /// Panics if called outside a tokio runtime context when a dispatch is
    /// due.
    pub fn post_event(&self, event: AppEvent) -> bool {
        let suppressed = {
            let window = self.window.lock();
            let elapsed = self.clock.epoch_millis() - window.window_set_at_epoch_millis;
            window.window_seconds > 0 && elapsed < window.window_seconds * 1000
        };
        if suppressed {
            self.metrics.event_suppressed();
            debug!(event = %event, "Event suppressed by throttle window");
            return false;
        }

        // One outbound task at a time; an event arriving mid-send is lost,
        // which is acceptable for fire-and-forget telemetry.
        if self
            .send_in_flight
            .compare_exchange(false, true, Ordering::SeqCst, Ordering::SeqCst)
            .is_err()
        {
            debug!(event = %event, "Previous event send still running, dropping");
            return false;
        }

        self.metrics.event_dispatched();
        let sink = Arc::clone(&self.sink);
        let in_flight = Arc::clone(&self.send_in_flight);
        tokio::spawn(async move {
            if let Err(e) = sink.send(event).await {
                debug!(event = %event, error = %e, "Event send failed, dropping");
            }
            in_flight.store(false, Ordering::SeqCst);
        });
        true
    }

    /// True while an outbound send task is running.
    pub fn is_sending(&self) -> bool {
        self.send_in_flight.load(Ordering::SeqCst)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::MockClock;
    use crate::events::RecordingSink;
    use crate::remote::{BoxFuture, FetchError};
    use std::time::Duration;
    use tokio::sync::oneshot;

    fn throttle_with(
        window_seconds: i64,
        sink: Arc<dyn EventSink>,
        clock: Arc<MockClock>,
    ) -> EventThrottle {
        EventThrottle::new(window_seconds, sink, clock, Arc::new(RuntimeMetrics::new()))
    }

    async fn wait_for_events(sink: &RecordingSink, count: usize) {
        for _ in 0..200 {
            if sink.events().len() >= count {
                return;
            }
            tokio::time::sleep(Duration::from_millis(5)).await;
        }
        panic!(
            "sink never reached {} events, has {}",
            count,
            sink.events().len()
        );
    }

    async fn wait_until_idle(throttle: &EventThrottle) {
        for _ in 0..200 {
            if !throttle.is_sending() {
                return;
            }
            tokio::time::sleep(Duration::from_millis(5)).await;
        }
        panic!("send task never finished");
    }

    #[tokio::test]
    async fn test_disabled_window_dispatches_everything() {
        let sink = Arc::new(RecordingSink::new());
        let clock = MockClock::at(1_000_000);
        let throttle = throttle_with(0, Arc::clone(&sink) as _, clock);

        assert!(throttle.post_event(AppEvent::Launch));
        wait_for_events(&sink, 1).await;
        wait_until_idle(&throttle).await;

        assert!(throttle.post_event(AppEvent::Active));
        wait_for_events(&sink, 2).await;

        assert_eq!(sink.events(), vec![AppEvent::Launch, AppEvent::Active]);
    }

    #[tokio::test]
    async fn test_negative_window_disables() {
        let sink = Arc::new(RecordingSink::new());
        let clock = MockClock::at(1_000_000);
        let throttle = throttle_with(0, Arc::clone(&sink) as _, clock);

        throttle.set_throttle(-1);
        assert!(throttle.post_event(AppEvent::Launch));
        wait_for_events(&sink, 1).await;
    }

    #[tokio::test]
    async fn test_window_suppresses_until_elapsed() {
        let sink = Arc::new(RecordingSink::new());
        let clock = MockClock::at(1_000_000);
        let throttle = throttle_with(0, Arc::clone(&sink) as _, Arc::clone(&clock));

        throttle.set_throttle(60);

        // Inside the window: suppressed.
        assert!(!throttle.post_event(AppEvent::Active));
        clock.advance(59_000);
        assert!(!throttle.post_event(AppEvent::Active));
        assert!(sink.events().is_empty());

        // Past the window: dispatched.
        clock.advance(2_000);
        assert!(throttle.post_event(AppEvent::Active));
        wait_for_events(&sink, 1).await;
    }

    #[tokio::test]
    async fn test_window_not_renewed_by_dispatch() {
        let sink = Arc::new(RecordingSink::new());
        let clock = MockClock::at(1_000_000);
        let throttle = throttle_with(0, Arc::clone(&sink) as _, Arc::clone(&clock));

        throttle.set_throttle(60);
        clock.advance(61_000);

        assert!(throttle.post_event(AppEvent::Active));
        wait_for_events(&sink, 1).await;
        wait_until_idle(&throttle).await;

        // The window was fixed when configured; a dispatch does not
        // restart it, so the very next event also goes out.
        assert!(throttle.post_event(AppEvent::Inactive));
        wait_for_events(&sink, 2).await;
    }

    #[tokio::test]
    async fn test_set_throttle_restarts_window() {
        let sink = Arc::new(RecordingSink::new());
        let clock = MockClock::at(1_000_000);
        let throttle = throttle_with(0, Arc::clone(&sink) as _, Arc::clone(&clock));

        throttle.set_throttle(60);
        clock.advance(61_000);

        // A fresh configuration restarts the window at the current time.
        throttle.set_throttle(60);
        assert!(!throttle.post_event(AppEvent::Active));
        assert!(sink.events().is_empty());
    }

    #[tokio::test]
    async fn test_suppression_counted() {
        let metrics = Arc::new(RuntimeMetrics::new());
        let sink = Arc::new(RecordingSink::new());
        let clock = MockClock::at(1_000_000);
        let throttle = EventThrottle::new(
            60,
            Arc::clone(&sink) as _,
            clock,
            Arc::clone(&metrics),
        );

        throttle.post_event(AppEvent::Launch);
        throttle.post_event(AppEvent::Active);

        let snapshot = metrics.snapshot();
        assert_eq!(snapshot.events_suppressed, 2);
        assert_eq!(snapshot.events_dispatched, 0);
    }

    /// Sink that blocks until the test releases it.
    struct GatedSink {
        gate: Mutex<Option<oneshot::Receiver<()>>>,
        sent: Arc<RecordingSink>,
    }

    impl EventSink for GatedSink {
        fn send(&self, event: AppEvent) -> BoxFuture<'_, Result<(), FetchError>> {
            let rx = self.gate.lock().take();
            let sent = Arc::clone(&self.sent);
            Box::pin(async move {
                if let Some(rx) = rx {
                    rx.await.ok();
                }
                sent.send(event).await
            })
        }
    }

    #[tokio::test]
    async fn test_overlapping_sends_collapse_to_one() {
        let recorded = Arc::new(RecordingSink::new());
        let (tx, rx) = oneshot::channel();
        let sink = Arc::new(GatedSink {
            gate: Mutex::new(Some(rx)),
            sent: Arc::clone(&recorded),
        });
        let clock = MockClock::at(1_000_000);
        let throttle = throttle_with(0, sink as _, clock);

        assert!(throttle.post_event(AppEvent::Launch));
        // Give the send task a chance to start and park on the gate.
        tokio::time::sleep(Duration::from_millis(20)).await;

        // A second event while the first send runs is dropped.
        assert!(!throttle.post_event(AppEvent::Active));

        tx.send(()).unwrap();
        wait_until_idle(&throttle).await;
        assert_eq!(recorded.events(), vec![AppEvent::Launch]);

        // Once the previous task finished, a fresh send may start.
        assert!(throttle.post_event(AppEvent::Inactive));
        wait_for_events(&recorded, 2).await;
    }

    /// Sink that always fails.
    struct FailingSink;

    impl EventSink for FailingSink {
        fn send(&self, _event: AppEvent) -> BoxFuture<'_, Result<(), FetchError>> {
            Box::pin(async { Err(FetchError::Http("boom".to_string())) })
        }
    }

    #[tokio::test]
    async fn test_send_failure_swallowed_and_guard_released() {
        let clock = MockClock::at(1_000_000);
        let throttle = throttle_with(0, Arc::new(FailingSink) as _, clock);

        assert!(throttle.post_event(AppEvent::Launch));
        wait_until_idle(&throttle).await;

        // The failed send released the guard; the next event dispatches.
        assert!(throttle.post_event(AppEvent::Active));
        wait_until_idle(&throttle).await;
    }
}
