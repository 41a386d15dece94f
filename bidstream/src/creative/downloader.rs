//! Asynchronous creative prefetcher.

use std::sync::Arc;

use parking_lot::Mutex;
use tracing::debug;

use super::state::{CreativeState, DownloadStatus};
use crate::remote::CreativeFetcher;
use crate::telemetry::RuntimeMetrics;

/// Prefetches one creative document into a [`CreativeState`].
///
/// Exactly one fetch is in flight per downloader at any time. The guard is
/// internal: [`fill_content`](Self::fill_content) atomically claims the
/// `Loading` state before spawning, so overlapping issuance is rejected
/// rather than advised against.
///
/// There is no cancellation: an owner that loses interest calls
/// [`unload`](Self::unload) and the eventual completion of the abandoned
/// fetch is ignored by the state machine.
pub struct CreativeDownloader {
    state: Arc<Mutex<CreativeState>>,
    fetcher: Arc<dyn CreativeFetcher>,
    metrics: Arc<RuntimeMetrics>,
}

impl CreativeDownloader {
    /// Create a downloader in the empty `None` state.
    ///
    /// # Arguments
    ///
    /// * `fetcher` - Creative content boundary
    /// * `metrics` - Shared telemetry counters
    pub fn new(fetcher: Arc<dyn CreativeFetcher>, metrics: Arc<RuntimeMetrics>) -> Self {
        Self {
            state: Arc::new(Mutex::new(CreativeState::new())),
            fetcher,
            metrics,
        }
    }

    /// Start prefetching the creative at `display_url`.
    ///
    /// Claims the `Loading` state and spawns the fetch onto the current
    /// tokio runtime. Returns false without spawning anything if a fetch is
    /// already in flight.
    ///
    /// # Panics
    ///
    /// Panics if called outside a tokio runtime context.
    pub fn fill_content(&self, display_url: &str, user_agent: &str) -> bool {
        {
            let mut state = self.state.lock();
            if !state.begin_loading() {
                debug!(url = %display_url, "Creative fetch already in flight, skipping");
                return false;
            }
        }

        let url = display_url.to_string();
        let user_agent = user_agent.to_string();
        let state = Arc::clone(&self.state);
        let fetcher = Arc::clone(&self.fetcher);
        let metrics = Arc::clone(&self.metrics);

        tokio::spawn(async move {
            match fetcher.fetch(&url, &user_agent).await {
                Ok(content) => {
                    let applied = state.lock().complete(content);
                    if applied {
                        metrics.creative_loaded();
                        debug!(url = %url, "Creative loaded");
                    } else {
                        debug!(url = %url, "Creative fetch completed after discard, ignored");
                    }
                }
                Err(e) => {
                    state.lock().download_failed();
                    metrics.creative_failure();
                    debug!(url = %url, error = %e, "Creative fetch failed");
                }
            }
        });

        true
    }

    /// True while a fetch is in flight.
    pub fn is_loading(&self) -> bool {
        self.state.lock().is_loading()
    }

    /// True once content is present and renderable.
    pub fn is_loaded(&self) -> bool {
        self.state.lock().loaded()
    }

    /// Current status.
    pub fn status(&self) -> DownloadStatus {
        self.state.lock().status()
    }

    /// Copy of the creative document; empty unless loaded.
    pub fn content(&self) -> String {
        self.state.lock().content().to_string()
    }

    /// Reset stale loaded content ahead of a re-request.
    pub fn refresh(&self) {
        self.state.lock().refresh();
    }

    /// Record a failed or timed-out fetch driven by an external caller.
    pub fn download_failed(&self) {
        self.state.lock().download_failed();
    }

    /// Force the `Loading` state without spawning a fetch.
    pub fn mark_loading(&self) {
        self.state.lock().mark_loading();
    }

    /// Discard any content and return to the empty state.
    pub fn unload(&self) {
        self.state.lock().unload();
    }
}
