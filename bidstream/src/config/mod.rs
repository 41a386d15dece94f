//! SDK configuration.
//!
//! This module defines [`SdkConfig`], the static configuration the host
//! application supplies at session creation, and [`RemoteConfig`], the
//! server-controlled settings fetched at runtime. Remote values always win:
//! applying a remote config updates the throttle window, the slot TTL
//! override, and the kill switch for the rest of the session.

use serde::{Deserialize, Serialize};

/// Default time-to-live for slots the server returns without one (seconds).
///
/// Fifteen minutes keeps prefetched interstitial bids usable across a
/// typical foreground session without serving stale prices for long.
pub const DEFAULT_SLOT_TTL_SECS: i64 = 900;

/// Default lifecycle-event throttle window (seconds).
///
/// Zero disables throttling until the remote configuration assigns a
/// window.
pub const DEFAULT_THROTTLE_SECS: i64 = 0;

/// Static configuration supplied by the host application.
#[derive(Clone, Debug)]
pub struct SdkConfig {
    /// Publisher account identifier.
    pub publisher_id: String,

    /// Host application bundle identifier.
    pub bundle_id: String,

    /// Bid endpoint URL.
    pub bid_endpoint: String,

    /// Remote configuration endpoint URL.
    pub config_endpoint: String,

    /// User agent presented on outbound requests.
    pub user_agent: String,

    /// TTL assigned to slots the server returns without one (seconds).
    pub default_slot_ttl_seconds: i64,

    /// Initial lifecycle-event throttle window (seconds, non-positive
    /// disables).
    pub default_throttle_seconds: i64,

    /// Whether bidding starts disabled until a remote config says
    /// otherwise.
    pub kill_switch: bool,
}

impl SdkConfig {
    /// Create a configuration for the given publisher and bundle with
    /// default endpoints and policies.
    pub fn new(publisher_id: impl Into<String>, bundle_id: impl Into<String>) -> Self {
        Self {
            publisher_id: publisher_id.into(),
            bundle_id: bundle_id.into(),
            bid_endpoint: "https://bidder.example.com/inapp".to_string(),
            config_endpoint: "https://bidder.example.com/config".to_string(),
            user_agent: format!("bidstream/{}", env!("CARGO_PKG_VERSION")),
            default_slot_ttl_seconds: DEFAULT_SLOT_TTL_SECS,
            default_throttle_seconds: DEFAULT_THROTTLE_SECS,
            kill_switch: false,
        }
    }

    /// Set the bid endpoint.
    pub fn with_bid_endpoint(mut self, url: impl Into<String>) -> Self {
        self.bid_endpoint = url.into();
        self
    }

    /// Set the remote configuration endpoint.
    pub fn with_config_endpoint(mut self, url: impl Into<String>) -> Self {
        self.config_endpoint = url.into();
        self
    }

    /// Set the outbound user agent.
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// Set the default slot TTL.
    pub fn with_default_slot_ttl_seconds(mut self, seconds: i64) -> Self {
        self.default_slot_ttl_seconds = seconds;
        self
    }

    /// Set the initial throttle window.
    pub fn with_default_throttle_seconds(mut self, seconds: i64) -> Self {
        self.default_throttle_seconds = seconds;
        self
    }
}

/// Server-controlled configuration fetched at runtime.
///
/// All fields default when absent from the wire so a partial config rolls
/// out safely.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RemoteConfig {
    /// When set, all bidding stops for the session.
    #[serde(default)]
    pub kill_switch: bool,

    /// Lifecycle-event throttle window in seconds; non-positive disables.
    #[serde(default)]
    pub app_event_throttle_seconds: i64,

    /// Overrides the default slot TTL when positive.
    #[serde(default)]
    pub slot_ttl_seconds: i64,
}
