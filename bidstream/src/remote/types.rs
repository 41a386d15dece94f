//! Boundary traits and wire types for the bidding service.

use std::future::Future;
use std::pin::Pin;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::config::RemoteConfig;
use crate::slot::Slot;

/// Boxed future type for dyn-compatible async methods.
pub type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;

/// Errors from the remote boundary.
///
/// Variants carry rendered messages rather than source errors so they stay
/// `Clone` for mock plumbing and fire-and-forget logging.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum FetchError {
    /// Transport-level failure (connect, timeout, body read).
    #[error("HTTP error: {0}")]
    Http(String),

    /// Non-success HTTP status.
    #[error("HTTP {status} from {url}")]
    Status { status: u16, url: String },

    /// Response body did not decode.
    #[error("Failed to decode response: {0}")]
    Decode(String),

    /// Bidding is disabled by the remote kill switch.
    #[error("Bidding disabled by remote kill switch")]
    Disabled,
}

/// One ad unit the publisher is requesting bids for.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdUnitRequest {
    /// Publisher-declared placement identifier.
    pub placement_id: String,
    /// Requested sizes as `"WxH"` strings.
    pub sizes: Vec<String>,
    /// Whether a native bid is requested.
    #[serde(default)]
    pub is_native: bool,
}

/// Request descriptor sent to the bidding service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BidRequest {
    /// Publisher account identifier.
    pub publisher_id: String,
    /// Host application bundle identifier.
    pub bundle_id: String,
    /// SDK version string.
    pub sdk_version: String,
    /// Ad units to bid on.
    pub ad_units: Vec<AdUnitRequest>,
}

/// Response from the bidding service.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BidResponse {
    /// Won bids, one per ad unit at most.
    #[serde(default)]
    pub slots: Vec<Slot>,
}

/// Fetches won bids for a set of ad units.
///
/// On success the caller inserts the slots into the cache; on failure the
/// cache is left untouched.
pub trait BidFetcher: Send + Sync {
    /// Request bids for the given descriptor.
    fn fetch_bids(&self, request: BidRequest) -> BoxFuture<'_, Result<Vec<Slot>, FetchError>>;
}

/// Fetches the remote SDK configuration.
pub trait ConfigFetcher: Send + Sync {
    /// Retrieve the current remote configuration.
    fn fetch_config(&self) -> BoxFuture<'_, Result<RemoteConfig, FetchError>>;
}

/// Fetches renderable creative content for a display URL.
pub trait CreativeFetcher: Send + Sync {
    /// Retrieve the creative document at `url`, presenting `user_agent`.
    fn fetch(&self, url: &str, user_agent: &str) -> BoxFuture<'_, Result<String, FetchError>>;
}
