//! Bidding service boundary.
//!
//! This module defines the asynchronous contracts the runtime consumes from
//! the remote bidding service: bid fetch, remote configuration fetch, and
//! creative content fetch. Transport details stay behind these traits so the
//! core can be driven by the reqwest-backed [`HttpApi`] in production and by
//! mocks in tests.

mod http;
mod types;

pub use http::HttpApi;
pub use types::{
    AdUnitRequest, BidFetcher, BidRequest, BidResponse, BoxFuture, ConfigFetcher,
    CreativeFetcher, FetchError,
};

#[cfg(test)]
pub use types::tests::{MockBidFetcher, MockConfigFetcher, MockCreativeFetcher};
