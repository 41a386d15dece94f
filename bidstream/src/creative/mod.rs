//! Creative prefetch state machine and downloader.
//!
//! Display must never wait on the network, so the creative document for the
//! next ad is fetched ahead of time. [`CreativeState`] tracks one creative's
//! prefetch lifecycle, and [`CreativeDownloader`] drives it through an
//! asynchronous fetch.
//!
//! # State Machine
//!
//! ```text
//! None --[fill_content]--> Loading --[fetch ok]--> Loaded
//! Loading --[fetch failed]--> None (content cleared)
//! Loaded --[refresh / unload]--> None (content cleared)
//! ```
//!
//! A second `fill_content` while a fetch is in flight is rejected
//! atomically; callers never need to coordinate around `is_loading()`
//! themselves.

mod downloader;
mod state;

pub use downloader::CreativeDownloader;
pub use state::{CreativeState, DownloadStatus};
