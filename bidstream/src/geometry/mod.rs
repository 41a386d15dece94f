//! Device geometry provider boundary.
//!
//! Slot classification needs the two orientation-specific full-screen
//! reference sizes of the host device. Probing real device metrics is host
//! platform glue and lives outside this crate; the cache depends only on
//! this trait.

use std::fmt;

/// A screen size in density-independent pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ScreenSize {
    /// Width in density-independent pixels.
    pub width: u32,
    /// Height in density-independent pixels.
    pub height: u32,
}

impl ScreenSize {
    /// Create a new screen size.
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// True if the given geometry matches this size exactly.
    pub fn matches(&self, width: u32, height: u32) -> bool {
        self.width == width && self.height == height
    }
}

impl fmt::Display for ScreenSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

/// Supplies the full-screen reference sizes used to classify interstitials.
///
/// All implementations must be `Send + Sync` for use across async tasks.
pub trait DeviceGeometry: Send + Sync {
    /// Full-screen size in portrait orientation.
    fn portrait(&self) -> ScreenSize;

    /// Full-screen size in landscape orientation.
    fn landscape(&self) -> ScreenSize;
}

/// Fixed reference sizes, for hosts that resolve their metrics up front and
/// for tests.
#[derive(Debug, Clone, Copy)]
pub struct FixedGeometry {
    portrait: ScreenSize,
    landscape: ScreenSize,
}

impl FixedGeometry {
    /// Create a provider from resolved portrait and landscape sizes.
    pub fn new(portrait: ScreenSize, landscape: ScreenSize) -> Self {
        Self {
            portrait,
            landscape,
        }
    }
}

impl DeviceGeometry for FixedGeometry {
    fn portrait(&self) -> ScreenSize {
        self.portrait
    }

    fn landscape(&self) -> ScreenSize {
        self.landscape
    }
}
