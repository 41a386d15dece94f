//! Cache key identifying a single ad slot.

use super::format::AdFormat;

/// Immutable composite identity addressing one cached bid.
///
/// Equality and hashing cover all four fields, so two bids for the same
/// placement at different sizes (or formats) occupy distinct cache entries.
///
/// # Note
///
/// Width and height are the slot's declared geometry. For `Native` slots the
/// geometry is a placeholder carried through from the bid; it still
/// participates in identity so a publisher can declare multiple native units
/// under one placement id.
///
/// # Example
///
/// ```
/// use bidstream::slot::{AdFormat, SlotKey};
///
/// let key = SlotKey::new("banner-1", 320, 50, AdFormat::Banner);
/// assert_eq!(key.ad_unit_id(), "banner-1");
/// assert_eq!(key.width(), 320);
/// assert_eq!(key.height(), 50);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SlotKey {
    /// Publisher-declared ad unit / placement identifier.
    ad_unit_id: String,
    /// Declared slot width in density-independent pixels.
    width: u32,
    /// Declared slot height in density-independent pixels.
    height: u32,
    /// Classified rendering format.
    format: AdFormat,
}

impl SlotKey {
    /// Create a new slot key.
    ///
    /// # Arguments
    ///
    /// * `ad_unit_id` - Publisher-declared placement identifier
    /// * `width` - Declared width (placeholder for native)
    /// * `height` - Declared height (placeholder for native)
    /// * `format` - Classified rendering format
    pub fn new(ad_unit_id: impl Into<String>, width: u32, height: u32, format: AdFormat) -> Self {
        Self {
            ad_unit_id: ad_unit_id.into(),
            width,
            height,
            format,
        }
    }

    /// Get the ad unit identifier.
    pub fn ad_unit_id(&self) -> &str {
        &self.ad_unit_id
    }

    /// Get the declared width.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Get the declared height.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Get the classified format.
    pub fn format(&self) -> AdFormat {
        self.format
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_new() {
        let key = SlotKey::new("unit-1", 300, 250, AdFormat::Banner);
        assert_eq!(key.ad_unit_id(), "unit-1");
        assert_eq!(key.width(), 300);
        assert_eq!(key.height(), 250);
        assert_eq!(key.format(), AdFormat::Banner);
    }

    #[test]
    fn test_equality() {
        let key1 = SlotKey::new("unit-1", 320, 50, AdFormat::Banner);
        let key2 = SlotKey::new("unit-1", 320, 50, AdFormat::Banner);
        let key3 = SlotKey::new("unit-1", 320, 50, AdFormat::Native);
        let key4 = SlotKey::new("unit-2", 320, 50, AdFormat::Banner);

        assert_eq!(key1, key2);
        assert_ne!(key1, key3);
        assert_ne!(key1, key4);
    }

    #[test]
    fn test_hash_distinguishes_format() {
        let mut set = HashSet::new();
        set.insert(SlotKey::new("unit-1", 320, 480, AdFormat::Interstitial));
        set.insert(SlotKey::new("unit-1", 320, 480, AdFormat::Interstitial));
        set.insert(SlotKey::new("unit-1", 320, 480, AdFormat::Native));

        assert_eq!(set.len(), 2);
    }

    #[test]
    fn test_hash_distinguishes_geometry() {
        let mut set = HashSet::new();
        set.insert(SlotKey::new("unit-1", 320, 50, AdFormat::Banner));
        set.insert(SlotKey::new("unit-1", 320, 100, AdFormat::Banner));

        assert_eq!(set.len(), 2);
    }
}
