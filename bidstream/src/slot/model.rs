//! Cached bid result model.

use serde::{Deserialize, Serialize};

/// A single bid result returned by the bidding service.
///
/// Carries the renderable creative payload (markup and/or display URL) plus
/// the geometry and freshness metadata the cache needs. The wire format is
/// camelCase JSON; the download timestamp is runtime-only state stamped when
/// the slot enters the cache.
///
/// # Validity
///
/// A slot is renderable only if it names a placement, carries a payload, and
/// declares non-degenerate geometry. Native slots are exempt from the
/// geometry requirement; their declared size is a placeholder. The
/// additional standard-size check for typed slots lives in the cache, which
/// knows the device reference sizes.
///
/// # Expiry
///
/// A slot is expired once `now >= downloaded_at + ttl_seconds * 1000`. A
/// slot the server returns without a TTL expires immediately unless the
/// session assigns its configured default before insertion.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Slot {
    /// Publisher-declared placement identifier.
    pub placement_id: String,

    /// Declared width in density-independent pixels.
    #[serde(default)]
    pub width: u32,

    /// Declared height in density-independent pixels.
    #[serde(default)]
    pub height: u32,

    /// Whether the bid is for a native ad.
    #[serde(default)]
    pub is_native: bool,

    /// Winning price as an opaque decimal string.
    #[serde(default)]
    pub cpm: String,

    /// Currency of the winning price.
    #[serde(default)]
    pub currency: String,

    /// URL of the renderable creative document.
    #[serde(default)]
    pub display_url: String,

    /// Inline creative markup, when the server returns it directly.
    #[serde(default)]
    pub creative: String,

    /// Time-to-live in seconds; zero means the server assigned none.
    #[serde(default, rename = "ttl")]
    pub ttl_seconds: i64,

    /// When this slot entered the cache, epoch milliseconds. Runtime-only.
    #[serde(skip)]
    downloaded_at_epoch_millis: i64,
}

impl Slot {
    /// Create a slot with the given placement and geometry.
    ///
    /// Remaining fields start empty; use the `with_*` builders to fill them.
    pub fn new(placement_id: impl Into<String>, width: u32, height: u32) -> Self {
        Self {
            placement_id: placement_id.into(),
            width,
            height,
            is_native: false,
            cpm: String::new(),
            currency: String::new(),
            display_url: String::new(),
            creative: String::new(),
            ttl_seconds: 0,
            downloaded_at_epoch_millis: 0,
        }
    }

    /// Mark this slot as a native bid.
    pub fn native(mut self) -> Self {
        self.is_native = true;
        self
    }

    /// Set the display URL.
    pub fn with_display_url(mut self, url: impl Into<String>) -> Self {
        self.display_url = url.into();
        self
    }

    /// Set the inline creative markup.
    pub fn with_creative(mut self, creative: impl Into<String>) -> Self {
        self.creative = creative.into();
        self
    }

    /// Set the winning price.
    pub fn with_cpm(mut self, cpm: impl Into<String>, currency: impl Into<String>) -> Self {
        self.cpm = cpm.into();
        self.currency = currency.into();
        self
    }

    /// Set the time-to-live in seconds.
    pub fn with_ttl_seconds(mut self, ttl_seconds: i64) -> Self {
        self.ttl_seconds = ttl_seconds;
        self
    }

    /// True if the slot carries something renderable.
    pub fn has_payload(&self) -> bool {
        !self.display_url.is_empty() || !self.creative.is_empty()
    }

    /// Basic validity: named placement, payload present, geometry
    /// non-degenerate unless native.
    pub fn is_valid(&self) -> bool {
        if self.placement_id.is_empty() || !self.has_payload() {
            return false;
        }
        self.is_native || (self.width > 0 && self.height > 0)
    }

    /// Assign the default TTL if the server returned none.
    pub fn apply_default_ttl(&mut self, default_ttl_seconds: i64) {
        if self.ttl_seconds <= 0 {
            self.ttl_seconds = default_ttl_seconds;
        }
    }

    /// Record when this slot entered the cache.
    pub(crate) fn stamp(&mut self, now_epoch_millis: i64) {
        self.downloaded_at_epoch_millis = now_epoch_millis;
    }

    /// When this slot entered the cache, epoch milliseconds.
    pub fn downloaded_at_epoch_millis(&self) -> i64 {
        self.downloaded_at_epoch_millis
    }

    /// True once the TTL window has fully elapsed.
    pub fn is_expired(&self, now_epoch_millis: i64) -> bool {
        now_epoch_millis >= self.downloaded_at_epoch_millis + self.ttl_seconds * 1000
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_roundtrip() {
        let slot = Slot::new("banner-1", 320, 50)
            .with_display_url("https://cdn.example.com/creative")
            .with_cpm("1.25", "USD")
            .with_ttl_seconds(30);

        assert_eq!(slot.placement_id, "banner-1");
        assert_eq!(slot.width, 320);
        assert_eq!(slot.height, 50);
        assert!(!slot.is_native);
        assert_eq!(slot.ttl_seconds, 30);
        assert!(slot.has_payload());
    }

    #[test]
    fn test_valid_banner() {
        let slot = Slot::new("banner-1", 320, 50).with_display_url("https://x");
        assert!(slot.is_valid());
    }

    #[test]
    fn test_invalid_without_payload() {
        let slot = Slot::new("banner-1", 320, 50);
        assert!(!slot.is_valid());
    }

    #[test]
    fn test_invalid_without_placement() {
        let slot = Slot::new("", 320, 50).with_display_url("https://x");
        assert!(!slot.is_valid());
    }

    #[test]
    fn test_invalid_degenerate_geometry() {
        let slot = Slot::new("banner-1", 0, 50).with_display_url("https://x");
        assert!(!slot.is_valid());

        let slot = Slot::new("banner-1", 320, 0).with_display_url("https://x");
        assert!(!slot.is_valid());
    }

    #[test]
    fn test_native_exempt_from_geometry() {
        let slot = Slot::new("native-1", 2, 2)
            .native()
            .with_creative("{\"products\":[]}");
        assert!(slot.is_valid());

        let slot = Slot::new("native-1", 0, 0)
            .native()
            .with_creative("{\"products\":[]}");
        assert!(slot.is_valid());
    }

    #[test]
    fn test_expiry_window() {
        let mut slot = Slot::new("banner-1", 320, 50)
            .with_display_url("https://x")
            .with_ttl_seconds(1);
        slot.stamp(10_000);

        assert!(!slot.is_expired(10_000));
        assert!(!slot.is_expired(10_999));
        assert!(slot.is_expired(11_000));
        assert!(slot.is_expired(11_100));
    }

    #[test]
    fn test_zero_ttl_expires_immediately() {
        let mut slot = Slot::new("banner-1", 320, 50).with_display_url("https://x");
        slot.stamp(10_000);
        assert!(slot.is_expired(10_000));
    }

    #[test]
    fn test_apply_default_ttl() {
        let mut slot = Slot::new("banner-1", 320, 50).with_display_url("https://x");
        slot.apply_default_ttl(900);
        assert_eq!(slot.ttl_seconds, 900);

        // An explicit server TTL is kept.
        let mut slot = Slot::new("banner-1", 320, 50)
            .with_display_url("https://x")
            .with_ttl_seconds(30);
        slot.apply_default_ttl(900);
        assert_eq!(slot.ttl_seconds, 30);
    }

    #[test]
    fn test_wire_decode_camel_case() {
        let json = r#"{
            "placementId": "banner-1",
            "width": 320,
            "height": 50,
            "cpm": "1.50",
            "currency": "EUR",
            "displayUrl": "https://cdn.example.com/c",
            "ttl": 60
        }"#;
        let slot: Slot = serde_json::from_str(json).unwrap();
        assert_eq!(slot.placement_id, "banner-1");
        assert_eq!(slot.ttl_seconds, 60);
        assert_eq!(slot.currency, "EUR");
        assert!(!slot.is_native);
        assert_eq!(slot.downloaded_at_epoch_millis(), 0);
    }

    #[test]
    fn test_wire_decode_native_defaults() {
        let json = r#"{
            "placementId": "native-1",
            "isNative": true,
            "creative": "{}"
        }"#;
        let slot: Slot = serde_json::from_str(json).unwrap();
        assert!(slot.is_native);
        assert_eq!(slot.width, 0);
        assert_eq!(slot.ttl_seconds, 0);
        assert!(slot.is_valid());
    }
}
