//! Ad format classification values.

use std::fmt;

use serde::{Deserialize, Serialize};

/// The rendering format of an ad slot.
///
/// Classification is performed by the slot cache: a slot that declares
/// itself native is always `Native`, regardless of its geometry; otherwise
/// a slot whose dimensions exactly match a device full-screen reference
/// size is `Interstitial`, and everything else is `Banner`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum AdFormat {
    /// Inline banner of a recognized standard size.
    Banner,
    /// Full-screen creative matching a device reference size.
    Interstitial,
    /// Native ad; geometry is a placeholder.
    Native,
}

impl AdFormat {
    /// Get a short description for display.
    pub fn as_str(&self) -> &'static str {
        match self {
            AdFormat::Banner => "Banner",
            AdFormat::Interstitial => "Interstitial",
            AdFormat::Native => "Native",
        }
    }
}

impl fmt::Display for AdFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
