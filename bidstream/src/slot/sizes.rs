//! Recognized standard banner sizes.
//!
//! Bids for typed (non-native) slots are only considered renderable when
//! their declared geometry matches a recognized IAB ad unit size or one of
//! the device full-screen reference sizes. This table carries the fixed IAB
//! registry; full-screen sizes come from the device geometry provider.

/// IAB standard ad unit sizes as `(width, height)` pairs.
pub const STANDARD_BANNER_SIZES: &[(u32, u32)] = &[
    (320, 50),
    (320, 100),
    (300, 250),
    (250, 250),
    (240, 400),
    (336, 280),
    (180, 150),
    (300, 100),
    (720, 300),
    (468, 60),
    (234, 60),
    (88, 31),
    (120, 90),
    (120, 60),
    (120, 240),
    (125, 125),
    (728, 90),
    (160, 600),
    (120, 600),
    (300, 600),
    (970, 250),
];

/// Check whether the given geometry is a recognized standard banner size.
pub fn is_standard_banner_size(width: u32, height: u32) -> bool {
    STANDARD_BANNER_SIZES.contains(&(width, height))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_common_mobile_sizes_recognized() {
        assert!(is_standard_banner_size(320, 50));
        assert!(is_standard_banner_size(300, 250));
        assert!(is_standard_banner_size(728, 90));
    }

    #[test]
    fn test_unknown_size_rejected() {
        assert!(!is_standard_banner_size(321, 50));
        assert!(!is_standard_banner_size(0, 0));
        assert!(!is_standard_banner_size(50, 320));
    }
}
