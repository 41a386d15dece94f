//! Bid slot data model.
//!
//! A [`Slot`] is a single cached bid result: the renderable creative payload
//! plus the metadata needed to address, validate, and expire it. Slots are
//! addressed by [`SlotKey`], an immutable composite identity derived from the
//! placement, declared geometry, and classified [`AdFormat`].
//!
//! # Lifecycle
//!
//! Slots are created by deserializing a bid response, stamped with a download
//! timestamp when they enter the cache, and destroyed on consumption or cache
//! clear. They are never mutated in place after insertion.

mod format;
mod key;
mod model;
mod sizes;

pub use format::AdFormat;
pub use key::SlotKey;
pub use model::Slot;
pub use sizes::{is_standard_banner_size, STANDARD_BANNER_SIZES};
