//! Visibility-aware menu navigation
//!
//! The cursor walks the slot table cyclically, skipping slots whose resolved
//! descriptor is invisible. Every walk is bounded by the slot count, so a
//! table without visible slots terminates instead of spinning; callers then
//! check the visibility of the returned slot.

mod cursor;

pub use cursor::NavigationCursor;
