//! Catalog validation errors

use super::descriptor::SlotId;
use core::fmt;

/// Reasons a limits catalog is rejected
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CatalogError {
    /// No activities, or the default activity lists no slots
    Empty,
    /// More slots than a sync message can carry
    TooManySlots {
        /// Slots described by the catalog
        count: usize,
    },
    /// Parameter metadata count differs from the default activity's slot count
    MetadataMismatch {
        /// Metadata entries
        params: usize,
        /// Default activity descriptors
        slots: usize,
    },
    /// Default activity entry at `index` does not describe slot `index`
    DefaultOutOfOrder {
        /// Position in the default activity's list
        index: usize,
    },
    /// An override names a slot the catalog does not have
    UnknownSlot {
        /// Activity holding the override
        activity: u8,
        /// Offending slot
        slot: SlotId,
    },
    /// An activity overrides the same slot twice
    DuplicateOverride {
        /// Activity holding the override
        activity: u8,
        /// Offending slot
        slot: SlotId,
    },
    /// Activity id outside the catalog
    UnknownActivity {
        /// Requested activity
        activity: u8,
    },
    /// A descriptor cannot be stepped (empty list, bad interval, too many ticks)
    InvalidDescriptor {
        /// Activity holding the descriptor
        activity: u8,
        /// Offending slot
        slot: SlotId,
    },
}

impl CatalogError {
    /// Return variant name as a static string (usable with defmt on embedded)
    pub fn as_str(&self) -> &'static str {
        match self {
            CatalogError::Empty => "Empty",
            CatalogError::TooManySlots { .. } => "TooManySlots",
            CatalogError::MetadataMismatch { .. } => "MetadataMismatch",
            CatalogError::DefaultOutOfOrder { .. } => "DefaultOutOfOrder",
            CatalogError::UnknownSlot { .. } => "UnknownSlot",
            CatalogError::DuplicateOverride { .. } => "DuplicateOverride",
            CatalogError::UnknownActivity { .. } => "UnknownActivity",
            CatalogError::InvalidDescriptor { .. } => "InvalidDescriptor",
        }
    }
}

impl fmt::Display for CatalogError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CatalogError::Empty => write!(f, "limits catalog is empty"),
            CatalogError::TooManySlots { count } => {
                write!(f, "catalog describes {} slots, too many for a sync message", count)
            }
            CatalogError::MetadataMismatch { params, slots } => write!(
                f,
                "{} parameter entries for {} default slots",
                params, slots
            ),
            CatalogError::DefaultOutOfOrder { index } => {
                write!(f, "default activity entry {} is not slot {}", index, index)
            }
            CatalogError::UnknownSlot { activity, slot } => {
                write!(f, "activity {} overrides unknown slot {}", activity, slot)
            }
            CatalogError::DuplicateOverride { activity, slot } => {
                write!(f, "activity {} overrides slot {} twice", activity, slot)
            }
            CatalogError::UnknownActivity { activity } => {
                write!(f, "activity {} is not in the catalog", activity)
            }
            CatalogError::InvalidDescriptor { activity, slot } => {
                write!(f, "activity {} has an invalid descriptor for slot {}", activity, slot)
            }
        }
    }
}
