//! Limits catalog
//!
//! Immutable, process-wide tables describing every parameter slot and each
//! activity's limit descriptors. Activity 0 is the default activity: its list
//! holds one descriptor per slot, in slot order, and is the fallback for any
//! slot another activity does not override.
//!
//! The catalog is built once from `'static` tables before any controller is
//! constructed and is passed by reference into every instance.

use super::descriptor::{LimitDescriptor, SlotId};
use super::error::CatalogError;
use bitflags::bitflags;

/// Maximum number of parameter slots (capacity of a sync message)
pub const MAX_SLOTS: usize = 32;

/// Maximum number of ticks an interval descriptor may span
///
/// Keeps every tick index exactly representable in `f32`, so interval
/// stepping lands on the same tick values in both directions.
pub const MAX_INTERVAL_TICKS: u32 = 1 << 16;

/// Identifier of the default activity
pub const DEFAULT_ACTIVITY: u8 = 0;

bitflags! {
    /// Subsystems a parameter applies to
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct TargetDevice: u8 {
        /// Handheld leash unit running the menu
        const LEASH = 0b00000001;
        /// Remote unit holding the authoritative values
        const DOG = 0b00000010;
        /// Both devices
        const ALL = Self::LEASH.bits() | Self::DOG.bits();
    }
}

/// Read-only metadata of one parameter slot
#[derive(Debug)]
pub struct ParamInfo {
    /// Parameter store key (max 16 characters)
    pub name: &'static str,
    /// Label shown in the menu
    pub display_name: &'static str,
    /// Devices that consume the parameter
    pub target: TargetDevice,
    /// Labels addressed by integer value, for string-mode descriptors
    pub display_values: &'static [&'static str],
}

impl ParamInfo {
    /// Create metadata without a display value table
    pub const fn new(name: &'static str, display_name: &'static str, target: TargetDevice) -> Self {
        Self {
            name,
            display_name,
            target,
            display_values: &[],
        }
    }

    /// Attach the display value table
    pub const fn with_display_values(mut self, display_values: &'static [&'static str]) -> Self {
        self.display_values = display_values;
        self
    }

    /// Check whether the parameter applies to `device`
    pub fn targets(&self, device: TargetDevice) -> bool {
        self.target.intersects(device)
    }
}

/// A descriptor bound to the slot it governs
#[derive(Debug)]
pub struct SlotLimit {
    /// Governed slot
    pub slot: SlotId,
    /// Rule for the slot
    pub limit: LimitDescriptor,
}

impl SlotLimit {
    /// Create a slot limit
    pub const fn new(slot: SlotId, limit: LimitDescriptor) -> Self {
        Self { slot, limit }
    }
}

/// Descriptor list of one activity
#[derive(Debug)]
pub struct ActivityLimits {
    /// Activity label
    pub name: &'static str,
    /// Ordered descriptors
    pub limits: &'static [SlotLimit],
}

impl ActivityLimits {
    /// Create an activity descriptor list
    pub const fn new(name: &'static str, limits: &'static [SlotLimit]) -> Self {
        Self { name, limits }
    }

    /// Override for `slot`, if this activity defines one
    pub fn find(&self, slot: SlotId) -> Option<&'static LimitDescriptor> {
        self.limits
            .iter()
            .find(|entry| entry.slot == slot)
            .map(|entry| &entry.limit)
    }
}

/// Static parameter metadata and per-activity limits
#[derive(Debug)]
pub struct LimitsCatalog {
    params: &'static [ParamInfo],
    activities: &'static [ActivityLimits],
}

impl LimitsCatalog {
    /// Create a catalog over static tables
    ///
    /// Call [`LimitsCatalog::validate`] before handing it to a controller.
    pub const fn new(params: &'static [ParamInfo], activities: &'static [ActivityLimits]) -> Self {
        Self { params, activities }
    }

    /// Number of parameter slots
    pub fn slot_count(&self) -> usize {
        self.params.len()
    }

    /// Number of activities, default activity included
    pub fn activity_count(&self) -> usize {
        self.activities.len()
    }

    /// Metadata for `slot`
    pub fn param(&self, slot: SlotId) -> Option<&'static ParamInfo> {
        self.params.get(slot)
    }

    /// All parameter metadata in slot order
    pub fn params(&self) -> &'static [ParamInfo] {
        self.params
    }

    /// Descriptor list of `activity`
    pub fn activity(&self, activity: u8) -> Option<&'static ActivityLimits> {
        self.activities.get(activity as usize)
    }

    /// Check whether `activity` names a catalog entry
    pub fn has_activity(&self, activity: u8) -> bool {
        (activity as usize) < self.activities.len()
    }

    /// Default activity's descriptor for `slot`
    pub fn default_limit(&self, slot: SlotId) -> Option<&'static LimitDescriptor> {
        self.activities
            .first()
            .and_then(|default| default.limits.get(slot))
            .map(|entry| &entry.limit)
    }

    /// Check the structural rules the resolver and editors rely on
    pub fn validate(&self) -> Result<(), CatalogError> {
        let default = self.activities.first().ok_or(CatalogError::Empty)?;
        let slots = default.limits.len();
        if slots == 0 {
            return Err(CatalogError::Empty);
        }
        if slots > MAX_SLOTS {
            return Err(CatalogError::TooManySlots { count: slots });
        }
        if self.params.len() != slots {
            return Err(CatalogError::MetadataMismatch {
                params: self.params.len(),
                slots,
            });
        }
        if let Some(index) = default
            .limits
            .iter()
            .enumerate()
            .position(|(index, entry)| entry.slot != index)
        {
            return Err(CatalogError::DefaultOutOfOrder { index });
        }

        for (activity, limits) in self.activities.iter().enumerate() {
            let activity = activity as u8;
            for (position, entry) in limits.limits.iter().enumerate() {
                if entry.slot >= slots {
                    return Err(CatalogError::UnknownSlot {
                        activity,
                        slot: entry.slot,
                    });
                }
                if limits.limits[..position]
                    .iter()
                    .any(|earlier| earlier.slot == entry.slot)
                {
                    return Err(CatalogError::DuplicateOverride {
                        activity,
                        slot: entry.slot,
                    });
                }
                if !descriptor_is_steppable(&entry.limit) {
                    return Err(CatalogError::InvalidDescriptor {
                        activity,
                        slot: entry.slot,
                    });
                }
            }
        }

        Ok(())
    }
}

fn descriptor_is_steppable(limit: &LimitDescriptor) -> bool {
    match limit {
        LimitDescriptor::Invisible => true,
        LimitDescriptor::Interval { start, end, step } => {
            *step > 0.0 && start <= end && (end - start) / step <= MAX_INTERVAL_TICKS as f32
        }
        other => other.values().is_some_and(|values| !values.is_empty()),
    }
}
