//! Engine configuration
//!
//! # Parameters
//!
//! Every catalog slot targeting this device is registered in the local
//! parameter store with the default activity's starting value, so the store
//! can accept confirmed values on the first apply.

use leash_activity_core::limits::{LimitsCatalog, TargetDevice, DEFAULT_ACTIVITY};
use leash_activity_core::parameters::{ParamFlags, ParamStore, ParameterError};

/// Sync controller configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SyncConfig {
    /// Device the engine runs on; selects the slots written to the store
    pub device: TargetDevice,
    /// Activity used until the first authoritative response
    pub initial_activity: u8,
}

impl Default for SyncConfig {
    fn default() -> Self {
        Self {
            device: TargetDevice::LEASH,
            initial_activity: DEFAULT_ACTIVITY,
        }
    }
}

impl SyncConfig {
    /// Configuration for `device` starting in the default activity
    pub fn for_device(device: TargetDevice) -> Self {
        Self {
            device,
            ..Self::default()
        }
    }
}

/// Register catalog parameters relevant to `device`
///
/// # Arguments
///
/// * `store` - Parameter store to register parameters in
/// * `catalog` - Limits catalog describing the slots
/// * `device` - Device whose parameters are registered
///
/// # Returns
///
/// Number of parameters considered (already registered ones included)
pub fn register_catalog_defaults(
    store: &mut ParamStore,
    catalog: &LimitsCatalog,
    device: TargetDevice,
) -> Result<usize, ParameterError> {
    let mut registered = 0;
    for (slot, info) in catalog.params().iter().enumerate() {
        if !info.targets(device) {
            continue;
        }
        let default_value = catalog
            .default_limit(slot)
            .map(|limit| limit.default_value())
            .unwrap_or(0.0);
        store.register(info.name, default_value, ParamFlags::empty())?;
        registered += 1;
    }
    Ok(registered)
}

#[cfg(test)]
mod tests {
    use super::*;
    use leash_activity_core::limits::{ActivityLimits, LimitDescriptor, ParamInfo, SlotLimit};

    static PARAMS: [ParamInfo; 3] = [
        ParamInfo::new("ACT_MODE", "Mode", TargetDevice::ALL),
        ParamInfo::new("ACT_BEEP", "Beep", TargetDevice::LEASH),
        ParamInfo::new("ACT_GAIN", "Gain", TargetDevice::DOG),
    ];

    static DEFAULT: [SlotLimit; 3] = [
        SlotLimit::new(0, LimitDescriptor::DiscreteInt(&[0.0, 1.0])),
        SlotLimit::new(
            1,
            LimitDescriptor::Interval {
                start: 1.0,
                end: 5.0,
                step: 1.0,
            },
        ),
        SlotLimit::new(2, LimitDescriptor::DiscreteFloat(&[0.5])),
    ];

    static ACTIVITIES: [ActivityLimits; 1] = [ActivityLimits::new("Default", &DEFAULT)];

    static CATALOG: LimitsCatalog = LimitsCatalog::new(&PARAMS, &ACTIVITIES);

    #[test]
    fn test_default_config() {
        let config = SyncConfig::default();
        assert_eq!(config.device, TargetDevice::LEASH);
        assert_eq!(config.initial_activity, DEFAULT_ACTIVITY);
        assert_eq!(SyncConfig::for_device(TargetDevice::DOG).device, TargetDevice::DOG);
    }

    #[test]
    fn test_register_leash_defaults() {
        let mut store = ParamStore::new();
        let count = register_catalog_defaults(&mut store, &CATALOG, TargetDevice::LEASH).unwrap();
        assert_eq!(count, 2);
        assert_eq!(store.get("ACT_MODE"), Some(0.0));
        assert_eq!(store.get("ACT_BEEP"), Some(1.0));
        assert_eq!(store.get("ACT_GAIN"), None);
    }

    #[test]
    fn test_register_is_idempotent() {
        let mut store = ParamStore::new();
        register_catalog_defaults(&mut store, &CATALOG, TargetDevice::LEASH).unwrap();
        store.set("ACT_BEEP", 4.0).unwrap();
        register_catalog_defaults(&mut store, &CATALOG, TargetDevice::LEASH).unwrap();
        assert_eq!(store.get("ACT_BEEP"), Some(4.0));
    }
}
