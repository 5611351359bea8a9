//! Activity limits
//!
//! Static catalog of parameter slots and per-activity limit descriptors, and
//! the resolver that binds each slot to the descriptor of the active activity.

mod catalog;
mod descriptor;
mod error;
mod resolver;

pub use catalog::{
    ActivityLimits, LimitsCatalog, ParamInfo, SlotLimit, TargetDevice, DEFAULT_ACTIVITY,
    MAX_INTERVAL_TICKS, MAX_SLOTS,
};
pub use descriptor::{float_eq, LimitDescriptor, LimitKind, SlotId, VALUE_EPSILON};
pub use error::CatalogError;
pub use resolver::LimitResolver;
