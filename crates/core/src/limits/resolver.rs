//! Activity-scoped limit resolution
//!
//! For the active activity, binds every slot to that activity's override or,
//! failing that, to the default activity's descriptor. Must run after every
//! activity change, before any navigation or stepping; until it does, editors
//! still reference the previous activity's descriptors.

use super::catalog::LimitsCatalog;
use super::descriptor::{LimitDescriptor, SlotId};
use super::error::CatalogError;
use crate::editor::ParamEditor;

/// Binds slot descriptors for an activity
#[derive(Debug, Clone, Copy)]
pub struct LimitResolver<'c> {
    catalog: &'c LimitsCatalog,
}

impl<'c> LimitResolver<'c> {
    /// Create a resolver over a validated catalog
    pub fn new(catalog: &'c LimitsCatalog) -> Self {
        Self { catalog }
    }

    /// Descriptor governing `slot` under `activity`
    pub fn resolve_slot(
        &self,
        activity: u8,
        slot: SlotId,
    ) -> Result<&'static LimitDescriptor, CatalogError> {
        let limits = self
            .catalog
            .activity(activity)
            .ok_or(CatalogError::UnknownActivity { activity })?;

        limits
            .find(slot)
            .or_else(|| self.catalog.default_limit(slot))
            .ok_or(CatalogError::UnknownSlot { activity, slot })
    }

    /// Rebind every editor to its descriptor under `activity`
    ///
    /// Nothing is rebound when the activity or any slot is unknown.
    pub fn resolve(&self, activity: u8, editors: &mut [ParamEditor]) -> Result<(), CatalogError> {
        for editor in editors.iter() {
            self.resolve_slot(activity, editor.slot())?;
        }
        for editor in editors.iter_mut() {
            let limit = self.resolve_slot(activity, editor.slot())?;
            editor.bind(limit);
        }
        Ok(())
    }
}
