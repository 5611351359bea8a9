//! Local Parameter Store
//!
//! Name-keyed float parameters with per-entry flags. The activity engine
//! pushes confirmed values into it through [`ParamSink`]; persistence of the
//! store is handled elsewhere.

use super::error::ParameterError;
use crate::traits::ParamSink;
use bitflags::bitflags;
use heapless::index_map::FnvIndexMap;
use heapless::String;

/// Maximum parameter name length
pub const PARAM_NAME_LEN: usize = 16;

/// Maximum number of parameters (power of two)
pub const MAX_PARAMS: usize = 64;

/// Parameter key
pub type ParamName = String<PARAM_NAME_LEN>;

bitflags! {
    /// Parameter flags
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct ParamFlags: u8 {
        /// Parameter rejects writes
        const READ_ONLY = 0b00000001;
    }
}

#[derive(Debug, Clone, Copy)]
struct Entry {
    value: f32,
    flags: ParamFlags,
}

/// Parameter store
pub struct ParamStore {
    entries: FnvIndexMap<ParamName, Entry, MAX_PARAMS>,
}

fn key(name: &str) -> Result<ParamName, ParameterError> {
    let mut key = ParamName::new();
    key.push_str(name).map_err(|_| ParameterError::NotFound)?;
    Ok(key)
}

impl ParamStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self {
            entries: FnvIndexMap::new(),
        }
    }

    /// Register a parameter with its default value
    ///
    /// Registering an existing name keeps its current value and flags.
    pub fn register(
        &mut self,
        name: &str,
        default_value: f32,
        flags: ParamFlags,
    ) -> Result<(), ParameterError> {
        let key = key(name)?;
        if self.entries.contains_key(&key) {
            return Ok(());
        }

        self.entries
            .insert(
                key,
                Entry {
                    value: default_value,
                    flags,
                },
            )
            .map_err(|_| ParameterError::StoreFull)?;
        Ok(())
    }

    /// Current value of `name`
    pub fn get(&self, name: &str) -> Option<f32> {
        let key = key(name).ok()?;
        self.entries.get(&key).map(|entry| entry.value)
    }

    /// Overwrite the value of a registered, writable parameter
    pub fn set(&mut self, name: &str, value: f32) -> Result<(), ParameterError> {
        let key = key(name)?;
        let entry = self
            .entries
            .get_mut(&key)
            .ok_or(ParameterError::NotFound)?;

        if entry.flags.contains(ParamFlags::READ_ONLY) {
            return Err(ParameterError::ReadOnly);
        }

        entry.value = value;
        Ok(())
    }

    /// Number of registered parameters
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the store is empty
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for ParamStore {
    fn default() -> Self {
        Self::new()
    }
}

impl ParamSink for ParamStore {
    fn set_param(&mut self, name: &str, value: f32) -> Result<(), ParameterError> {
        self.set(name, value)
    }
}
