#![cfg_attr(not(test), no_std)]

//! leash_activity - Activity parameter menu engine for the leash device
//!
//! This library binds the pure logic of `leash_activity_core` (limits catalog,
//! editors, navigation, messages) to a synchronization controller that keeps
//! the menu in step with the remote parameter authority.

// Logging macros and target-independent support
pub mod core;

// Engine configuration and parameter registration
pub mod config;

// Request / apply / save protocol
pub mod sync;

pub use config::{register_catalog_defaults, SyncConfig};
pub use leash_activity_core as activity;
pub use sync::{SyncController, SyncError, SyncState};
