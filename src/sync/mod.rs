//! Activity parameter synchronization
//!
//! The [`SyncController`] keeps the on-device parameter editors in step with
//! the remote authority that owns the real values:
//!
//! 1. On startup it requests the authority's values and runs on catalog
//!    defaults ([`SyncState::Unsynced`]).
//! 2. [`SyncController::poll`] applies the first received snapshot
//!    ([`SyncState::Synced`]).
//! 3. [`SyncController::save`] publishes local edits and asks the authority to
//!    resend ([`SyncState::RefreshPending`]) until the next snapshot arrives.

pub mod controller;
pub mod error;
pub mod shared;
pub mod state;

pub use controller::{RenderResult, SyncController};
pub use error::SyncError;
#[cfg(feature = "embassy")]
pub use shared::CriticalSectionCell;
pub use shared::{ControllerCell, LocalCell};
pub use state::SyncState;
