//! Shared controller access
//!
//! A [`SyncController`] has no internal locking. When the host drives it from
//! more than one execution context (UI task, polling timer, interrupt handler)
//! it lives inside a `ControllerCell`, which runs every operation as one
//! serialized section.
//!
//! - `CriticalSectionCell` for embedded targets (`embassy` feature)
//! - `LocalCell` for host testing and single-context hosts

use super::controller::{RenderResult, SyncController};
use super::error::SyncError;
use super::state::SyncState;
use core::cell::RefCell;
use leash_activity_core::traits::{ActivityTransport, ParamSink};

/// Serialized access to a [`SyncController`]
///
/// Implementors only provide [`ControllerCell::lock`]; the operations a UI
/// loop or timer needs are forwarded through it so each one completes before
/// another context can observe the controller.
///
/// # Example
///
/// ```ignore
/// fn on_timer<C: ControllerCell<Bus, ParamStore>>(cell: &C) {
///     if let Err(e) = cell.poll() {
///         log_error!("poll failed: {}", e.as_str());
///     }
/// }
/// ```
pub trait ControllerCell<T: ActivityTransport, S: ParamSink> {
    /// Run `f` with exclusive access to the controller
    fn lock<R>(&self, f: impl FnOnce(&mut SyncController<T, S>) -> R) -> R;

    /// See [`SyncController::poll`]
    fn poll(&self) -> Result<bool, SyncError> {
        self.lock(|controller| controller.poll())
    }

    /// See [`SyncController::save`]
    fn save(&self) -> Result<(), SyncError> {
        self.lock(|controller| controller.save())
    }

    /// See [`SyncController::cancel`]
    fn cancel(&self) -> Result<(), SyncError> {
        self.lock(|controller| controller.cancel())
    }

    /// See [`SyncController::next_value`]
    fn next_value(&self) -> RenderResult {
        self.lock(|controller| controller.next_value())
    }

    /// See [`SyncController::prev_value`]
    fn prev_value(&self) -> RenderResult {
        self.lock(|controller| controller.prev_value())
    }

    /// Synchronization state
    fn state(&self) -> SyncState {
        self.lock(|controller| controller.state())
    }
}

// ============================================================================
// Embassy Implementation
// ============================================================================

#[cfg(feature = "embassy")]
use embassy_sync::blocking_mutex::{raw::CriticalSectionRawMutex, Mutex};

/// Controller guarded by a critical section
///
/// Safe to use from async tasks and interrupt handlers alike.
#[cfg(feature = "embassy")]
pub struct CriticalSectionCell<T: ActivityTransport, S: ParamSink> {
    inner: Mutex<CriticalSectionRawMutex, RefCell<SyncController<T, S>>>,
}

#[cfg(feature = "embassy")]
impl<T: ActivityTransport, S: ParamSink> CriticalSectionCell<T, S> {
    /// Wrap a constructed controller
    pub const fn new(controller: SyncController<T, S>) -> Self {
        Self {
            inner: Mutex::new(RefCell::new(controller)),
        }
    }
}

#[cfg(feature = "embassy")]
impl<T: ActivityTransport, S: ParamSink> ControllerCell<T, S> for CriticalSectionCell<T, S> {
    fn lock<R>(&self, f: impl FnOnce(&mut SyncController<T, S>) -> R) -> R {
        self.inner.lock(|cell| f(&mut cell.borrow_mut()))
    }
}

// ============================================================================
// Local Implementation (always available for testing)
// ============================================================================

/// Single-context controller cell backed by `RefCell`
///
/// # Panics
///
/// Panics on re-entrant access, e.g. calling `poll` from inside `lock`.
pub struct LocalCell<T: ActivityTransport, S: ParamSink> {
    inner: RefCell<SyncController<T, S>>,
}

impl<T: ActivityTransport, S: ParamSink> LocalCell<T, S> {
    /// Wrap a constructed controller
    pub const fn new(controller: SyncController<T, S>) -> Self {
        Self {
            inner: RefCell::new(controller),
        }
    }

    /// Release the controller
    pub fn into_inner(self) -> SyncController<T, S> {
        self.inner.into_inner()
    }
}

impl<T: ActivityTransport, S: ParamSink> ControllerCell<T, S> for LocalCell<T, S> {
    fn lock<R>(&self, f: impl FnOnce(&mut SyncController<T, S>) -> R) -> R {
        f(&mut self.inner.borrow_mut())
    }
}
