//! Sync Controller
//!
//! Owns the parameter editors, the navigation cursor, the active activity and
//! the synchronization state, and drives the request / receive / apply /
//! publish protocol against the remote parameter authority.
//!
//! ## Responsibilities
//!
//! - Request authoritative values at construction
//! - Apply a received snapshot: activity, limit resolution, editor values,
//!   local parameter store
//! - Publish saved values and notify the authority to refresh
//! - Restore the last known good snapshot on cancel
//!
//! ## Apply atomicity
//!
//! Store writes run first, in slot order. The first failing write aborts the
//! apply with [`SyncError::StoreWrite`] naming the slot; activity, editors,
//! cursor, snapshot and state are left untouched. Store entries written before
//! the failure keep their new values.
//!
//! ## Concurrency
//!
//! The controller has no internal locking. Hosts that poll from an interrupt
//! or timer context must wrap it in a [`ControllerCell`](super::ControllerCell).

use super::error::SyncError;
use super::state::SyncState;
use crate::config::SyncConfig;
use leash_activity_core::editor::{
    Direction, DisplayError, DisplayText, ParamEditor, Rendered,
};
use leash_activity_core::limits::{
    CatalogError, LimitResolver, LimitsCatalog, SlotId, MAX_SLOTS,
};
use leash_activity_core::messages::{
    ActivityParams, Message, ParamsKind, RequestKind, SenderKind, SlotValues,
};
use leash_activity_core::navigation::NavigationCursor;
use leash_activity_core::traits::{ActivityTransport, ParamSink, SubscriptionId};

/// Rendered display text with its render outcome
pub type RenderResult = (DisplayText, Result<Rendered, DisplayError>);

/// Activity parameter engine bound to a transport and a parameter store
pub struct SyncController<T: ActivityTransport, S: ParamSink> {
    catalog: &'static LimitsCatalog,
    config: SyncConfig,
    transport: T,
    store: S,
    subscription: SubscriptionId,
    editors: heapless::Vec<ParamEditor, MAX_SLOTS>,
    cursor: NavigationCursor,
    activity: u8,
    state: SyncState,
    /// Last applied or saved snapshot, source of truth for cancel
    last_known_good: Option<ActivityParams>,
}

impl<T: ActivityTransport, S: ParamSink> SyncController<T, S> {
    /// Create the controller and request authoritative values
    ///
    /// Editors start on the initial activity's descriptors and default values.
    /// A failed request is logged and can be retried with
    /// [`SyncController::request_params`].
    ///
    /// # Errors
    ///
    /// Fails when the catalog does not validate, the initial activity is not
    /// in it, or the transport has no subscription slot left.
    pub fn new(
        catalog: &'static LimitsCatalog,
        config: SyncConfig,
        mut transport: T,
        store: S,
    ) -> Result<Self, SyncError> {
        catalog.validate()?;
        if !catalog.has_activity(config.initial_activity) {
            return Err(SyncError::UnknownActivity {
                activity: config.initial_activity,
            });
        }

        let mut editors = heapless::Vec::new();
        for (slot, info) in catalog.params().iter().enumerate() {
            let limit = catalog.default_limit(slot).ok_or(CatalogError::Empty)?;
            editors
                .push(ParamEditor::new(slot, info, limit))
                .map_err(|_| CatalogError::TooManySlots {
                    count: catalog.slot_count(),
                })?;
        }
        LimitResolver::new(catalog).resolve(config.initial_activity, &mut editors)?;

        let subscription = transport.subscribe()?;

        let mut controller = Self {
            catalog,
            config,
            transport,
            store,
            subscription,
            editors,
            cursor: NavigationCursor::new(),
            activity: config.initial_activity,
            state: SyncState::Unsynced,
            last_known_good: None,
        };

        if let Err(_e) = controller.request_params() {
            crate::log_error!("Activity params request failed: {}", _e.as_str());
        }

        Ok(controller)
    }

    /// Ask the remote authority to send its parameter values
    pub fn request_params(&mut self) -> Result<(), SyncError> {
        self.transport
            .publish(&Message::Request(RequestKind::Params))?;
        crate::log_debug!("Activity params requested");
        Ok(())
    }

    /// Check for an authoritative snapshot and apply it
    ///
    /// Never blocks. Returns `Ok(true)` once local values are authoritative,
    /// `Ok(false)` while still waiting. Snapshots with another tag (such as
    /// this controller's own saves) are consumed and ignored.
    pub fn poll(&mut self) -> Result<bool, SyncError> {
        if self.state == SyncState::Synced {
            return Ok(true);
        }

        if !self.transport.check(self.subscription) {
            return Ok(false);
        }

        let Some(params) = self.transport.copy(self.subscription) else {
            return Ok(false);
        };

        if params.kind != ParamsKind::Received {
            crate::log_trace!("Ignoring activity params snapshot that was not received");
            return Ok(false);
        }

        self.apply(&params)?;
        Ok(true)
    }

    /// Apply an authoritative snapshot
    ///
    /// Sets the activity, reruns limit resolution, seeds every editor's saved
    /// and live value and pushes values for this device into the parameter
    /// store. See the module docs for the failure policy.
    pub fn apply(&mut self, params: &ActivityParams) -> Result<(), SyncError> {
        if !self.catalog.has_activity(params.activity) {
            crate::log_error!("Activity params name unknown activity {}", params.activity);
            return Err(SyncError::UnknownActivity {
                activity: params.activity,
            });
        }
        if params.len() != self.editors.len() {
            crate::log_error!(
                "Activity params carry {} values for {} slots",
                params.len(),
                self.editors.len()
            );
            return Err(SyncError::ValueCountMismatch {
                expected: self.editors.len(),
                received: params.len(),
            });
        }

        for (slot, info) in self.catalog.params().iter().enumerate() {
            if !info.targets(self.config.device) {
                continue;
            }
            if let Err(error) = self.store.set_param(info.name, params.values[slot]) {
                crate::log_error!(
                    "Failed to store {} (slot {}): {}",
                    info.name,
                    slot,
                    error.as_str()
                );
                return Err(SyncError::StoreWrite { slot, error });
            }
        }

        LimitResolver::new(self.catalog).resolve(params.activity, &mut self.editors)?;
        self.activity = params.activity;

        for (editor, value) in self.editors.iter_mut().zip(params.values.iter()) {
            editor.seed(*value);
            if !editor.limit().contains(*value) {
                crate::log_warn!("Received {} outside the limits of {}", *value, editor.name());
            }
        }

        self.cursor.reset();
        self.last_known_good = Some(ActivityParams {
            kind: ParamsKind::Received,
            activity: params.activity,
            values: params.values.clone(),
        });
        self.state = SyncState::Synced;

        crate::log_info!(
            "Activity params applied: activity {}, {} slots",
            self.activity,
            self.editors.len()
        );
        Ok(())
    }

    /// Commit live values and publish them
    ///
    /// Snapshots every live value into its saved value, publishes the saved
    /// vector, then notifies the authority to refresh and moves to
    /// [`SyncState::RefreshPending`]. A publish failure is returned without
    /// rolling back the local commit; the state still leaves
    /// [`SyncState::Synced`] so the next authoritative snapshot is applied.
    /// When the saved vector itself could not be published the state drops to
    /// [`SyncState::Unsynced`].
    pub fn save(&mut self) -> Result<(), SyncError> {
        for editor in self.editors.iter_mut() {
            editor.save();
        }

        let values: SlotValues = self
            .editors
            .iter()
            .map(|editor| editor.saved_value())
            .collect();
        let snapshot = ActivityParams {
            kind: ParamsKind::Saved,
            activity: self.activity,
            values,
        };
        self.last_known_good = Some(snapshot.clone());

        if let Err(error) = self.transport.publish(&Message::Params(snapshot)) {
            crate::log_error!("Failed to publish saved activity params");
            self.state = SyncState::Unsynced;
            return Err(error.into());
        }

        self.notify_sender()
    }

    /// Prompt the remote authority to re-derive and resend its values
    fn notify_sender(&mut self) -> Result<(), SyncError> {
        self.state = SyncState::RefreshPending;
        if let Err(error) = self
            .transport
            .publish(&Message::Sender(SenderKind::Values))
        {
            crate::log_error!("Failed to notify activity params sender");
            return Err(error.into());
        }
        Ok(())
    }

    /// Restore every editor from the last known good snapshot
    ///
    /// # Errors
    ///
    /// [`SyncError::NoSnapshot`] before the first apply or save; nothing is
    /// changed in that case.
    pub fn cancel(&mut self) -> Result<(), SyncError> {
        let snapshot = self
            .last_known_good
            .as_ref()
            .ok_or(SyncError::NoSnapshot)?;

        if snapshot.activity != self.activity {
            LimitResolver::new(self.catalog).resolve(snapshot.activity, &mut self.editors)?;
            self.activity = snapshot.activity;
        }

        for (editor, value) in self.editors.iter_mut().zip(snapshot.values.iter()) {
            editor.seed(*value);
        }
        Ok(())
    }

    /// Switch the active activity and rebind every slot's limits
    ///
    /// Values are kept; stepping brings them into the new domains.
    pub fn set_activity(&mut self, activity: u8) -> Result<(), SyncError> {
        LimitResolver::new(self.catalog).resolve(activity, &mut self.editors)?;
        crate::log_info!("Activity changed: {} -> {}", self.activity, activity);
        self.activity = activity;
        Ok(())
    }

    /// Focused editor, moving off an invisible slot if needed
    pub fn current_param(&mut self) -> &mut ParamEditor {
        let index = self.cursor.current_visible(&self.editors);
        &mut self.editors[index]
    }

    /// Move focus to the next visible editor
    pub fn next_param(&mut self) -> &mut ParamEditor {
        let index = self.cursor.next_visible(&self.editors);
        &mut self.editors[index]
    }

    /// Move focus to the previous visible editor
    pub fn prev_param(&mut self) -> &mut ParamEditor {
        let index = self.cursor.prev_visible(&self.editors);
        &mut self.editors[index]
    }

    /// Step the focused editor forward and render it
    pub fn next_value(&mut self) -> RenderResult {
        self.step_current(Direction::Forward)
    }

    /// Step the focused editor backward and render it
    pub fn prev_value(&mut self) -> RenderResult {
        self.step_current(Direction::Backward)
    }

    fn step_current(&mut self, direction: Direction) -> RenderResult {
        let editor = self.current_param();
        editor.step(direction);
        render(editor)
    }

    /// Render the live value of `slot`
    pub fn display_value(&self, slot: SlotId) -> Option<RenderResult> {
        self.editors.get(slot).map(render)
    }

    /// Label of the active activity
    pub fn activity_display_name(&self) -> &'static str {
        self.catalog
            .activity(self.activity)
            .map(|limits| limits.name)
            .unwrap_or("")
    }

    /// Active activity
    pub fn activity(&self) -> u8 {
        self.activity
    }

    /// Synchronization state
    pub fn state(&self) -> SyncState {
        self.state
    }

    /// Check whether local values are confirmed by the remote authority
    pub fn is_authoritative(&self) -> bool {
        self.state.is_authoritative()
    }

    /// All editors in slot order
    pub fn editors(&self) -> &[ParamEditor] {
        &self.editors
    }

    /// Editor of `slot`
    pub fn editor(&self, slot: SlotId) -> Option<&ParamEditor> {
        self.editors.get(slot)
    }

    /// Mutable editor of `slot`
    pub fn editor_mut(&mut self, slot: SlotId) -> Option<&mut ParamEditor> {
        self.editors.get_mut(slot)
    }

    /// Focused slot index
    pub fn cursor(&self) -> SlotId {
        self.cursor.index()
    }

    /// Last applied or saved snapshot
    pub fn last_known_good(&self) -> Option<&ActivityParams> {
        self.last_known_good.as_ref()
    }

    /// Active configuration
    pub fn config(&self) -> &SyncConfig {
        &self.config
    }

    /// Transport
    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Mutable transport
    pub fn transport_mut(&mut self) -> &mut T {
        &mut self.transport
    }

    /// Parameter store
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Mutable parameter store
    pub fn store_mut(&mut self) -> &mut S {
        &mut self.store
    }
}

impl<T: ActivityTransport, S: ParamSink> Drop for SyncController<T, S> {
    fn drop(&mut self) {
        self.transport.unsubscribe(self.subscription);
    }
}

fn render(editor: &ParamEditor) -> RenderResult {
    let (text, result) = editor.display_text();
    match result {
        Ok(Rendered::OutOfRange { index: _index, .. }) => {
            crate::log_warn!("Value {} out of range for {}", _index, editor.name());
        }
        Err(DisplayError::NoSuchType) => {
            crate::log_warn!("No such limit type for {}", editor.name());
        }
        Err(DisplayError::Truncated) => {
            crate::log_warn!("Display text truncated for {}", editor.name());
        }
        Ok(Rendered::Value) => {}
    }
    (text, result)
}
