//! Synchronization message types
//!
//! Messages exchanged with the remote parameter authority. The wire format is
//! owned by the transport; this module only fixes the content shape: a
//! message-type tag, the activity id and one float value per slot.

use crate::limits::MAX_SLOTS;

/// Per-slot values carried by a parameters message
pub type SlotValues = heapless::Vec<f32, MAX_SLOTS>;

/// Topics the engine publishes on or subscribes to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Topic {
    /// Parameter snapshots (authority responses and local saves)
    ActivityParams,
    /// Requests to the authority
    ActivityRequest,
    /// Notifications for the authority's sender
    ParamsSender,
}

impl Topic {
    /// Return variant name as a static string (usable with defmt on embedded)
    pub fn as_str(&self) -> &'static str {
        match self {
            Topic::ActivityParams => "activity_params",
            Topic::ActivityRequest => "activity_request",
            Topic::ParamsSender => "params_sender",
        }
    }
}

/// Tag of a parameters snapshot
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParamsKind {
    /// Authoritative values received from the remote side
    Received,
    /// Values saved locally
    Saved,
}

/// Request sent to the authority
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequestKind {
    /// Send the current parameter values
    Params,
}

/// Notification sent to the authority's sender
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SenderKind {
    /// Local values changed, re-derive and resend
    Values,
}

/// Parameter snapshot: activity id followed by one value per slot
#[derive(Debug, Clone, PartialEq)]
pub struct ActivityParams {
    /// Message-type tag
    pub kind: ParamsKind,
    /// Active activity
    pub activity: u8,
    /// Value per slot, in slot order
    pub values: SlotValues,
}

impl ActivityParams {
    /// Build a snapshot from a slice of slot values
    ///
    /// Returns `None` when `values` exceeds the slot capacity.
    pub fn new(kind: ParamsKind, activity: u8, values: &[f32]) -> Option<Self> {
        Some(Self {
            kind,
            activity,
            values: SlotValues::from_slice(values).ok()?,
        })
    }

    /// Authoritative snapshot as sent by the remote side
    pub fn received(activity: u8, values: &[f32]) -> Option<Self> {
        Self::new(ParamsKind::Received, activity, values)
    }

    /// Number of slot values
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Check whether the snapshot carries no values
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// Outbound message
#[derive(Debug, Clone, PartialEq)]
pub enum Message {
    /// Parameter snapshot
    Params(ActivityParams),
    /// Request to the authority
    Request(RequestKind),
    /// Notification to the authority's sender
    Sender(SenderKind),
}

impl Message {
    /// Topic the message is published on
    pub fn topic(&self) -> Topic {
        match self {
            Message::Params(_) => Topic::ActivityParams,
            Message::Request(_) => Topic::ActivityRequest,
            Message::Sender(_) => Topic::ParamsSender,
        }
    }
}
