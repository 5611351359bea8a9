//! Message transport abstraction
//!
//! The engine talks to the remote parameter authority through a
//! publish/subscribe channel it does not own. `ActivityTransport` captures the
//! four operations it needs: publish, non-blocking check, synchronous copy,
//! and the subscription lifecycle.

use crate::messages::{ActivityParams, Message, Topic};
use core::fmt;

/// Handle of a subscription to the parameters topic
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubscriptionId(pub u8);

/// Transport failure
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransportError {
    /// The channel could not be advertised or written
    PublishFailed(Topic),
    /// No subscription slot is left on the topic
    SubscribeFailed(Topic),
}

impl TransportError {
    /// Return variant name as a static string (usable with defmt on embedded)
    pub fn as_str(&self) -> &'static str {
        match self {
            TransportError::PublishFailed(_) => "PublishFailed",
            TransportError::SubscribeFailed(_) => "SubscribeFailed",
        }
    }
}

impl fmt::Display for TransportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TransportError::PublishFailed(topic) => {
                write!(f, "failed to publish on {}", topic.as_str())
            }
            TransportError::SubscribeFailed(topic) => {
                write!(f, "failed to subscribe to {}", topic.as_str())
            }
        }
    }
}

/// Publish/subscribe channel to the remote parameter authority
///
/// Implementations must not block: `check` only reports whether a new
/// parameters message is buffered and `copy` reads the latest buffered one.
pub trait ActivityTransport {
    /// Subscribe to the parameters topic
    fn subscribe(&mut self) -> Result<SubscriptionId, TransportError>;

    /// Release a subscription
    fn unsubscribe(&mut self, subscription: SubscriptionId);

    /// Publish a message on its topic
    fn publish(&mut self, message: &Message) -> Result<(), TransportError>;

    /// Check whether a parameters message arrived since the last copy
    fn check(&mut self, subscription: SubscriptionId) -> bool;

    /// Copy the latest buffered parameters message and clear the update flag
    fn copy(&mut self, subscription: SubscriptionId) -> Option<ActivityParams>;
}

impl<T: ActivityTransport + ?Sized> ActivityTransport for &mut T {
    fn subscribe(&mut self) -> Result<SubscriptionId, TransportError> {
        (**self).subscribe()
    }

    fn unsubscribe(&mut self, subscription: SubscriptionId) {
        (**self).unsubscribe(subscription)
    }

    fn publish(&mut self, message: &Message) -> Result<(), TransportError> {
        (**self).publish(message)
    }

    fn check(&mut self, subscription: SubscriptionId) -> bool {
        (**self).check(subscription)
    }

    fn copy(&mut self, subscription: SubscriptionId) -> Option<ActivityParams> {
        (**self).copy(subscription)
    }
}

// ============================================================================
// Mock Implementation (always available for testing)
// ============================================================================

/// Capacity of the mock's publish log
pub const MOCK_LOG_LEN: usize = 16;

/// Maximum concurrent mock subscriptions
pub const MOCK_SUBSCRIPTIONS: usize = 4;

/// In-memory transport for host testing
///
/// Parameter snapshots published by the engine are buffered like any other
/// message on the topic, so subscribers see their own saves.
///
/// # Example
///
/// ```
/// use leash_activity_core::messages::{ActivityParams, Message, RequestKind};
/// use leash_activity_core::traits::{ActivityTransport, MockTransport};
///
/// let mut bus = MockTransport::new();
/// let sub = bus.subscribe().unwrap();
/// assert!(!bus.check(sub));
///
/// bus.deliver(ActivityParams::received(0, &[1.0]).unwrap());
/// assert!(bus.check(sub));
/// assert_eq!(bus.copy(sub).map(|p| p.activity), Some(0));
/// assert!(!bus.check(sub));
///
/// bus.publish(&Message::Request(RequestKind::Params)).unwrap();
/// assert_eq!(bus.published().len(), 1);
/// ```
#[derive(Debug, Default)]
pub struct MockTransport {
    buffered: Option<ActivityParams>,
    subscriptions: heapless::Vec<(SubscriptionId, bool), MOCK_SUBSCRIPTIONS>,
    next_id: u8,
    published: heapless::Vec<Message, MOCK_LOG_LEN>,
    failing: Option<Topic>,
}

impl MockTransport {
    /// Create an empty transport
    pub fn new() -> Self {
        Self::default()
    }

    /// Simulate the remote side publishing a parameters message
    pub fn deliver(&mut self, params: ActivityParams) {
        self.buffered = Some(params);
        for (_, updated) in self.subscriptions.iter_mut() {
            *updated = true;
        }
    }

    /// Messages published so far, oldest first
    pub fn published(&self) -> &[Message] {
        &self.published
    }

    /// Forget published messages
    pub fn clear_published(&mut self) {
        self.published.clear();
    }

    /// Make every publish on `topic` fail, or clear with `None`
    pub fn fail_publish(&mut self, topic: Option<Topic>) {
        self.failing = topic;
    }

    /// Latest buffered parameters message
    pub fn buffered(&self) -> Option<&ActivityParams> {
        self.buffered.as_ref()
    }

    /// Number of live subscriptions
    pub fn subscription_count(&self) -> usize {
        self.subscriptions.len()
    }
}

impl ActivityTransport for MockTransport {
    fn subscribe(&mut self) -> Result<SubscriptionId, TransportError> {
        let id = SubscriptionId(self.next_id);
        self.subscriptions
            .push((id, false))
            .map_err(|_| TransportError::SubscribeFailed(Topic::ActivityParams))?;
        self.next_id = self.next_id.wrapping_add(1);
        Ok(id)
    }

    fn unsubscribe(&mut self, subscription: SubscriptionId) {
        self.subscriptions.retain(|(id, _)| *id != subscription);
    }

    fn publish(&mut self, message: &Message) -> Result<(), TransportError> {
        let topic = message.topic();
        if self.failing == Some(topic) {
            return Err(TransportError::PublishFailed(topic));
        }
        if let Message::Params(params) = message {
            self.deliver(params.clone());
        }
        // A full log drops the newest entry
        let _ = self.published.push(message.clone());
        Ok(())
    }

    fn check(&mut self, subscription: SubscriptionId) -> bool {
        self.subscriptions
            .iter()
            .any(|(id, updated)| *id == subscription && *updated)
    }

    fn copy(&mut self, subscription: SubscriptionId) -> Option<ActivityParams> {
        for (id, updated) in self.subscriptions.iter_mut() {
            if *id == subscription {
                *updated = false;
            }
        }
        self.buffered.clone()
    }
}
