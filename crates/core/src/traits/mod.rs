//! Collaborator traits for the activity engine.
//!
//! This module provides trait abstractions that decouple the engine from the
//! message transport and the local parameter store.
//!
//! # Design
//!
//! - Trait definitions are pure and have no feature gates
//! - Mock implementations are always available for host testing
//! - Platform implementations live with the platform code

pub mod sink;
pub mod transport;

pub use sink::ParamSink;
pub use transport::{ActivityTransport, MockTransport, SubscriptionId, TransportError};
