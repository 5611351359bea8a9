//! Sync controller errors

use core::fmt;
use leash_activity_core::limits::{CatalogError, SlotId};
use leash_activity_core::parameters::ParameterError;
use leash_activity_core::traits::TransportError;

/// Errors from sync controller operations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SyncError {
    /// Catalog rejected at construction
    Catalog(CatalogError),
    /// Transport rejected a subscription or an outbound message
    Transport(TransportError),
    /// Parameter store rejected a value during apply
    StoreWrite {
        /// Slot whose write failed
        slot: SlotId,
        /// Store error
        error: ParameterError,
    },
    /// Activity id not in the catalog
    UnknownActivity {
        /// Requested activity
        activity: u8,
    },
    /// Received snapshot does not carry one value per slot
    ValueCountMismatch {
        /// Slots in the catalog
        expected: usize,
        /// Values received
        received: usize,
    },
    /// Cancel requested before any authoritative or saved snapshot exists
    NoSnapshot,
}

impl SyncError {
    /// Return variant name as a static string (usable with defmt on embedded)
    pub fn as_str(&self) -> &'static str {
        match self {
            SyncError::Catalog(_) => "Catalog",
            SyncError::Transport(_) => "Transport",
            SyncError::StoreWrite { .. } => "StoreWrite",
            SyncError::UnknownActivity { .. } => "UnknownActivity",
            SyncError::ValueCountMismatch { .. } => "ValueCountMismatch",
            SyncError::NoSnapshot => "NoSnapshot",
        }
    }
}

impl fmt::Display for SyncError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SyncError::Catalog(error) => write!(f, "invalid catalog: {}", error),
            SyncError::Transport(error) => write!(f, "{}", error),
            SyncError::StoreWrite { slot, error } => {
                write!(f, "store write for slot {} failed: {}", slot, error)
            }
            SyncError::UnknownActivity { activity } => {
                write!(f, "unknown activity {}", activity)
            }
            SyncError::ValueCountMismatch { expected, received } => write!(
                f,
                "expected {} slot values, received {}",
                expected, received
            ),
            SyncError::NoSnapshot => write!(f, "no snapshot to restore"),
        }
    }
}

impl From<CatalogError> for SyncError {
    fn from(error: CatalogError) -> Self {
        match error {
            CatalogError::UnknownActivity { activity } => SyncError::UnknownActivity { activity },
            other => SyncError::Catalog(other),
        }
    }
}

impl From<TransportError> for SyncError {
    fn from(error: TransportError) -> Self {
        SyncError::Transport(error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use leash_activity_core::messages::Topic;

    #[test]
    fn test_from_catalog_error() {
        assert_eq!(
            SyncError::from(CatalogError::UnknownActivity { activity: 4 }),
            SyncError::UnknownActivity { activity: 4 }
        );
        assert_eq!(
            SyncError::from(CatalogError::Empty),
            SyncError::Catalog(CatalogError::Empty)
        );
    }

    #[test]
    fn test_display() {
        let error = SyncError::StoreWrite {
            slot: 2,
            error: ParameterError::ReadOnly,
        };
        assert_eq!(
            error.to_string(),
            "store write for slot 2 failed: parameter is read-only"
        );
        let error = SyncError::from(TransportError::PublishFailed(Topic::ParamsSender));
        assert_eq!(error.to_string(), "failed to publish on params_sender");
        assert_eq!(error.as_str(), "Transport");
    }
}
