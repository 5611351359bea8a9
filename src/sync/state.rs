//! Synchronization state

/// Freshness of the local parameter values
///
/// ```text
/// Unsynced --apply--> Synced --save--> RefreshPending --apply--> Synced
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SyncState {
    /// No authoritative values applied yet; editors run on catalog defaults
    #[default]
    Unsynced,
    /// Values confirmed by the remote authority
    Synced,
    /// Local save published, awaiting the authority's re-confirmation
    ///
    /// Local values stay usable.
    RefreshPending,
}

impl SyncState {
    /// Check whether local values are confirmed by the remote authority
    pub fn is_authoritative(&self) -> bool {
        matches!(self, SyncState::Synced)
    }

    /// Return variant name as a static string (usable with defmt on embedded)
    pub fn as_str(&self) -> &'static str {
        match self {
            SyncState::Unsynced => "Unsynced",
            SyncState::Synced => "Synced",
            SyncState::RefreshPending => "RefreshPending",
        }
    }
}
