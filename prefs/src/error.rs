//! Store errors.

/// Errors surfaced by [`crate::store::PreferenceStore::write`] and by
/// category submission.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StoreError {
    /// The host refused a storage or cookie write (quota, disabled storage).
    #[error("storage write failed: {0}")]
    Storage(String),

    /// The HTTP request could not be sent or completed.
    #[error("request failed: {0}")]
    Request(String),

    /// The endpoint answered with a non-success status.
    #[error("endpoint returned status {status}")]
    Status { status: u16 },
}
