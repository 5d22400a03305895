use milkar_shared::MilkarError;
use thiserror::Error;

/// Errors produced by a document store backend.
#[derive(Error, Debug)]
pub enum SyncError {
    /// The backend could not be reached or refused the operation.
    #[error("Store unavailable: {0}")]
    Unavailable(String),

    /// The referenced document does not exist.
    #[error("Document not found")]
    NotFound,
}

impl From<SyncError> for MilkarError {
    fn from(err: SyncError) -> Self {
        match err {
            SyncError::Unavailable(msg) => MilkarError::StoreUnavailable(msg),
            SyncError::NotFound => MilkarError::EventNotFound,
        }
    }
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, SyncError>;
