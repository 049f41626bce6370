//! Error types for the FundMe core.

/// Storage-related errors.
///
/// These only surface at the storage port itself. The profile store
/// swallows them on its write path (logging and keeping the in-memory
/// value), so embedders never see a failed save as an error.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Storage unavailable: {0}")]
    Unavailable(String),

    #[error("Invalid storage key: {0}")]
    InvalidKey(String),
}

/// Result type alias for the core.
pub type Result<T> = std::result::Result<T, StorageError>;
