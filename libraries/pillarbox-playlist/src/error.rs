//! Error types for playlist management

use thiserror::Error;

/// Playlist errors
///
/// Navigation errors are advisory: the engine logs them, leaves its state
/// untouched and hands them back to the caller.
#[derive(Debug, Error)]
pub enum PlaylistError {
    /// Requested index does not address an item
    #[error("Index {index} out of range for playlist of {len} items")]
    IndexOutOfRange { index: usize, len: usize },

    /// Requested index is already the current item
    #[error("Item {0} is already selected")]
    AlreadySelected(usize),

    /// Configuration rejected
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// JSON (de)serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type for playlist operations
pub type Result<T> = std::result::Result<T, PlaylistError>;
