//! Error types for Govaim

use thiserror::Error;

/// Main error type for Govaim core operations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CoreError {
    /// Path string does not name any page of the app
    #[error("Unknown path: {0}")]
    UnknownPath(String),
}

/// Result type alias using CoreError
pub type Result<T> = std::result::Result<T, CoreError>;
