//! Error handling for the farrowcam core

/// Result type alias
pub type Result<T> = std::result::Result<T, Error>;

/// Error types
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Query target does not exist
    #[error("Not found: {0}")]
    NotFound(String),

    /// Command or load referenced a camera that is not registered
    #[error("Invalid reference: {0}")]
    InvalidReference(String),

    /// Validation error
    #[error("Validation error: {0}")]
    Validation(String),
}
