//! Error handling for the hashing crate

use thiserror::Error;

/// Hashing-specific errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HashError {
    /// No digest algorithm is known by this name
    #[error("Unsupported hash algorithm: {0}")]
    UnsupportedAlgorithm(String),
}

/// Result type for hashing operations
pub type Result<T> = std::result::Result<T, HashError>;
