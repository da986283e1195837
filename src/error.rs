//! Error types.

use thiserror::Error;

/// Errors that can occur during a packing run.
#[derive(Debug, Error)]
pub enum Error {
    /// An item has invalid (zero) dimensions.
    #[error("Invalid item: {0}")]
    InvalidGeometry(String),

    /// The container has invalid (zero) dimensions.
    #[error("Invalid container: {0}")]
    InvalidBoundary(String),
}

/// Result type alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;
