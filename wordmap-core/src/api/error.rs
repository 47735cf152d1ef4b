//! Error types for the API

use crate::matcher::MatchError;
use thiserror::Error;

/// Error type for API operations
#[derive(Debug, Error)]
pub enum Error {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Invalid pattern handed to the matcher
    #[error("Match error: {0}")]
    Match(#[from] MatchError),

    /// Reading input failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Worker pool could not be created
    #[error("Parallel processing error: {0}")]
    Parallel(String),
}

/// Result type for API operations
pub type Result<T> = std::result::Result<T, Error>;
