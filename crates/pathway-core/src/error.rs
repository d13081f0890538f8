//! Error types for Pathway

use thiserror::Error;

/// Main error type for Pathway
#[derive(Error, Debug)]
pub enum PathwayError {
    /// Malformed catalog, cyclic prerequisite edge, or invalid
    /// hyperparameters. Fatal: reported before any training occurs.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Invalid student record or candidate action. Recoverable: the
    /// training loop skips the offending episode and continues.
    #[error("Data error: {0}")]
    Data(String),

    /// More candidate courses requested than are available. Callers clamp
    /// the sample size instead of surfacing this.
    #[error("Sampling error: {0}")]
    Sampling(String),

    /// Failure to write the trained table to its sink. Fatal at run end;
    /// the in-memory table is not corrupted.
    #[error("Persistence error: {0}")]
    Persistence(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for Pathway operations
pub type Result<T> = std::result::Result<T, PathwayError>;
