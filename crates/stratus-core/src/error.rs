//! Error types for Stratus

use thiserror::Error;

/// Core error type for Stratus operations
#[derive(Error, Debug)]
pub enum GridError {
    /// Network/HTTP failure reported by the transport collaborator.
    #[error("Transport error: {0}")]
    Transport(String),

    /// A response envelope did not have the expected shape.
    #[error("Envelope error: {0}")]
    Envelope(String),

    /// Misconfigured grid (bad data path, unknown resource key where a
    /// known one is required, ...).
    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("{0}")]
    Other(String),
}

/// Result type alias for Stratus operations
pub type Result<T> = std::result::Result<T, GridError>;
