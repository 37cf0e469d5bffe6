//! Error types for the LVQ classifier.

use thiserror::Error;

/// LVQ error types.
#[derive(Error, Debug)]
pub enum LvqError {
    /// Malformed training or evaluation input
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Query dimensionality differs from the trained prototypes
    #[error("Dimension mismatch: expected {expected}, got {got}")]
    DimensionMismatch { expected: usize, got: usize },

    /// Hyperparameter out of range
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// JSON configuration parsing error
    #[error("Config parse error: {0}")]
    ConfigParse(#[from] serde_json::Error),
}

/// Result type alias for LVQ operations.
pub type Result<T> = std::result::Result<T, LvqError>;
