//! Error types for VibSDK secret generation.

use thiserror::Error;

/// The main error type for secret generation operations.
#[derive(Error, Debug)]
pub enum VibsdkError {
    /// Secret generation error
    #[error("Secret error: {0}")]
    Secret(String),

    /// Validation error
    #[error("Validation error: {0}")]
    Validation(String),
}

/// A specialized Result type for VibSDK secret generation operations.
pub type Result<T> = std::result::Result<T, VibsdkError>;
