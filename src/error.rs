//! Error types for password generation

use thiserror::Error;

/// Main error type for generator operations
#[derive(Error, Debug)]
pub enum GeneratorError {
    /// The request or settings cannot produce a password
    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),

    /// The secure random source could not supply output
    #[error("Entropy source failure: {0}")]
    EntropySourceFailure(String),

    /// Settings file could not be read or written
    #[error("IO error: {0}")]
    ConfigIo(#[from] std::io::Error),

    /// Settings file is not valid JSON for the settings layout
    #[error("Config format error: {0}")]
    ConfigFormat(String),
}

impl GeneratorError {
    /// True for [`GeneratorError::InvalidConfiguration`]
    pub fn is_invalid_configuration(&self) -> bool {
        matches!(self, GeneratorError::InvalidConfiguration(_))
    }

    /// True for [`GeneratorError::EntropySourceFailure`]
    pub fn is_entropy_failure(&self) -> bool {
        matches!(self, GeneratorError::EntropySourceFailure(_))
    }
}

impl From<serde_json::Error> for GeneratorError {
    fn from(err: serde_json::Error) -> Self {
        GeneratorError::ConfigFormat(err.to_string())
    }
}

/// Result type alias for generator operations
pub type Result<T> = std::result::Result<T, GeneratorError>;
