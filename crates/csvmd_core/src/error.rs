//! Conversion error types.

use thiserror::Error;

/// Errors that can occur during conversion.
#[derive(Debug, Error)]
pub enum ConvertError {
    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(String),

    /// CSV read error.
    #[error("Read error: {0}")]
    Read(#[from] csvmd_parser::ReadError),
}

impl ConvertError {
    /// Creates a configuration error.
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }
}
