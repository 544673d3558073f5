//! Read error types.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while reading a CSV file.
#[derive(Debug, Error)]
pub enum ReadError {
    /// The input file does not exist.
    #[error("File not found: {}", .0.display())]
    FileNotFound(PathBuf),

    /// The requested encoding label names no known encoding.
    #[error("Unknown encoding label: {0}")]
    UnknownEncoding(String),

    /// The file contents are not valid under the requested encoding.
    #[error("Cannot decode {} as {encoding}", .path.display())]
    Encoding {
        /// File that failed to decode.
        path: PathBuf,
        /// Canonical name of the encoding that was requested.
        encoding: &'static str,
    },

    /// The CSV structure is malformed.
    #[error("Malformed CSV: {message}")]
    Malformed {
        /// Error message.
        message: String,
        /// 1-based line where the error was detected.
        line: Option<usize>,
    },

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl ReadError {
    /// Creates a new malformed-structure error.
    pub fn malformed(message: impl Into<String>) -> Self {
        Self::Malformed {
            message: message.into(),
            line: None,
        }
    }

    /// Creates a new malformed-structure error with a line number.
    pub fn malformed_at(message: impl Into<String>, line: usize) -> Self {
        Self::Malformed {
            message: message.into(),
            line: Some(line),
        }
    }
}
