//! Error types for table I/O

use thiserror::Error;

/// Errors that can occur while reading or writing tables
#[derive(Error, Debug)]
pub enum IoError {
    #[error("File not found: {path}")]
    FileNotFound { path: String },

    #[error("Parse error on line {line}: {message}")]
    Parse { line: usize, message: String },

    #[error("Empty input: {0}")]
    Empty(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Table(#[from] chartxyz_core::Error),
}

impl From<IoError> for chartxyz_core::Error {
    fn from(e: IoError) -> Self {
        match e {
            IoError::Io(io) => chartxyz_core::Error::Io(io),
            IoError::Table(inner) => inner,
            other => chartxyz_core::Error::InvalidData(other.to_string()),
        }
    }
}

/// Result type alias for table I/O
pub type Result<T> = std::result::Result<T, IoError>;
