//! Error types for chartxyz

use thiserror::Error;

/// Main error type for chartxyz operations
#[derive(Error, Debug)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid data: {0}")]
    InvalidData(String),

    #[error("Missing column: {0}")]
    MissingColumn(String),

    #[error("Column length mismatch: expected {expected} rows, found {found}")]
    LengthMismatch { expected: usize, found: usize },
}

/// Result type alias for chartxyz operations
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_io_errors_convert() {
        let err: Error = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "locked").into();
        assert!(matches!(err, Error::Io(_)));
        assert_eq!(err.to_string(), "I/O error: locked");
    }

    #[test]
    fn test_messages() {
        assert_eq!(
            Error::LengthMismatch { expected: 3, found: 2 }.to_string(),
            "Column length mismatch: expected 3 rows, found 2"
        );
        assert_eq!(Error::MissingColumn("mag".into()).to_string(), "Missing column: mag");
    }
}
