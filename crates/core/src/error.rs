//! Error types for passage-core.

use uuid::Uuid;

/// Result type used throughout passage-core.
pub type Result<T> = std::result::Result<T, PassageError>;

/// Errors produced at the edges of the library.
///
/// The reflow algorithm itself is total and never fails; errors only arise
/// when decoding recognition dumps or touching the quote library.
#[derive(Debug, thiserror::Error)]
pub enum PassageError {
    /// Malformed input that could not be decoded.
    #[error("decode error: {0}")]
    DecodeError(String),

    /// An argument violated a documented precondition.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// The quote library has no book with the given id.
    #[error("no book with id {0}")]
    BookNotFound(Uuid),

    /// Underlying I/O failure while reading or writing a file.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON (de)serialization failure.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
