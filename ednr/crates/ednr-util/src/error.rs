//! Error types for the util crate.

use thiserror::Error;

/// Error type for source map operations
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SourceMapError {
    /// No file registered under the given id
    #[error("Unknown file id: {0}")]
    UnknownFileId(usize),
}

/// Result type alias for source map operations
pub type SourceMapResult<T> = std::result::Result<T, SourceMapError>;
