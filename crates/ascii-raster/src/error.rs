//! Error types for ASCII raster parsing.

use thiserror::Error;

use raster_common::RasterError;

/// Result type alias using AsciiError.
pub type AsciiResult<T> = Result<T, AsciiError>;

/// Errors raised while parsing ASCII raster text.
#[derive(Debug, Error)]
pub enum AsciiError {
    /// The `version:` header names a format this parser does not read.
    #[error("unsupported format version: {0}")]
    UnsupportedVersion(String),

    /// The `order:` header names a traversal order other than nsbt.
    #[error("unsupported traversal order: {0}")]
    UnsupportedOrder(String),

    /// A mandatory header field is absent.
    #[error("missing header field: {0}")]
    MissingField(&'static str),

    /// A header or cell token is not a valid number.
    #[error("invalid number {token:?} on line {line}")]
    InvalidNumber { token: String, line: usize },

    /// A data line holds the wrong number of cells, or the data section
    /// holds the wrong number of lines.
    #[error("expected {expected} {what}, got {got}")]
    CountMismatch {
        what: &'static str,
        expected: usize,
        got: usize,
    },

    /// The parsed grid violates a structural invariant.
    #[error(transparent)]
    Raster(#[from] RasterError),
}
