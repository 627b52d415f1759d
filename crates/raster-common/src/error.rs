//! Error types for raster operations.

use thiserror::Error;

/// Result type alias using RasterError.
pub type RasterResult<T> = Result<T, RasterError>;

/// Errors raised by the core raster types.
#[derive(Debug, Error)]
pub enum RasterError {
    /// An index is outside the declared shape of a grid.
    #[error(
        "index ({row}, {col}, {level}) is outside grid shape {rows}x{cols}x{levels}"
    )]
    OutOfRange {
        row: usize,
        col: usize,
        level: usize,
        rows: usize,
        cols: usize,
        levels: usize,
    },

    /// A grid violates its structural invariants: wrong stored cell
    /// count or inverted extent bounds.
    #[error("malformed grid: {0}")]
    MalformedGrid(String),
}

impl RasterError {
    /// Create a MalformedGrid error.
    pub fn malformed(msg: impl Into<String>) -> Self {
        Self::MalformedGrid(msg.into())
    }
}
