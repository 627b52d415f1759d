//! Textual grid interchange for volumetric and single-layer rasters.
//!
//! Reads and writes the 3D-ASCII convention (`version: grass7`,
//! `order: nsbt`, extent and shape headers, then `levels * rows` data
//! lines) and the matching 2D-ASCII convention. The no-data marker is
//! `*` in both directions.

pub mod error;
pub mod reader;
pub mod writer;

pub use error::{AsciiError, AsciiResult};
pub use reader::{parse_grid2, parse_grid3};
pub use writer::{write_grid2, write_grid3};

/// The no-data marker used by the ASCII conventions.
pub const NULL_MARKER: &str = "*";
