//! Shared test utilities for the raster3d-tools workspace.
//!
//! This crate provides common testing infrastructure:
//! - Reference ASCII fixtures for the 3x3x4 test volume
//! - Deterministic grid generators
//! - Cell comparison macros
//!
//! # Usage
//!
//! Add to your crate's `Cargo.toml`:
//!
//! ```toml
//! [dev-dependencies]
//! test-utils = { path = "../test-utils" }
//! ```

pub mod fixtures;
pub mod generators;

// Re-export commonly used items at the crate root
pub use fixtures::*;
pub use generators::*;

/// Macro asserting two cell slices match element by element.
///
/// No-data compares equal only to no-data, and values are compared
/// bit-for-bit. Reports the first mismatching index on failure.
///
/// # Usage
///
/// ```ignore
/// use test_utils::assert_cells_eq;
///
/// assert_cells_eq!(layer.cells(), expected.cells());
/// ```
#[macro_export]
macro_rules! assert_cells_eq {
    ($left:expr, $right:expr) => {{
        let left: &[raster_common::Cell] = $left;
        let right: &[raster_common::Cell] = $right;
        assert_eq!(
            left.len(),
            right.len(),
            "cell slices differ in length: {} vs {}",
            left.len(),
            right.len()
        );
        for (i, (l, r)) in left.iter().zip(right.iter()).enumerate() {
            assert_eq!(l, r, "cells differ at index {}: {:?} vs {:?}", i, l, r);
        }
    }};
}
