//! Common types shared across the raster3d-tools workspace.

pub mod cell;
pub mod error;
pub mod region;

pub use cell::{Cell, ValueType};
pub use error::{RasterError, RasterResult};
pub use region::{Region2, Region3};
