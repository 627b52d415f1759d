//! Dense in-memory raster grids and the level slicing engine.
//!
//! A [`Grid3D`] holds a volumetric raster: `rows * cols * levels` cells in
//! nsbt order (north to south, bottom to top). [`LevelSlicer`] cuts it into
//! one independent [`Grid2D`] per vertical level, preserving cell values
//! and no-data positions exactly.

pub mod grid2;
pub mod grid3;
pub mod slicer;

pub use grid2::Grid2D;
pub use grid3::Grid3D;
pub use slicer::LevelSlicer;
