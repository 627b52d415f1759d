//! Volumetric raster grid.

use raster_common::{Cell, RasterError, RasterResult, Region3, ValueType};

/// A dense volumetric raster, immutable after construction.
///
/// Cells are stored in nsbt order: index `(level * rows + row) * cols + col`,
/// with row 0 the northernmost row, col 0 the westernmost column, and
/// level 0 the bottommost layer. This matches the traversal order of the
/// 3D-ASCII interchange convention.
#[derive(Debug, Clone, PartialEq)]
pub struct Grid3D {
    rows: usize,
    cols: usize,
    levels: usize,
    region: Region3,
    value_type: ValueType,
    cells: Vec<Cell>,
}

impl Grid3D {
    /// Create a grid from its shape, extent, and nsbt-ordered cells.
    ///
    /// Fails with `MalformedGrid` when the cell count does not match
    /// `rows * cols * levels` or the extent bounds are inverted. A shape
    /// with `rows * cols == 0` is accepted and holds no cells.
    pub fn new(
        rows: usize,
        cols: usize,
        levels: usize,
        region: Region3,
        value_type: ValueType,
        cells: Vec<Cell>,
    ) -> RasterResult<Self> {
        region.validate()?;
        let expected = rows * cols * levels;
        if cells.len() != expected {
            return Err(RasterError::malformed(format!(
                "expected {} cells for shape {}x{}x{}, got {}",
                expected,
                rows,
                cols,
                levels,
                cells.len()
            )));
        }
        Ok(Self {
            rows,
            cols,
            levels,
            region,
            value_type,
            cells,
        })
    }

    /// Shape as `(rows, cols, levels)`.
    pub fn shape(&self) -> (usize, usize, usize) {
        (self.rows, self.cols, self.levels)
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn levels(&self) -> usize {
        self.levels
    }

    /// The full 3D extent.
    pub fn region(&self) -> Region3 {
        self.region
    }

    /// Declared cell type, used when the grid is serialized.
    pub fn value_type(&self) -> ValueType {
        self.value_type
    }

    /// The cell at `(row, col, level)`.
    ///
    /// Fails with `OutOfRange` when any index is outside its bound.
    pub fn at(&self, row: usize, col: usize, level: usize) -> RasterResult<Cell> {
        if row >= self.rows || col >= self.cols || level >= self.levels {
            return Err(RasterError::OutOfRange {
                row,
                col,
                level,
                rows: self.rows,
                cols: self.cols,
                levels: self.levels,
            });
        }
        Ok(self.cells[(level * self.rows + row) * self.cols + col])
    }

    /// The nsbt-ordered cells.
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// One level's cells as a row-major slice.
    ///
    /// Levels are contiguous in nsbt order, so this is a plain subslice.
    pub(crate) fn level_cells(&self, level: usize) -> &[Cell] {
        let layer = self.rows * self.cols;
        &self.cells[level * layer..(level + 1) * layer]
    }

    /// Number of no-data cells in the whole volume.
    pub fn null_count(&self) -> usize {
        self.cells.iter().filter(|c| c.is_null()).count()
    }

    /// Total number of cells.
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }
}
