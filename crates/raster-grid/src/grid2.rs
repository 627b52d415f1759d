//! Single-layer raster grid.

use raster_common::{Cell, RasterError, RasterResult, Region2, ValueType};

/// A dense 2D raster layer.
///
/// Cells are stored row-major with row 0 the northernmost row and col 0
/// the westernmost column. Layers produced by slicing a volume carry the
/// volume's horizontal extent verbatim.
#[derive(Debug, Clone, PartialEq)]
pub struct Grid2D {
    rows: usize,
    cols: usize,
    region: Region2,
    value_type: ValueType,
    cells: Vec<Cell>,
}

impl Grid2D {
    /// Create a layer from its shape, extent, and row-major cells.
    ///
    /// Fails with `MalformedGrid` when the cell count does not match
    /// `rows * cols` or the extent bounds are inverted.
    pub fn new(
        rows: usize,
        cols: usize,
        region: Region2,
        value_type: ValueType,
        cells: Vec<Cell>,
    ) -> RasterResult<Self> {
        region.validate()?;
        let expected = rows * cols;
        if cells.len() != expected {
            return Err(RasterError::malformed(format!(
                "expected {} cells for shape {}x{}, got {}",
                expected,
                rows,
                cols,
                cells.len()
            )));
        }
        Ok(Self {
            rows,
            cols,
            region,
            value_type,
            cells,
        })
    }

    /// Shape as `(rows, cols)`.
    pub fn shape(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// The horizontal extent.
    pub fn region(&self) -> Region2 {
        self.region
    }

    /// Declared cell type, used when the layer is serialized.
    pub fn value_type(&self) -> ValueType {
        self.value_type
    }

    /// The cell at `(row, col)`.
    ///
    /// Fails with `OutOfRange` when either index is outside its bound.
    pub fn at(&self, row: usize, col: usize) -> RasterResult<Cell> {
        if row >= self.rows || col >= self.cols {
            return Err(RasterError::OutOfRange {
                row,
                col,
                level: 0,
                rows: self.rows,
                cols: self.cols,
                levels: 1,
            });
        }
        Ok(self.cells[row * self.cols + col])
    }

    /// The row-major cells.
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Number of no-data cells in the layer.
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
