//! Deterministic grid generators for synthetic test volumes.
//!
//! The generated patterns encode the cell position in the value, so tests
//! can verify that data lands at the right (row, col, level) without
//! keeping a reference copy.

use raster_common::{Cell, Region3, ValueType};
use raster_grid::Grid3D;

/// Creates nsbt-ordered cells with position-encoded values.
///
/// Each non-null cell is `level * 10_000 + row * 100 + col`. Every cell
/// whose flat nsbt index is divisible by 7 is no-data, which puts nulls
/// at predictable but non-uniform positions across levels.
pub fn checker_cells(rows: usize, cols: usize, levels: usize) -> Vec<Cell> {
    let mut cells = Vec::with_capacity(rows * cols * levels);
    for level in 0..levels {
        for row in 0..rows {
            for col in 0..cols {
                let index = (level * rows + row) * cols + col;
                if index % 7 == 0 {
                    cells.push(Cell::Null);
                } else {
                    cells.push(Cell::Value((level * 10_000 + row * 100 + col) as f64));
                }
            }
        }
    }
    cells
}

/// The value `checker_cells` stores at `(row, col, level)`, or `None`
/// for a no-data position.
pub fn checker_value(
    rows: usize,
    cols: usize,
    row: usize,
    col: usize,
    level: usize,
) -> Option<f64> {
    let index = (level * rows + row) * cols + col;
    if index % 7 == 0 {
        None
    } else {
        Some((level * 10_000 + row * 100 + col) as f64)
    }
}

/// Builds a valid volume over a unit-resolution extent with
/// position-encoded cells from [`checker_cells`].
pub fn layered_grid3(rows: usize, cols: usize, levels: usize) -> Grid3D {
    // max(1) keeps the extent valid for degenerate zero-cell shapes
    let region = Region3::new(
        rows.max(1) as f64,
        0.0,
        cols.max(1) as f64,
        0.0,
        levels.max(1) as f64,
        0.0,
    )
    .expect("generator extent is valid");
    Grid3D::new(
        rows,
        cols,
        levels,
        region,
        ValueType::Double,
        checker_cells(rows, cols, levels),
    )
    .expect("generator shape matches cell count")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_checker_cells_length() {
        assert_eq!(checker_cells(3, 4, 5).len(), 60);
    }

    #[test]
    fn test_checker_value_matches_cells() {
        let rows = 3;
        let cols = 4;
        let levels = 2;
        let cells = checker_cells(rows, cols, levels);
        for level in 0..levels {
            for row in 0..rows {
                for col in 0..cols {
                    let index = (level * rows + row) * cols + col;
                    let expected = checker_value(rows, cols, row, col, level);
                    assert_eq!(cells[index].value(), expected);
                }
            }
        }
    }

    #[test]
    fn test_layered_grid3_shape() {
        let grid = layered_grid3(2, 3, 4);
        assert_eq!(grid.shape(), (2, 3, 4));
        assert!(grid.null_count() > 0);
    }
}
