//! Serialization of typed grids back to ASCII raster text.

use std::fmt::Write as _;

use raster_common::{Cell, ValueType};
use raster_grid::{Grid2D, Grid3D};

use crate::NULL_MARKER;

/// Serialize a single layer in the 2D-ASCII convention.
///
/// With `precision: None`, `Int`-typed grids are written without a
/// decimal point and floating grids use shortest round-trip formatting;
/// `Some(n)` forces `n` decimal places. No-data cells are written as `*`.
pub fn write_grid2(grid: &Grid2D, precision: Option<usize>) -> String {
    let region = grid.region();
    let mut out = String::new();
    let _ = writeln!(out, "north: {}", region.north);
    let _ = writeln!(out, "south: {}", region.south);
    let _ = writeln!(out, "east: {}", region.east);
    let _ = writeln!(out, "west: {}", region.west);
    let _ = writeln!(out, "rows: {}", grid.rows());
    let _ = writeln!(out, "cols: {}", grid.cols());
    write_rows(&mut out, grid.cells(), grid.cols(), grid.value_type(), precision);
    out
}

/// Serialize a volume in the 3D-ASCII convention, nsbt order.
pub fn write_grid3(grid: &Grid3D, precision: Option<usize>) -> String {
    let region = grid.region();
    let mut out = String::new();
    let _ = writeln!(out, "version: grass7");
    let _ = writeln!(out, "order: nsbt");
    let _ = writeln!(out, "north: {}", region.north);
    let _ = writeln!(out, "south: {}", region.south);
    let _ = writeln!(out, "east: {}", region.east);
    let _ = writeln!(out, "west: {}", region.west);
    let _ = writeln!(out, "top: {}", region.top);
    let _ = writeln!(out, "bottom: {}", region.bottom);
    let _ = writeln!(out, "rows: {}", grid.rows());
    let _ = writeln!(out, "cols: {}", grid.cols());
    let _ = writeln!(out, "levels: {}", grid.levels());
    write_rows(&mut out, grid.cells(), grid.cols(), grid.value_type(), precision);
    out
}

/// Write cells as lines of `cols` space-separated tokens.
fn write_rows(
    out: &mut String,
    cells: &[Cell],
    cols: usize,
    value_type: ValueType,
    precision: Option<usize>,
) {
    if cols == 0 {
        return;
    }
    for row in cells.chunks(cols) {
        for (i, cell) in row.iter().enumerate() {
            if i > 0 {
                out.push(' ');
            }
            out.push_str(&format_cell(*cell, value_type, precision));
        }
        out.push('\n');
    }
}

fn format_cell(cell: Cell, value_type: ValueType, precision: Option<usize>) -> String {
    match cell {
        Cell::Null => NULL_MARKER.to_string(),
        Cell::Value(v) => match precision {
            Some(p) => format!("{:.*}", p, v),
            None if value_type == ValueType::Int => format!("{}", v as i64),
            None => format!("{}", v),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reader::{parse_grid2, parse_grid3};
    use test_utils::{LAYERS_3X3X4, VOLUME_3X3X4};

    #[test]
    fn test_write_fixture_layers_exactly() {
        for text in LAYERS_3X3X4 {
            let layer = parse_grid2(text).unwrap();
            assert_eq!(write_grid2(&layer, None), text);
        }
    }

    #[test]
    fn test_write_fixture_volume_exactly() {
        let grid = parse_grid3(VOLUME_3X3X4).unwrap();
        assert_eq!(write_grid3(&grid, None), VOLUME_3X3X4);
    }

    #[test]
    fn test_forced_precision() {
        let layer = parse_grid2(LAYERS_3X3X4[0]).unwrap();
        let text = write_grid2(&layer, Some(2));
        assert!(text.contains("6.00 5.00 1.00"));
        // no-data stays a bare marker regardless of precision
        assert!(text.contains("0.00 * 5.00"));
    }

    #[test]
    fn test_double_values_round_trip() {
        let text = "\
north: 1
south: 0
east: 1
west: 0
rows: 1
cols: 3
0.1 -2.5 1e300
";
        let layer = parse_grid2(text).unwrap();
        let written = write_grid2(&layer, None);
        let reparsed = parse_grid2(&written).unwrap();
        assert_eq!(layer.cells(), reparsed.cells());
    }

    #[test]
    fn test_empty_layer_has_no_data_lines() {
        use raster_common::{Region2, ValueType};
        use raster_grid::Grid2D;
        let layer = Grid2D::new(
            0,
            0,
            Region2::new(1.0, 0.0, 1.0, 0.0).unwrap(),
            ValueType::Double,
            Vec::new(),
        )
        .unwrap();
        let text = write_grid2(&layer, None);
        assert!(text.ends_with("cols: 0\n"));
    }
}
