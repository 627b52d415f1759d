//! Parsing of ASCII raster text into typed grids.

use std::collections::HashMap;

use tracing::debug;

use raster_common::{Cell, Region2, Region3, ValueType};
use raster_grid::{Grid2D, Grid3D};

use crate::error::{AsciiError, AsciiResult};
use crate::NULL_MARKER;

/// Format version accepted in the 3D header.
const VERSION_3D: &str = "grass7";

/// Traversal order accepted in the 3D header.
const ORDER_NSBT: &str = "nsbt";

/// A header value together with the 1-based line it came from.
type Headers = HashMap<String, (String, usize)>;

/// Parse 3D-ASCII text into a volume.
///
/// Expects `version: grass7`, `order: nsbt`, the six extent fields, the
/// three shape fields, then `levels * rows` lines of `cols` whitespace
/// separated values with `*` as the no-data marker. Integer literals on
/// every cell mark the volume as `ValueType::Int`.
pub fn parse_grid3(text: &str) -> AsciiResult<Grid3D> {
    let (headers, data) = split_sections(text);

    let version = require(&headers, "version")?;
    if version != VERSION_3D {
        return Err(AsciiError::UnsupportedVersion(version.to_string()));
    }
    let order = require(&headers, "order")?;
    if order != ORDER_NSBT {
        return Err(AsciiError::UnsupportedOrder(order.to_string()));
    }

    let region = Region3::new(
        require_f64(&headers, "north")?,
        require_f64(&headers, "south")?,
        require_f64(&headers, "east")?,
        require_f64(&headers, "west")?,
        require_f64(&headers, "top")?,
        require_f64(&headers, "bottom")?,
    )?;
    let rows = require_usize(&headers, "rows")?;
    let cols = require_usize(&headers, "cols")?;
    let levels = require_usize(&headers, "levels")?;

    let (cells, value_type) = parse_data(&data, levels * rows, cols)?;
    let grid = Grid3D::new(rows, cols, levels, region, value_type, cells)?;
    debug!(rows, cols, levels, "parsed 3D-ASCII volume");
    Ok(grid)
}

/// Parse 2D-ASCII text into a single layer.
///
/// Expects the four horizontal extent fields, `rows`/`cols`, then `rows`
/// data lines in the same cell syntax as the 3D convention.
pub fn parse_grid2(text: &str) -> AsciiResult<Grid2D> {
    let (headers, data) = split_sections(text);

    let region = Region2::new(
        require_f64(&headers, "north")?,
        require_f64(&headers, "south")?,
        require_f64(&headers, "east")?,
        require_f64(&headers, "west")?,
    )?;
    let rows = require_usize(&headers, "rows")?;
    let cols = require_usize(&headers, "cols")?;

    let (cells, value_type) = parse_data(&data, rows, cols)?;
    let grid = Grid2D::new(rows, cols, region, value_type, cells)?;
    debug!(rows, cols, "parsed 2D-ASCII layer");
    Ok(grid)
}

/// Split text into `key: value` header lines and numbered data lines.
///
/// The header section ends at the first line that does not look like a
/// `key: value` pair; blank lines are skipped throughout.
fn split_sections(text: &str) -> (Headers, Vec<(usize, &str)>) {
    let mut headers = Headers::new();
    let mut data = Vec::new();
    let mut in_data = false;

    for (i, raw) in text.lines().enumerate() {
        let line = raw.trim();
        if line.is_empty() {
            continue;
        }
        if !in_data && is_header_line(line) {
            let mut parts = line.splitn(2, ':');
            let key = parts.next().unwrap_or_default().trim().to_ascii_lowercase();
            let value = parts.next().unwrap_or_default().trim().to_string();
            headers.insert(key, (value, i + 1));
        } else {
            in_data = true;
            data.push((i + 1, line));
        }
    }
    (headers, data)
}

fn is_header_line(line: &str) -> bool {
    match line.split_whitespace().next() {
        Some(token) => {
            token.ends_with(':')
                && token
                    .chars()
                    .next()
                    .map(|c| c.is_ascii_alphabetic())
                    .unwrap_or(false)
        }
        None => false,
    }
}

fn require<'a>(headers: &'a Headers, key: &'static str) -> AsciiResult<&'a str> {
    headers
        .get(key)
        .map(|(value, _)| value.as_str())
        .ok_or(AsciiError::MissingField(key))
}

fn require_f64(headers: &Headers, key: &'static str) -> AsciiResult<f64> {
    let (value, line) = headers.get(key).ok_or(AsciiError::MissingField(key))?;
    value.parse().map_err(|_| AsciiError::InvalidNumber {
        token: value.clone(),
        line: *line,
    })
}

fn require_usize(headers: &Headers, key: &'static str) -> AsciiResult<usize> {
    let (value, line) = headers.get(key).ok_or(AsciiError::MissingField(key))?;
    value.parse().map_err(|_| AsciiError::InvalidNumber {
        token: value.clone(),
        line: *line,
    })
}

/// Parse the data section: `lines` lines of `cols` cells each.
///
/// Returns the cells in file order plus the detected value type: `Int`
/// when every non-null literal is a plain integer, `Double` otherwise.
fn parse_data(
    data: &[(usize, &str)],
    lines: usize,
    cols: usize,
) -> AsciiResult<(Vec<Cell>, ValueType)> {
    if data.len() != lines {
        return Err(AsciiError::CountMismatch {
            what: "data lines",
            expected: lines,
            got: data.len(),
        });
    }

    let mut cells = Vec::with_capacity(lines * cols);
    let mut all_int = true;

    for &(line_no, line) in data {
        let start = cells.len();
        for token in line.split_whitespace() {
            cells.push(parse_cell(token, line_no, &mut all_int)?);
        }
        let got = cells.len() - start;
        if got != cols {
            return Err(AsciiError::CountMismatch {
                what: "cells on a data line",
                expected: cols,
                got,
            });
        }
    }

    let value_type = if all_int {
        ValueType::Int
    } else {
        ValueType::Double
    };
    Ok((cells, value_type))
}

fn parse_cell(token: &str, line: usize, all_int: &mut bool) -> AsciiResult<Cell> {
    if token == NULL_MARKER {
        return Ok(Cell::Null);
    }
    if token.contains(['.', 'e', 'E']) {
        *all_int = false;
    }
    token
        .parse::<f64>()
        .map(Cell::Value)
        .map_err(|_| AsciiError::InvalidNumber {
            token: token.to_string(),
            line,
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_utils::{LAYERS_3X3X4, NULLS_PER_LAYER, VOLUME_3X3X4};

    #[test]
    fn test_parse_fixture_volume() {
        let grid = parse_grid3(VOLUME_3X3X4).unwrap();
        assert_eq!(grid.shape(), (3, 3, 4));
        assert_eq!(grid.value_type(), ValueType::Int);

        let region = grid.region();
        assert_eq!(region.north, 12.0);
        assert_eq!(region.south, 9.0);
        assert_eq!(region.east, 21.0);
        assert_eq!(region.west, 18.0);
        assert_eq!(region.top, 8.0);
        assert_eq!(region.bottom, 4.0);

        // First data line of the bottom level: "6 5 1"
        assert_eq!(grid.at(0, 0, 0).unwrap(), Cell::Value(6.0));
        assert_eq!(grid.at(0, 1, 0).unwrap(), Cell::Value(5.0));
        assert_eq!(grid.at(0, 2, 0).unwrap(), Cell::Value(1.0));
        // Second line has a null in the middle: "0 * 5"
        assert_eq!(grid.at(1, 1, 0).unwrap(), Cell::Null);
        // Top level, last line: "5 1 7"
        assert_eq!(grid.at(2, 0, 3).unwrap(), Cell::Value(5.0));

        assert_eq!(grid.null_count(), NULLS_PER_LAYER * 4);
    }

    #[test]
    fn test_parse_fixture_layers() {
        for text in LAYERS_3X3X4 {
            let layer = parse_grid2(text).unwrap();
            assert_eq!(layer.shape(), (3, 3));
            assert_eq!(layer.null_count(), NULLS_PER_LAYER);
            assert_eq!(layer.region().north, 12.0);
        }
    }

    #[test]
    fn test_parse_detects_double_values() {
        let text = "\
north: 1
south: 0
east: 1
west: 0
rows: 1
cols: 2
1.5 *
";
        let layer = parse_grid2(text).unwrap();
        assert_eq!(layer.value_type(), ValueType::Double);
        assert_eq!(layer.at(0, 0).unwrap(), Cell::Value(1.5));
        assert_eq!(layer.at(0, 1).unwrap(), Cell::Null);
    }

    #[test]
    fn test_parse_scientific_notation() {
        let text = "\
north: 1
south: 0
east: 1
west: 0
rows: 1
cols: 2
1e-3 -2.5E2
";
        let layer = parse_grid2(text).unwrap();
        assert_eq!(layer.at(0, 0).unwrap(), Cell::Value(1e-3));
        assert_eq!(layer.at(0, 1).unwrap(), Cell::Value(-250.0));
    }

    #[test]
    fn test_reject_unknown_version() {
        let text = VOLUME_3X3X4.replace("version: grass7", "version: grass6");
        assert!(matches!(
            parse_grid3(&text),
            Err(AsciiError::UnsupportedVersion(_))
        ));
    }

    #[test]
    fn test_reject_unknown_order() {
        let text = VOLUME_3X3X4.replace("order: nsbt", "order: snbt");
        assert!(matches!(
            parse_grid3(&text),
            Err(AsciiError::UnsupportedOrder(_))
        ));
    }

    #[test]
    fn test_reject_missing_field() {
        let text = VOLUME_3X3X4.replace("levels: 4\n", "");
        assert!(matches!(
            parse_grid3(&text),
            Err(AsciiError::MissingField("levels"))
        ));
    }

    #[test]
    fn test_reject_bad_cell_token() {
        let text = VOLUME_3X3X4.replace("6 5 1", "6 x 1");
        assert!(matches!(
            parse_grid3(&text),
            Err(AsciiError::InvalidNumber { .. })
        ));
    }

    #[test]
    fn test_reject_missing_data_line() {
        let mut text = VOLUME_3X3X4.to_string();
        text.truncate(text.rfind("5 1 7").unwrap());
        assert!(matches!(
            parse_grid3(&text),
            Err(AsciiError::CountMismatch {
                what: "data lines",
                expected: 12,
                got: 11,
            })
        ));
    }

    #[test]
    fn test_reject_short_data_line() {
        let text = VOLUME_3X3X4.replace("6 5 1", "6 5");
        assert!(matches!(
            parse_grid3(&text),
            Err(AsciiError::CountMismatch {
                what: "cells on a data line",
                ..
            })
        ));
    }

    #[test]
    fn test_reject_inverted_bounds() {
        let text = VOLUME_3X3X4
            .replace("north: 12", "north: 5")
            .replace("south: 9", "south: 20");
        assert!(matches!(parse_grid3(&text), Err(AsciiError::Raster(_))));
    }
}
