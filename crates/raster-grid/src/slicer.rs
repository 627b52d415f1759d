//! Per-level slicing of volumetric rasters.

use rayon::prelude::*;
use tracing::debug;

use raster_common::{RasterError, RasterResult};

use crate::{Grid2D, Grid3D};

/// Cuts a volumetric raster into one independent 2D layer per level.
///
/// Slicing is pure: the volume is borrowed immutably, every output layer
/// is freshly allocated, and no state is retained between calls. Levels
/// are independent, so they are computed in parallel and collected back
/// in ascending level order.
#[derive(Debug, Default)]
pub struct LevelSlicer;

impl LevelSlicer {
    /// Slice a volume into exactly `levels` layers, bottommost first.
    ///
    /// Layer `k` holds the volume's cells at level `k`, with values and
    /// no-data positions preserved exactly and the horizontal extent
    /// copied verbatim. A volume with `rows * cols == 0` yields layers
    /// with zero cells. The only failure path is `MalformedGrid` for a
    /// volume whose stored invariants are violated.
    pub fn slice(grid: &Grid3D) -> RasterResult<Vec<Grid2D>> {
        let (rows, cols, levels) = grid.shape();
        if grid.cells().len() != rows * cols * levels {
            return Err(RasterError::malformed(format!(
                "volume stores {} cells, shape {}x{}x{} requires {}",
                grid.cells().len(),
                rows,
                cols,
                levels,
                rows * cols * levels
            )));
        }
        grid.region().validate()?;

        let horizontal = grid.region().horizontal();
        let value_type = grid.value_type();

        let layers = (0..levels)
            .into_par_iter()
            .map(|level| {
                Grid2D::new(
                    rows,
                    cols,
                    horizontal,
                    value_type,
                    grid.level_cells(level).to_vec(),
                )
            })
            .collect::<RasterResult<Vec<_>>>()?;

        debug!(
            rows,
            cols,
            levels,
            nulls = grid.null_count(),
            "sliced volume into layers"
        );
        Ok(layers)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use raster_common::{Cell, Region3, ValueType};

    fn test_region() -> Region3 {
        Region3::new(12.0, 9.0, 21.0, 18.0, 8.0, 4.0).unwrap()
    }

    #[test]
    fn test_single_level_volume_yields_one_layer() {
        let grid = Grid3D::new(
            2,
            2,
            1,
            test_region(),
            ValueType::Int,
            vec![
                Cell::Value(1.0),
                Cell::Value(2.0),
                Cell::Value(3.0),
                Cell::Value(4.0),
            ],
        )
        .unwrap();
        let layers = LevelSlicer::slice(&grid).unwrap();
        assert_eq!(layers.len(), 1);
        assert_eq!(layers[0].shape(), (2, 2));
        assert_eq!(layers[0].at(1, 0).unwrap(), Cell::Value(3.0));
    }

    #[test]
    fn test_single_null_cell_volume() {
        let region = Region3::new(1.0, 0.0, 1.0, 0.0, 1.0, 0.0).unwrap();
        let grid =
            Grid3D::new(1, 1, 1, region, ValueType::Double, vec![Cell::Null]).unwrap();
        let layers = LevelSlicer::slice(&grid).unwrap();
        assert_eq!(layers.len(), 1);
        assert_eq!(layers[0].at(0, 0).unwrap(), Cell::Null);
    }

    #[test]
    fn test_empty_horizontal_shape() {
        let grid =
            Grid3D::new(0, 5, 3, test_region(), ValueType::Double, Vec::new()).unwrap();
        let layers = LevelSlicer::slice(&grid).unwrap();
        assert_eq!(layers.len(), 3);
        for layer in &layers {
            assert!(layer.is_empty());
            assert_eq!(layer.shape(), (0, 5));
        }
    }

    #[test]
    fn test_layers_inherit_horizontal_region() {
        let grid = Grid3D::new(
            1,
            1,
            2,
            test_region(),
            ValueType::Double,
            vec![Cell::Value(0.5), Cell::Value(-0.5)],
        )
        .unwrap();
        let layers = LevelSlicer::slice(&grid).unwrap();
        for layer in &layers {
            assert_eq!(layer.region(), test_region().horizontal());
        }
    }

    #[test]
    fn test_values_preserved_bit_for_bit() {
        let exact = [0.1_f64, -0.0, f64::MIN_POSITIVE, 1.0e300];
        let cells = exact.iter().map(|&v| Cell::Value(v)).collect();
        let grid = Grid3D::new(2, 2, 1, test_region(), ValueType::Double, cells).unwrap();
        let layers = LevelSlicer::slice(&grid).unwrap();
        for (i, &v) in exact.iter().enumerate() {
            let cell = layers[0].at(i / 2, i % 2).unwrap();
            assert_eq!(cell.value().unwrap().to_bits(), v.to_bits());
        }
    }
}
