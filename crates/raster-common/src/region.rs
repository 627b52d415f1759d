//! Spatial extents for 2D and 3D rasters.

use serde::{Deserialize, Serialize};

use crate::error::{RasterError, RasterResult};

/// Horizontal extent of a raster.
///
/// Coordinates are in the units of the raster's coordinate system
/// (degrees for geographic, meters for projected).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Region2 {
    pub north: f64,
    pub south: f64,
    pub east: f64,
    pub west: f64,
}

impl Region2 {
    /// Create a horizontal extent, rejecting inverted bounds.
    pub fn new(north: f64, south: f64, east: f64, west: f64) -> RasterResult<Self> {
        let region = Self {
            north,
            south,
            east,
            west,
        };
        region.validate()?;
        Ok(region)
    }

    /// Check `north > south` and `east > west`.
    pub fn validate(&self) -> RasterResult<()> {
        if self.north <= self.south {
            return Err(RasterError::malformed(format!(
                "north ({}) must be greater than south ({})",
                self.north, self.south
            )));
        }
        if self.east <= self.west {
            return Err(RasterError::malformed(format!(
                "east ({}) must be greater than west ({})",
                self.east, self.west
            )));
        }
        Ok(())
    }

    /// North-south extent in coordinate units.
    pub fn height(&self) -> f64 {
        self.north - self.south
    }

    /// East-west extent in coordinate units.
    pub fn width(&self) -> f64 {
        self.east - self.west
    }
}

/// Full extent of a volumetric raster: horizontal bounds plus a
/// vertical range.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Region3 {
    pub north: f64,
    pub south: f64,
    pub east: f64,
    pub west: f64,
    pub top: f64,
    pub bottom: f64,
}

impl Region3 {
    /// Create a volumetric extent, rejecting inverted bounds.
    pub fn new(
        north: f64,
        south: f64,
        east: f64,
        west: f64,
        top: f64,
        bottom: f64,
    ) -> RasterResult<Self> {
        let region = Self {
            north,
            south,
            east,
            west,
            top,
            bottom,
        };
        region.validate()?;
        Ok(region)
    }

    /// Check the horizontal bounds plus `top > bottom`.
    pub fn validate(&self) -> RasterResult<()> {
        self.horizontal().validate()?;
        if self.top <= self.bottom {
            return Err(RasterError::malformed(format!(
                "top ({}) must be greater than bottom ({})",
                self.top, self.bottom
            )));
        }
        Ok(())
    }

    /// The horizontal extent, dropping the vertical range.
    ///
    /// This is the extent inherited by every 2D layer cut from a volume.
    pub fn horizontal(&self) -> Region2 {
        Region2 {
            north: self.north,
            south: self.south,
            east: self.east,
            west: self.west,
        }
    }

    /// Vertical extent in coordinate units.
    pub fn depth(&self) -> f64 {
        self.top - self.bottom
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_region2_valid() {
        let r = Region2::new(12.0, 9.0, 21.0, 18.0).unwrap();
        assert_eq!(r.height(), 3.0);
        assert_eq!(r.width(), 3.0);
    }

    #[test]
    fn test_region2_inverted_latitudes() {
        let result = Region2::new(9.0, 12.0, 21.0, 18.0);
        assert!(matches!(result, Err(RasterError::MalformedGrid(_))));
    }

    #[test]
    fn test_region2_inverted_longitudes() {
        let result = Region2::new(12.0, 9.0, 18.0, 21.0);
        assert!(matches!(result, Err(RasterError::MalformedGrid(_))));
    }

    #[test]
    fn test_region3_valid() {
        let r = Region3::new(12.0, 9.0, 21.0, 18.0, 8.0, 4.0).unwrap();
        assert_eq!(r.depth(), 4.0);
        assert_eq!(r.horizontal(), Region2::new(12.0, 9.0, 21.0, 18.0).unwrap());
    }

    #[test]
    fn test_region3_inverted_vertical() {
        let result = Region3::new(12.0, 9.0, 21.0, 18.0, 4.0, 8.0);
        assert!(matches!(result, Err(RasterError::MalformedGrid(_))));
    }

    #[test]
    fn test_region3_zero_depth() {
        let result = Region3::new(12.0, 9.0, 21.0, 18.0, 4.0, 4.0);
        assert!(result.is_err());
    }
}
