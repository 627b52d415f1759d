//! Cell value model for raster grids.
//!
//! A cell is either a numeric value or the distinguished no-data marker.
//! No-data is a proper variant rather than a sentinel number, so it can
//! never leak into arithmetic by accident.

use serde::{Deserialize, Serialize};

/// A single raster cell: a numeric value or no-data.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub enum Cell {
    /// A valid numeric value.
    Value(f64),
    /// The no-data marker.
    Null,
}

impl Cell {
    /// Check whether this cell is the no-data marker.
    pub fn is_null(&self) -> bool {
        matches!(self, Cell::Null)
    }

    /// Get the numeric value, or `None` for no-data.
    pub fn value(&self) -> Option<f64> {
        match self {
            Cell::Value(v) => Some(*v),
            Cell::Null => None,
        }
    }
}

impl PartialEq for Cell {
    /// Equality with `Null == Null` and values compared bit-for-bit.
    ///
    /// Bitwise comparison keeps equality reflexive for every stored value
    /// and makes "slicing preserves values exactly" directly checkable.
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Cell::Null, Cell::Null) => true,
            (Cell::Value(a), Cell::Value(b)) => a.to_bits() == b.to_bits(),
            _ => false,
        }
    }
}

impl Eq for Cell {}

impl From<f64> for Cell {
    fn from(v: f64) -> Self {
        Cell::Value(v)
    }
}

impl From<Option<f64>> for Cell {
    fn from(v: Option<f64>) -> Self {
        match v {
            Some(v) => Cell::Value(v),
            None => Cell::Null,
        }
    }
}

/// Declared cell type of a grid.
///
/// Storage is always `f64`; the declared type only affects how values are
/// formatted when a grid is serialized.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ValueType {
    /// Whole-number values, formatted without a decimal point.
    Int,
    /// Single-precision values.
    Float,
    /// Double-precision values.
    #[default]
    Double,
}
