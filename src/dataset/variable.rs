//! Named 2D variables and index coordinates.

use std::collections::BTreeMap;

use ndarray::Array2;
use serde::{Deserialize, Serialize};

use crate::types::Axis;

/// String attributes attached to a variable, coordinate or dataset.
pub type Attributes = BTreeMap<String, String>;

/// Build an attribute map from `(key, value)` pairs.
pub fn attributes<const N: usize>(pairs: [(&str, &str); N]) -> Attributes {
    pairs
        .into_iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

/// A 2D field on the `(y, x)` grid.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Variable {
    /// Variable name (e.g. `glamt`, `e1u`, `Bathymetry`)
    pub name: String,
    /// Values, shape `(ny, nx)`
    pub data: Array2<f64>,
    /// `units`, `long_name`, ...
    pub attributes: Attributes,
}

impl Variable {
    /// Create a variable.
    pub fn new(name: impl Into<String>, data: Array2<f64>, attributes: Attributes) -> Self {
        Self {
            name: name.into(),
            data,
            attributes,
        }
    }

    /// Shape `(ny, nx)`.
    #[inline]
    pub fn shape(&self) -> (usize, usize) {
        self.data.dim()
    }

    /// Value at column `i`, row `j`.
    #[inline]
    pub fn get(&self, i: usize, j: usize) -> Option<f64> {
        self.data.get((j, i)).copied()
    }

    /// Attribute lookup.
    pub fn attribute(&self, key: &str) -> Option<&str> {
        self.attributes.get(key).map(String::as_str)
    }

    /// Minimum value (NaN-ignoring).
    pub fn min(&self) -> f64 {
        self.data.iter().cloned().fold(f64::INFINITY, f64::min)
    }

    /// Maximum value (NaN-ignoring).
    pub fn max(&self) -> f64 {
        self.data.iter().cloned().fold(f64::NEG_INFINITY, f64::max)
    }
}

/// Integer index coordinate `0..len` along one dimension.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct IndexCoordinate {
    /// Dimension name (`x` / `y`)
    pub name: String,
    /// Number of points
    pub len: usize,
    /// `axis`, `long_name`
    pub attributes: Attributes,
}

impl IndexCoordinate {
    /// Index coordinate for a grid axis with CF `axis` metadata.
    pub fn for_axis(axis: Axis, len: usize) -> Self {
        let long_name = format!("{}-dimension index", axis.dim());
        Self {
            name: axis.dim().to_string(),
            len,
            attributes: attributes([("axis", axis.cf_axis()), ("long_name", long_name.as_str())]),
        }
    }

    /// Index values `0..len`.
    pub fn values(&self) -> Vec<i64> {
        (0..self.len as i64).collect()
    }

    /// Attribute lookup.
    pub fn attribute(&self, key: &str) -> Option<&str> {
        self.attributes.get(key).map(String::as_str)
    }
}
