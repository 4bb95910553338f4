//! Labeled dataset container for grid and bathymetry outputs.
//!
//! A [`Dataset`] is the in-memory equivalent of a NEMO `coordinates.nc` or
//! `bathy_meter.nc` file:
//! - two dimensions, `y` (slow) and `x` (fast)
//! - integer index coordinates `x` and `y` with CF `axis` attributes
//! - named 2D `f64` variables with `units` / `long_name` attributes
//! - global attributes
//!
//! Every variable shares the `(ny, nx)` shape given by the index coordinates;
//! insertion checks this.
//!
//! # Example
//!
//! ```
//! use domcfg_rs::dataset::{Dataset, Variable, attributes};
//! use ndarray::Array2;
//!
//! let mut ds = Dataset::new(3, 2);
//! ds.insert_variable(Variable::new(
//!     "Bathymetry",
//!     Array2::from_elem((2, 3), 5000.0),
//!     attributes([("units", "m")]),
//! ))
//! .unwrap();
//!
//! assert_eq!(ds.shape(), (2, 3));
//! assert!(ds.variable("Bathymetry").is_some());
//! ```

mod variable;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::types::Axis;

pub use variable::{Attributes, IndexCoordinate, Variable, attributes};

/// Error type for dataset construction and serialization.
#[derive(Debug, Error)]
pub enum DatasetError {
    /// Variable shape differs from the dataset dimensions
    #[error("Shape mismatch for '{name}': expected {expected:?}, got {found:?}")]
    ShapeMismatch {
        name: String,
        expected: (usize, usize),
        found: (usize, usize),
    },

    /// Required variable not present
    #[error("Missing variable: {0}")]
    MissingVariable(String),

    /// Required dimension not present
    #[error("Missing dimension: {0}")]
    MissingDimension(String),

    /// File I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON encoding error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// NetCDF library error
    #[cfg(feature = "netcdf")]
    #[error("NetCDF error: {0}")]
    NetCDF(#[from] netcdf::Error),
}

/// Gridded dataset: index coordinates, 2D variables and global attributes.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Dataset {
    /// Index coordinates, `[x, y]`
    coordinates: Vec<IndexCoordinate>,
    /// 2D variables in insertion order
    variables: Vec<Variable>,
    /// Global attributes
    attributes: Attributes,
}

impl Dataset {
    /// Empty dataset on an `nx` by `ny` grid.
    pub fn new(nx: usize, ny: usize) -> Self {
        Self {
            coordinates: vec![
                IndexCoordinate::for_axis(Axis::X, nx),
                IndexCoordinate::for_axis(Axis::Y, ny),
            ],
            variables: Vec::new(),
            attributes: Attributes::new(),
        }
    }

    /// Build a dataset from explicit index coordinates.
    ///
    /// Both `x` and `y` must be present.
    pub fn with_coordinates(coordinates: Vec<IndexCoordinate>) -> Result<Self, DatasetError> {
        for dim in ["x", "y"] {
            if !coordinates.iter().any(|c| c.name == dim) {
                return Err(DatasetError::MissingDimension(dim.to_string()));
            }
        }
        let mut coordinates = coordinates;
        coordinates.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(Self {
            coordinates,
            variables: Vec::new(),
            attributes: Attributes::new(),
        })
    }

    /// Grid shape `(ny, nx)`.
    pub fn shape(&self) -> (usize, usize) {
        (self.dim_len(Axis::Y), self.dim_len(Axis::X))
    }

    /// Dimensions as `(name, len)` in storage order (`y`, `x`).
    pub fn dimensions(&self) -> [(&'static str, usize); 2] {
        let (ny, nx) = self.shape();
        [("y", ny), ("x", nx)]
    }

    fn dim_len(&self, axis: Axis) -> usize {
        self.coordinate(axis.dim()).map(|c| c.len).unwrap_or(0)
    }

    /// Index coordinate by dimension name.
    pub fn coordinate(&self, name: &str) -> Option<&IndexCoordinate> {
        self.coordinates.iter().find(|c| c.name == name)
    }

    /// All index coordinates.
    pub fn coordinates(&self) -> &[IndexCoordinate] {
        &self.coordinates
    }

    /// Insert a variable, replacing any existing one with the same name.
    pub fn insert_variable(&mut self, variable: Variable) -> Result<(), DatasetError> {
        let expected = self.shape();
        if variable.shape() != expected {
            return Err(DatasetError::ShapeMismatch {
                name: variable.name,
                expected,
                found: variable.data.dim(),
            });
        }
        self.upsert(variable);
        Ok(())
    }

    /// Insert a variable evaluated on this dataset's own grid.
    ///
    /// For fields derived from the same axes the dataset was created from,
    /// where the shape holds by construction.
    pub(crate) fn insert_on_grid(&mut self, variable: Variable) {
        debug_assert_eq!(
            variable.shape(),
            self.shape(),
            "'{}' was not evaluated on this grid",
            variable.name
        );
        self.upsert(variable);
    }

    fn upsert(&mut self, variable: Variable) {
        match self.variables.iter_mut().find(|v| v.name == variable.name) {
            Some(existing) => *existing = variable,
            None => self.variables.push(variable),
        }
    }

    /// Variable by name.
    pub fn variable(&self, name: &str) -> Option<&Variable> {
        self.variables.iter().find(|v| v.name == name)
    }

    /// Variable by name, or `MissingVariable`.
    pub fn require(&self, name: &str) -> Result<&Variable, DatasetError> {
        self.variable(name)
            .ok_or_else(|| DatasetError::MissingVariable(name.to_string()))
    }

    /// All variables in insertion order.
    pub fn variables(&self) -> &[Variable] {
        &self.variables
    }

    /// Variable names in insertion order.
    pub fn variable_names(&self) -> Vec<&str> {
        self.variables.iter().map(|v| v.name.as_str()).collect()
    }

    /// Remove the named variables. Unknown names are ignored.
    pub fn drop_variables(mut self, names: &[&str]) -> Self {
        self.variables.retain(|v| !names.contains(&v.name.as_str()));
        self
    }

    /// Keep only the named variables (index coordinates are always kept).
    pub fn select_variables(mut self, names: &[&str]) -> Self {
        self.variables.retain(|v| names.contains(&v.name.as_str()));
        self
    }

    /// Set a global attribute.
    pub fn set_attribute(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.attributes.insert(key.into(), value.into());
    }

    /// Global attribute lookup.
    pub fn global_attribute(&self, key: &str) -> Option<&str> {
        self.attributes.get(key).map(String::as_str)
    }

    /// All global attributes.
    pub fn global_attributes(&self) -> &Attributes {
        &self.attributes
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::Array2;

    fn field(name: &str, ny: usize, nx: usize, value: f64) -> Variable {
        Variable::new(name, Array2::from_elem((ny, nx), value), Attributes::new())
    }

    #[test]
    fn test_new_dataset_dimensions() {
        let ds = Dataset::new(5, 3);
        assert_eq!(ds.shape(), (3, 5));
        assert_eq!(ds.dimensions(), [("y", 3), ("x", 5)]);
        assert_eq!(ds.coordinate("x").unwrap().attribute("axis"), Some("X"));
    }

    #[test]
    fn test_insert_rejects_wrong_shape() {
        let mut ds = Dataset::new(5, 3);
        let err = ds.insert_variable(field("e1t", 5, 3, 1.0)).unwrap_err();
        assert!(matches!(err, DatasetError::ShapeMismatch { .. }));
        assert!(err.to_string().contains("e1t"));
    }

    #[test]
    fn test_insert_replaces_same_name() {
        let mut ds = Dataset::new(2, 2);
        ds.insert_variable(field("Bathymetry", 2, 2, 1.0)).unwrap();
        ds.insert_variable(field("Bathymetry", 2, 2, 2.0)).unwrap();
        assert_eq!(ds.variables().len(), 1);
        assert_eq!(ds.variable("Bathymetry").unwrap().get(0, 0), Some(2.0));
    }

    #[test]
    fn test_insert_on_grid_replaces_same_name() {
        let mut ds = Dataset::new(3, 2);
        ds.insert_on_grid(field("glamt", 2, 3, 1.0));
        ds.insert_on_grid(field("glamt", 2, 3, 4.0));
        assert_eq!(ds.variable_names(), vec!["glamt"]);
        assert_eq!(ds.variable("glamt").unwrap().get(2, 1), Some(4.0));
    }

    #[cfg(debug_assertions)]
    #[test]
    #[should_panic(expected = "was not evaluated on this grid")]
    fn test_insert_on_grid_checks_shape() {
        let mut ds = Dataset::new(3, 2);
        ds.insert_on_grid(field("glamt", 3, 2, 1.0));
    }

    #[test]
    fn test_drop_and_select() {
        let mut ds = Dataset::new(2, 2);
        for name in ["nav_lon", "glamt", "e1t", "Bathymetry"] {
            ds.insert_variable(field(name, 2, 2, 0.0)).unwrap();
        }

        let dropped = ds.clone().drop_variables(&["glamt", "e1t", "missing"]);
        assert_eq!(dropped.variable_names(), vec!["nav_lon", "Bathymetry"]);

        let selected = ds.select_variables(&["Bathymetry"]);
        assert_eq!(selected.variable_names(), vec!["Bathymetry"]);
        assert_eq!(selected.coordinates().len(), 2);
    }

    #[test]
    fn test_with_coordinates_requires_both_dims() {
        let err =
            Dataset::with_coordinates(vec![IndexCoordinate::for_axis(Axis::X, 3)]).unwrap_err();
        assert!(matches!(err, DatasetError::MissingDimension(ref d) if d == "y"));
    }

    #[test]
    fn test_require_missing() {
        let ds = Dataset::new(1, 1);
        assert!(matches!(ds.require("glamt"), Err(DatasetError::MissingVariable(_))));
    }
}
