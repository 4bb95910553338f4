//! Horizontal grid axes and their NEMO naming conventions.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Horizontal axis of a Cartesian grid.
///
/// `X` is the fast (zonal, i) dimension, `Y` the slow (meridional, j) one.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Axis {
    X,
    Y,
}

impl Axis {
    /// Both axes in dataset construction order.
    pub const ALL: [Axis; 2] = [Axis::X, Axis::Y];

    /// Dimension name (`"x"` / `"y"`).
    pub fn dim(self) -> &'static str {
        match self {
            Axis::X => "x",
            Axis::Y => "y",
        }
    }

    /// CF `axis` attribute value.
    pub fn cf_axis(self) -> &'static str {
        match self {
            Axis::X => "X",
            Axis::Y => "Y",
        }
    }

    /// Prefix of the scale-factor fields (`e1` / `e2`).
    pub fn spacing_prefix(self) -> &'static str {
        match self {
            Axis::X => "e1",
            Axis::Y => "e2",
        }
    }

    /// Prefix of the coordinate fields (`glam` / `gphi`).
    pub fn coord_prefix(self) -> &'static str {
        match self {
            Axis::X => "glam",
            Axis::Y => "gphi",
        }
    }

    /// Plain-named coordinate alias (`nav_lon` / `nav_lat`).
    pub fn nav_name(self) -> &'static str {
        match self {
            Axis::X => "nav_lon",
            Axis::Y => "nav_lat",
        }
    }

    /// Name of the grid-point count parameter, used in error messages.
    pub fn count_name(self) -> &'static str {
        match self {
            Axis::X => "jpiglo",
            Axis::Y => "jpjglo",
        }
    }

    /// Name of the spacing parameter, used in error messages.
    pub fn spacing_name(self) -> &'static str {
        match self {
            Axis::X => "ppe1_m",
            Axis::Y => "ppe2_m",
        }
    }
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.dim())
    }
}
