//! Rectangular extent of a grid.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Rectangular extent of a grid's T-points.
///
/// Units follow the coordinates they were taken from (km for the generated
/// `glamt`/`gphit` fields). A single-point axis gives a zero-width extent.
///
/// # Example
///
/// ```
/// use domcfg_rs::types::Bounds2D;
///
/// let bounds = Bounds2D::from_extents((-930.0, 930.0), (-930.0, 930.0));
/// assert_eq!(bounds.to_string(), "[-930.00, 930.00] × [-930.00, 930.00]");
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Bounds2D {
    /// Minimum x-coordinate (western boundary)
    pub x_min: f64,
    /// Maximum x-coordinate (eastern boundary)
    pub x_max: f64,
    /// Minimum y-coordinate (southern boundary)
    pub y_min: f64,
    /// Maximum y-coordinate (northern boundary)
    pub y_max: f64,
}

impl Bounds2D {
    /// Extent from `(min, max)` pairs along x and y.
    ///
    /// Values are taken as given: an extent derived from non-finite
    /// coordinates is kept rather than rejected.
    pub fn from_extents((x_min, x_max): (f64, f64), (y_min, y_max): (f64, f64)) -> Self {
        Self {
            x_min,
            x_max,
            y_min,
            y_max,
        }
    }
}

impl fmt::Display for Bounds2D {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{:.2}, {:.2}] × [{:.2}, {:.2}]",
            self.x_min, self.x_max, self.y_min, self.y_max
        )
    }
}
