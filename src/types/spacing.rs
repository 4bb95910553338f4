//! Grid-spacing specification along one axis.

use std::num::NonZeroUsize;

use serde::{Deserialize, Serialize};

/// Spacing of the T-points along one axis, in meters.
///
/// A uniform spacing needs an explicit point count; a per-cell spacing
/// implies the count through its length. The pairing is checked when the
/// grid is generated.
///
/// # Example
///
/// ```
/// use domcfg_rs::types::AxisSpacing;
///
/// let uniform: AxisSpacing = 30_000.0.into();
/// assert_eq!(uniform.implied_count(), None);
///
/// let stretched: AxisSpacing = vec![1000.0, 2000.0, 4000.0].into();
/// assert_eq!(stretched.implied_count(), Some(3));
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AxisSpacing {
    /// Constant spacing (m)
    Uniform(f64),
    /// One spacing per cell (m)
    Variable(Vec<f64>),
}

impl AxisSpacing {
    /// Point count carried by the spacing itself (vector case only).
    pub fn implied_count(&self) -> Option<usize> {
        match self {
            AxisSpacing::Uniform(_) => None,
            AxisSpacing::Variable(d) => Some(d.len()),
        }
    }

    /// Whether this is a per-cell spacing vector.
    pub fn is_vector(&self) -> bool {
        matches!(self, AxisSpacing::Variable(_))
    }

    /// Spacing divided by a refinement factor (child grids).
    pub fn refined(&self, factor: NonZeroUsize) -> Self {
        let factor = factor.get() as f64;
        match self {
            AxisSpacing::Uniform(s) => AxisSpacing::Uniform(s / factor),
            AxisSpacing::Variable(d) => {
                AxisSpacing::Variable(d.iter().map(|s| s / factor).collect())
            }
        }
    }
}

impl From<f64> for AxisSpacing {
    fn from(s: f64) -> Self {
        AxisSpacing::Uniform(s)
    }
}

impl From<Vec<f64>> for AxisSpacing {
    fn from(d: Vec<f64>) -> Self {
        AxisSpacing::Variable(d)
    }
}

impl From<&[f64]> for AxisSpacing {
    fn from(d: &[f64]) -> Self {
        AxisSpacing::Variable(d.to_vec())
    }
}
