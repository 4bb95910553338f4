//! 1D coordinates and scale factors along one grid axis.
//!
//! The grid is centred on a T-point at the middle of the domain, the way the
//! NEMO VORTEX test case builds it (odd point counts put a T-point exactly
//! at zero).
//!
//! For spacings `d[k]` and offset `ppg`:
//!
//! ```text
//! coord_c[k] = ppg + d[0] + ... + d[k]
//! coord_f[k] = (coord_c[k] + coord_c[k+1]) / 2      (last: coord_c + d/2)
//! delta_f[k] = coord_c[k+1] - coord_c[k]            (last: d[n-1])
//! ```

use ndarray::{Array1, Axis as NdAxis};

use super::GridError;
use crate::dataset::{Attributes, attributes};
use crate::types::{Axis, AxisSpacing};

/// Meters per kilometer; coordinates are stored in km, spacings in m.
pub const M_PER_KM: f64 = 1000.0;

/// Cell-center and cell-face fields along one axis.
#[derive(Clone, Debug, PartialEq)]
pub struct AxisFields {
    /// Which axis these fields belong to
    pub axis: Axis,
    /// Cell-center (T-point) coordinates (m)
    pub coord_c: Array1<f64>,
    /// Cell-face coordinates (m)
    pub coord_f: Array1<f64>,
    /// Cell-center spacing (m)
    pub delta_c: Array1<f64>,
    /// Cell-face spacing (m)
    pub delta_f: Array1<f64>,
}

impl AxisFields {
    /// Generate the fields for one axis.
    ///
    /// `count` must be `Some(n > 0)` for a uniform spacing and `None` for a
    /// spacing vector.
    pub fn generate(
        axis: Axis,
        spacing: &AxisSpacing,
        count: Option<usize>,
    ) -> Result<Self, GridError> {
        let delta_c = resolve_spacing(axis, spacing, count)?;
        let n = delta_c.len();

        let ppg = match spacing {
            AxisSpacing::Uniform(s) => -0.5 * s + (-(n as f64)) * 0.5 * s,
            AxisSpacing::Variable(d) => -0.5 * d[0] - 0.5 * delta_c.sum(),
        };

        let mut coord_c = delta_c.clone();
        coord_c.accumulate_axis_inplace(NdAxis(0), |&prev, curr| *curr += prev);
        coord_c += ppg;

        let last_c = coord_c[n - 1];
        let last_d = delta_c[n - 1];
        let coord_f = Array1::from_shape_fn(n, |k| {
            if k + 1 < n {
                0.5 * (coord_c[k] + coord_c[k + 1])
            } else {
                last_c + 0.5 * last_d
            }
        });
        let delta_f = Array1::from_shape_fn(n, |k| {
            if k + 1 < n {
                coord_c[k + 1] - coord_c[k]
            } else {
                last_d
            }
        });

        Ok(Self {
            axis,
            coord_c,
            coord_f,
            delta_c,
            delta_f,
        })
    }

    /// Number of points.
    #[inline]
    pub fn len(&self) -> usize {
        self.coord_c.len()
    }

    /// Always false for a generated axis.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.coord_c.is_empty()
    }

    /// Cell-center coordinates in km.
    pub fn center_km(&self) -> Array1<f64> {
        &self.coord_c / M_PER_KM
    }

    /// Cell-face coordinates in km.
    pub fn face_km(&self) -> Array1<f64> {
        &self.coord_f / M_PER_KM
    }

    /// Metadata of the coordinate fields.
    pub fn coordinate_attributes(&self) -> Attributes {
        let long_name = format!("{}-coordinate in Cartesian system", self.axis.dim());
        attributes([("units", "km"), ("long_name", long_name.as_str())])
    }

    /// Metadata of the spacing fields.
    pub fn spacing_attributes(&self) -> Attributes {
        let long_name = format!("{}-axis spacing", self.axis.dim());
        attributes([("units", "m"), ("long_name", long_name.as_str())])
    }
}

/// Per-cell spacing after checking the spacing/count pairing.
fn resolve_spacing(
    axis: Axis,
    spacing: &AxisSpacing,
    count: Option<usize>,
) -> Result<Array1<f64>, GridError> {
    match (spacing, count) {
        (AxisSpacing::Uniform(s), Some(n)) if n > 0 => Ok(Array1::from_elem(n, *s)),
        (AxisSpacing::Variable(d), None) if !d.is_empty() => Ok(Array1::from_vec(d.clone())),
        (AxisSpacing::Variable(d), None) if d.is_empty() => Err(GridError::InvalidArgument {
            axis,
            reason: format!("`{}` must not be an empty vector", axis.spacing_name()),
        }),
        _ => Err(GridError::count_pairing(axis)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TOL: f64 = 1e-9;

    #[test]
    fn test_vortex_parent_axis() {
        let f = AxisFields::generate(Axis::X, &AxisSpacing::Uniform(30_000.0), Some(63)).unwrap();

        assert_eq!(f.len(), 63);
        assert_eq!(f.coord_c[0], -930_000.0);
        assert_eq!(f.coord_c[31], 0.0);
        assert_eq!(f.coord_c[62], 930_000.0);
        for k in 1..63 {
            assert!((f.coord_c[k] - f.coord_c[k - 1] - 30_000.0).abs() < TOL);
        }

        let km = f.center_km();
        assert_eq!(km[0], -930.0);
        assert_eq!(km[62], 930.0);
    }

    #[test]
    fn test_faces_between_centers() {
        let f = AxisFields::generate(Axis::Y, &AxisSpacing::Uniform(10.0), Some(5)).unwrap();

        for k in 0..4 {
            assert!(f.coord_f[k] > f.coord_c[k]);
            assert!(f.coord_f[k] < f.coord_c[k + 1]);
        }
        assert!((f.coord_f[4] - (f.coord_c[4] + 5.0)).abs() < TOL);
        assert!(f.delta_f.iter().all(|&d| (d - 10.0).abs() < TOL));
    }

    #[test]
    fn test_single_point_axis() {
        let f = AxisFields::generate(Axis::X, &AxisSpacing::Uniform(100.0), Some(1)).unwrap();

        assert_eq!(f.coord_c.to_vec(), vec![0.0]);
        assert_eq!(f.coord_f.to_vec(), vec![50.0]);
        assert_eq!(f.delta_f.to_vec(), vec![100.0]);
    }

    #[test]
    fn test_variable_spacing() {
        let d = vec![1.0, 2.0, 3.0, 2.0, 1.0];
        let f = AxisFields::generate(Axis::X, &AxisSpacing::Variable(d.clone()), None).unwrap();

        assert_eq!(f.len(), 5);
        assert_eq!(f.delta_c.to_vec(), d);
        // Differences of centers reproduce the spacing from the second cell on
        for k in 1..5 {
            assert!((f.delta_f[k - 1] - d[k]).abs() < TOL);
        }
        assert_eq!(f.delta_f[4], 1.0);
        assert!((f.coord_f[4] - (f.coord_c[4] + 0.5)).abs() < TOL);
    }

    #[test]
    fn test_uniform_vector_matches_scalar() {
        let scalar = AxisFields::generate(Axis::X, &AxisSpacing::Uniform(2.5), Some(7)).unwrap();
        let vector =
            AxisFields::generate(Axis::X, &AxisSpacing::Variable(vec![2.5; 7]), None).unwrap();

        for k in 0..7 {
            assert!((scalar.coord_c[k] - vector.coord_c[k]).abs() < TOL);
            assert!((scalar.coord_f[k] - vector.coord_f[k]).abs() < TOL);
        }
    }

    #[test]
    fn test_vector_with_count_rejected() {
        let err = AxisFields::generate(Axis::Y, &AxisSpacing::Variable(vec![1.0, 1.0]), Some(2))
            .unwrap_err();
        assert_eq!(err.axis(), Axis::Y);
        assert!(err.to_string().contains("jpjglo"));
    }

    #[test]
    fn test_scalar_without_count_rejected() {
        let err = AxisFields::generate(Axis::X, &AxisSpacing::Uniform(1.0), None).unwrap_err();
        assert_eq!(err, GridError::count_pairing(Axis::X));

        let err = AxisFields::generate(Axis::X, &AxisSpacing::Uniform(1.0), Some(0)).unwrap_err();
        assert_eq!(err.axis(), Axis::X);
    }

    #[test]
    fn test_empty_vector_rejected() {
        let err = AxisFields::generate(Axis::X, &AxisSpacing::Variable(vec![]), None).unwrap_err();
        assert!(err.to_string().contains("empty"));
    }

    #[test]
    fn test_attributes() {
        let f = AxisFields::generate(Axis::Y, &AxisSpacing::Uniform(1.0), Some(3)).unwrap();
        let c = f.coordinate_attributes();
        assert_eq!(c["units"], "km");
        assert_eq!(c["long_name"], "y-coordinate in Cartesian system");
        let s = f.spacing_attributes();
        assert_eq!(s["units"], "m");
        assert_eq!(s["long_name"], "y-axis spacing");
    }
}
