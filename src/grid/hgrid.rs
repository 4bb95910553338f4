//! 2D horizontal grid of the idealized Cartesian domain.
//!
//! [`generate_hgrid`] builds the 1D axis fields, then broadcasts them over
//! the `(y, x)` plane. The result holds, per axis, the nine NEMO-named
//! fields of a `coordinates.nc` file:
//!
//! | x-axis              | y-axis              | source              |
//! |---------------------|---------------------|---------------------|
//! | nav_lon glamt glamv | nav_lat gphit gphiu | cell centers (km)   |
//! | glamu glamf         | gphiv gphif         | cell faces (km)     |
//! | e1t e1v             | e2t e2u             | center spacing (m)  |
//! | e1u e1f             | e2v e2f             | face spacing (m)    |
//!
//! # Example
//!
//! ```
//! use domcfg_rs::grid::generate_hgrid;
//!
//! let grid = generate_hgrid(30_000.0, 30_000.0, Some(63), Some(63), None).unwrap();
//! assert_eq!(grid.shape(), (63, 63));
//! assert_eq!(grid.t_point(31, 31), Some((0.0, 0.0)));
//! ```

use std::num::NonZeroUsize;

use log::debug;
use ndarray::{Array1, Array2, s};
#[cfg(feature = "parallel")]
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use super::staggering::{FieldSource, axis_layout};
use super::{AxisFields, GridError};
use crate::dataset::{Dataset, Variable};
use crate::types::{Axis, AxisSpacing, Bounds2D, Chunks2D};

/// Parameters of [`generate_hgrid`] bundled for configuration files.
///
/// # Example
///
/// ```
/// use domcfg_rs::grid::GridSpec;
/// use domcfg_rs::types::Chunks2D;
///
/// let spec = GridSpec::uniform(10_000.0, 10_000.0, 65, 65).with_chunks(Chunks2D::square(16));
/// let grid = spec.generate().unwrap();
/// assert_eq!(grid.chunks(), Some(Chunks2D::square(16)));
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GridSpec {
    /// Spacing along x (m)
    pub ppe1_m: AxisSpacing,
    /// Spacing along y (m)
    pub ppe2_m: AxisSpacing,
    /// Point count along x (uniform spacing only)
    #[serde(default)]
    pub jpiglo: Option<usize>,
    /// Point count along y (uniform spacing only)
    #[serde(default)]
    pub jpjglo: Option<usize>,
    /// Optional chunking of the 2D fields
    #[serde(default)]
    pub chunks: Option<Chunks2D>,
}

impl GridSpec {
    /// Uniform spacing with explicit point counts.
    pub fn uniform(ppe1_m: f64, ppe2_m: f64, jpiglo: usize, jpjglo: usize) -> Self {
        Self {
            ppe1_m: ppe1_m.into(),
            ppe2_m: ppe2_m.into(),
            jpiglo: Some(jpiglo),
            jpjglo: Some(jpjglo),
            chunks: None,
        }
    }

    /// Per-cell spacing vectors; counts are implied.
    pub fn variable(ppe1_m: Vec<f64>, ppe2_m: Vec<f64>) -> Self {
        Self {
            ppe1_m: ppe1_m.into(),
            ppe2_m: ppe2_m.into(),
            jpiglo: None,
            jpjglo: None,
            chunks: None,
        }
    }

    /// Set the chunking of the 2D fields.
    pub fn with_chunks(mut self, chunks: Chunks2D) -> Self {
        self.chunks = Some(chunks);
        self
    }

    /// Refine by integer factors: spacing divided, counts replaced.
    ///
    /// Used for nested child grids sharing the parent's center.
    pub fn refined(
        &self,
        refx: NonZeroUsize,
        refy: NonZeroUsize,
        jpiglo: usize,
        jpjglo: usize,
    ) -> Self {
        Self {
            ppe1_m: self.ppe1_m.refined(refx),
            ppe2_m: self.ppe2_m.refined(refy),
            jpiglo: (!self.ppe1_m.is_vector()).then_some(jpiglo),
            jpjglo: (!self.ppe2_m.is_vector()).then_some(jpjglo),
            chunks: self.chunks,
        }
    }

    /// Run [`generate_hgrid`] with these parameters.
    pub fn generate(&self) -> Result<HorizontalGrid, GridError> {
        generate_hgrid(
            self.ppe1_m.clone(),
            self.ppe2_m.clone(),
            self.jpiglo,
            self.jpjglo,
            self.chunks,
        )
    }
}

/// Broadcast 2D versions of one axis' 1D fields.
#[derive(Clone, Debug, PartialEq)]
struct AxisPlane {
    center_coord: Array2<f64>,
    face_coord: Array2<f64>,
    center_spacing: Array2<f64>,
    face_spacing: Array2<f64>,
}

impl AxisPlane {
    fn broadcast(fields: &AxisFields, shape: (usize, usize), chunks: Option<Chunks2D>) -> Self {
        let axis = fields.axis;
        Self {
            center_coord: broadcast(&fields.center_km(), axis, shape, chunks),
            face_coord: broadcast(&fields.face_km(), axis, shape, chunks),
            center_spacing: broadcast(&fields.delta_c, axis, shape, chunks),
            face_spacing: broadcast(&fields.delta_f, axis, shape, chunks),
        }
    }

    fn get(&self, source: FieldSource) -> &Array2<f64> {
        match source {
            FieldSource::CenterCoordinate => &self.center_coord,
            FieldSource::FaceCoordinate => &self.face_coord,
            FieldSource::CenterSpacing => &self.center_spacing,
            FieldSource::FaceSpacing => &self.face_spacing,
        }
    }
}

/// Horizontal coordinates and scale factors of a Cartesian C-grid.
///
/// All 2D fields have shape `(ny, nx)`; `y` varies slowest.
#[derive(Clone, Debug, PartialEq)]
pub struct HorizontalGrid {
    x: AxisFields,
    y: AxisFields,
    lon: AxisPlane,
    lat: AxisPlane,
    chunks: Option<Chunks2D>,
}

/// Generate the coordinates and spacing of a Cartesian test domain.
///
/// The grid is centred around a T-point in the middle of the domain (odd
/// sizes put that point at exactly zero).
///
/// # Arguments
/// * `ppe1_m`, `ppe2_m` - Grid spacing along x/y (m): a scalar or one value per cell
/// * `jpiglo`, `jpjglo` - Size of the x/y dimension; required for a scalar
///   spacing, forbidden for a vector
/// * `chunks` - Optional block size for evaluating the 2D fields
///
/// # Errors
/// `GridError::InvalidArgument` if, for either axis, a vector spacing comes
/// with a count or a scalar spacing comes without one.
pub fn generate_hgrid(
    ppe1_m: impl Into<AxisSpacing>,
    ppe2_m: impl Into<AxisSpacing>,
    jpiglo: Option<usize>,
    jpjglo: Option<usize>,
    chunks: Option<Chunks2D>,
) -> Result<HorizontalGrid, GridError> {
    let x = AxisFields::generate(Axis::X, &ppe1_m.into(), jpiglo)?;
    let y = AxisFields::generate(Axis::Y, &ppe2_m.into(), jpjglo)?;
    Ok(HorizontalGrid::from_axes(x, y, chunks))
}

impl HorizontalGrid {
    /// Broadcast two 1D axes into a 2D grid.
    pub fn from_axes(x: AxisFields, y: AxisFields, chunks: Option<Chunks2D>) -> Self {
        let shape = (y.len(), x.len());
        let lon = AxisPlane::broadcast(&x, shape, chunks);
        let lat = AxisPlane::broadcast(&y, shape, chunks);

        debug!(
            "Generated {}x{} horizontal grid (chunks: {})",
            shape.1,
            shape.0,
            chunks.map_or_else(|| "none".to_string(), |c| c.to_string())
        );

        Self {
            x,
            y,
            lon,
            lat,
            chunks,
        }
    }

    /// Shape `(ny, nx)`.
    #[inline]
    pub fn shape(&self) -> (usize, usize) {
        (self.y.len(), self.x.len())
    }

    /// Number of points along x.
    #[inline]
    pub fn nx(&self) -> usize {
        self.x.len()
    }

    /// Number of points along y.
    #[inline]
    pub fn ny(&self) -> usize {
        self.y.len()
    }

    /// Chunking used to evaluate the 2D fields.
    pub fn chunks(&self) -> Option<Chunks2D> {
        self.chunks
    }

    /// 1D fields of one axis.
    pub fn axis(&self, axis: Axis) -> &AxisFields {
        match axis {
            Axis::X => &self.x,
            Axis::Y => &self.y,
        }
    }

    fn plane(&self, axis: Axis) -> &AxisPlane {
        match axis {
            Axis::X => &self.lon,
            Axis::Y => &self.lat,
        }
    }

    /// T-point x-coordinate (km), the `glamt` field.
    pub fn glamt(&self) -> &Array2<f64> {
        &self.lon.center_coord
    }

    /// T-point y-coordinate (km), the `gphit` field.
    pub fn gphit(&self) -> &Array2<f64> {
        &self.lat.center_coord
    }

    /// T-point spacing along x (m), the `e1t` field.
    pub fn e1t(&self) -> &Array2<f64> {
        &self.lon.center_spacing
    }

    /// T-point spacing along y (m), the `e2t` field.
    pub fn e2t(&self) -> &Array2<f64> {
        &self.lat.center_spacing
    }

    /// Names of all 2D fields, x-axis fields first.
    pub fn field_names(&self) -> Vec<String> {
        Axis::ALL
            .into_iter()
            .flat_map(|axis| axis_layout(axis).into_iter().map(|(name, _)| name))
            .collect()
    }

    /// Named 2D field with its metadata (`glamu`, `e2f`, `nav_lat`, ...).
    pub fn field(&self, name: &str) -> Option<Variable> {
        Axis::ALL.into_iter().find_map(|axis| {
            axis_layout(axis)
                .into_iter()
                .find(|(n, _)| n == name)
                .map(|(n, source)| self.variable(axis, n, source))
        })
    }

    fn variable(&self, axis: Axis, name: String, source: FieldSource) -> Variable {
        let fields = self.axis(axis);
        let attributes = match source {
            FieldSource::CenterCoordinate | FieldSource::FaceCoordinate => {
                fields.coordinate_attributes()
            }
            FieldSource::CenterSpacing | FieldSource::FaceSpacing => fields.spacing_attributes(),
        };
        Variable::new(name, self.plane(axis).get(source).clone(), attributes)
    }

    /// T-point coordinates `(glamt, gphit)` in km at column `i`, row `j`.
    ///
    /// Returns `None` outside the grid.
    pub fn t_point(&self, i: usize, j: usize) -> Option<(f64, f64)> {
        let lon = self.glamt().get((j, i))?;
        let lat = self.gphit().get((j, i))?;
        Some((*lon, *lat))
    }

    /// Extent of the T-points (km).
    pub fn bounds(&self) -> Bounds2D {
        let (x_min, x_max) = min_max(&self.x.center_km());
        let (y_min, y_max) = min_max(&self.y.center_km());
        Bounds2D::from_extents((x_min, x_max), (y_min, y_max))
    }

    /// Equivalent of a NEMO coordinates file.
    ///
    /// Variables follow [`field_names`](Self::field_names); the `x` and `y`
    /// index coordinates carry `axis` and `long_name` attributes.
    pub fn to_dataset(&self) -> Dataset {
        let mut ds = Dataset::new(self.nx(), self.ny());
        for axis in Axis::ALL {
            for (name, source) in axis_layout(axis) {
                ds.insert_on_grid(self.variable(axis, name, source));
            }
        }
        ds
    }
}

fn min_max(values: &Array1<f64>) -> (f64, f64) {
    values
        .iter()
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &v| (lo.min(v), hi.max(v)))
}

/// Expand a 1D axis field over the `(ny, nx)` plane.
fn broadcast(
    values: &Array1<f64>,
    axis: Axis,
    shape: (usize, usize),
    chunks: Option<Chunks2D>,
) -> Array2<f64> {
    let value_at = |j: usize, i: usize| match axis {
        Axis::X => values[i],
        Axis::Y => values[j],
    };

    let Some(chunks) = chunks else {
        return Array2::from_shape_fn(shape, |(j, i)| value_at(j, i));
    };

    let mut out = Array2::zeros(shape);
    for (rows, cols, block) in evaluate_blocks(chunks, shape, &value_at) {
        out.slice_mut(s![rows, cols]).assign(&block);
    }
    out
}

type Block = (std::ops::Range<usize>, std::ops::Range<usize>, Array2<f64>);

fn fill_block(
    rows: std::ops::Range<usize>,
    cols: std::ops::Range<usize>,
    value_at: &(dyn Fn(usize, usize) -> f64 + Sync),
) -> Block {
    let block = Array2::from_shape_fn((rows.len(), cols.len()), |(dj, di)| {
        value_at(rows.start + dj, cols.start + di)
    });
    (rows, cols, block)
}

#[cfg(not(feature = "parallel"))]
fn evaluate_blocks(
    chunks: Chunks2D,
    shape: (usize, usize),
    value_at: &(dyn Fn(usize, usize) -> f64 + Sync),
) -> Vec<Block> {
    chunks
        .blocks(shape)
        .into_iter()
        .map(|(rows, cols)| fill_block(rows, cols, value_at))
        .collect()
}

#[cfg(feature = "parallel")]
fn evaluate_blocks(
    chunks: Chunks2D,
    shape: (usize, usize),
    value_at: &(dyn Fn(usize, usize) -> f64 + Sync),
) -> Vec<Block> {
    chunks
        .blocks(shape)
        .into_par_iter()
        .map(|(rows, cols)| fill_block(rows, cols, value_at))
        .collect()
}
