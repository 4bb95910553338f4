//! Bathymetry datasets over a generated horizontal grid.

use log::debug;
use ndarray::{Array2, Zip};

use super::profiles::{self, Seamount};
use crate::dataset::{Dataset, DatasetError, Variable, attributes};
use crate::grid::{GridError, GridSpec, HorizontalGrid, generate_hgrid};
use crate::types::{AxisSpacing, Chunks2D};

/// Name of the depth variable in bathymetry files.
pub const BATHYMETRY_VAR: &str = "Bathymetry";

/// Variables kept in a `bathy_meter`-style file besides the depth.
const BATHY_METER_COORDS: [&str; 2] = ["nav_lon", "nav_lat"];

/// Generator of idealized test bathymetries.
///
/// Owns the horizontal grid the depth fields are evaluated on.
///
/// # Example
///
/// ```
/// use domcfg_rs::bathymetry::Bathymetry;
///
/// let bathy = Bathymetry::new(30_000.0, 30_000.0, Some(63), Some(63), None).unwrap();
/// let seamount = bathy.sea_mount(0.0, 0.0, 5000.0, 2400.0, 80.0);
/// assert_eq!(seamount.depth_at(31, 31), Some(2600.0));
/// ```
#[derive(Clone, Debug)]
pub struct Bathymetry {
    grid: HorizontalGrid,
}

impl Bathymetry {
    /// Build the grid with [`generate_hgrid`] and wrap it.
    pub fn new(
        ppe1_m: impl Into<AxisSpacing>,
        ppe2_m: impl Into<AxisSpacing>,
        jpiglo: Option<usize>,
        jpjglo: Option<usize>,
        chunks: Option<Chunks2D>,
    ) -> Result<Self, GridError> {
        Ok(Self::from_grid(generate_hgrid(
            ppe1_m, ppe2_m, jpiglo, jpjglo, chunks,
        )?))
    }

    /// Build the grid from bundled parameters.
    pub fn from_spec(spec: &GridSpec) -> Result<Self, GridError> {
        Ok(Self::from_grid(spec.generate()?))
    }

    /// Use an existing grid.
    pub fn from_grid(grid: HorizontalGrid) -> Self {
        Self { grid }
    }

    /// The grid depths are evaluated on.
    pub fn grid(&self) -> &HorizontalGrid {
        &self.grid
    }

    /// Flat bottom case.
    ///
    /// # Arguments
    /// * `depth` - Bottom depth (m)
    pub fn flat(&self, depth: f64) -> BathymetryDataset {
        let depth_field = self.evaluate(|lon, lat| profiles::flat(lon, lat, depth));
        BathymetryDataset::new(self.grid.clone(), depth_field)
    }

    /// Gaussian seamount case as in Ezer et al. (2002).
    ///
    /// # Arguments
    /// * `glamt_mid`, `gphit_mid` - Coordinates of the seamount summit (km)
    /// * `bot_max` - Maximum bottom depth (m)
    /// * `smnt_h` - Height of the seamount (m)
    /// * `smnt_l` - Width of the seamount (km)
    pub fn sea_mount(
        &self,
        glamt_mid: f64,
        gphit_mid: f64,
        bot_max: f64,
        smnt_h: f64,
        smnt_l: f64,
    ) -> BathymetryDataset {
        self.seamount(&Seamount::new(glamt_mid, gphit_mid, bot_max, smnt_h, smnt_l))
    }

    /// Gaussian seamount from bundled parameters.
    pub fn seamount(&self, seamount: &Seamount) -> BathymetryDataset {
        let depth_field = self.evaluate(|lon, lat| profiles::seamount(lon, lat, seamount));
        BathymetryDataset::new(self.grid.clone(), depth_field)
    }

    fn evaluate(&self, profile: impl Fn(f64, f64) -> f64) -> Array2<f64> {
        Zip::from(self.grid.glamt())
            .and(self.grid.gphit())
            .map_collect(|&lon, &lat| profile(lon, lat))
    }
}

/// A depth field together with the grid it is co-registered with.
#[derive(Clone, Debug)]
pub struct BathymetryDataset {
    grid: HorizontalGrid,
    depth: Array2<f64>,
}

impl BathymetryDataset {
    fn new(grid: HorizontalGrid, depth: Array2<f64>) -> Self {
        let result = Self { grid, depth };
        debug!(
            "Bathymetry on {}x{} grid: depth range [{:.2}, {:.2}] m",
            result.grid.nx(),
            result.grid.ny(),
            result.min(),
            result.max()
        );
        result
    }

    /// Depth field (m), shape `(ny, nx)`.
    pub fn depth(&self) -> &Array2<f64> {
        &self.depth
    }

    /// Depth at column `i`, row `j`.
    pub fn depth_at(&self, i: usize, j: usize) -> Option<f64> {
        self.depth.get((j, i)).copied()
    }

    /// The underlying grid.
    pub fn grid(&self) -> &HorizontalGrid {
        &self.grid
    }

    /// Shallowest depth.
    pub fn min(&self) -> f64 {
        self.depth.iter().cloned().fold(f64::INFINITY, f64::min)
    }

    /// Deepest depth.
    pub fn max(&self) -> f64 {
        self.depth.iter().cloned().fold(f64::NEG_INFINITY, f64::max)
    }

    /// The depth as a dataset variable.
    pub fn variable(&self) -> Variable {
        depth_variable(self.depth.clone())
    }

    /// Grid dataset with the `Bathymetry` variable appended.
    pub fn to_dataset(&self) -> Dataset {
        let mut ds = self.grid.to_dataset();
        ds.insert_on_grid(self.variable());
        ds
    }

    /// `bathy_meter` layout: `nav_lon`, `nav_lat` and `Bathymetry` only.
    pub fn to_bathy_meter_dataset(&self) -> Dataset {
        bathy_meter_layout(self.to_dataset())
    }
}

fn depth_variable(depth: Array2<f64>) -> Variable {
    Variable::new(
        BATHYMETRY_VAR,
        depth,
        attributes([("units", "m"), ("long_name", "sea floor depth below mean sea level")]),
    )
}

fn bathy_meter_layout(ds: Dataset) -> Dataset {
    let mut keep: Vec<&str> = BATHY_METER_COORDS.to_vec();
    keep.push(BATHYMETRY_VAR);
    ds.select_variables(&keep)
}

/// Flat bathymetry over an existing coordinates dataset.
///
/// Takes the shape from `e1t`, fills it with `depth` and keeps only the
/// `bathy_meter` variables (`nav_lon`, `nav_lat`, `Bathymetry`).
pub fn flat_from_coordinates(coordinates: Dataset, depth: f64) -> Result<Dataset, DatasetError> {
    let e1t = coordinates.require("e1t")?;
    let field = e1t.data.mapv(|_| depth);

    let mut ds = coordinates;
    ds.insert_variable(depth_variable(field))?;
    debug!("Flat bathymetry of {} m on {:?} grid", depth, ds.shape());
    Ok(bathy_meter_layout(ds))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vortex_parent() -> Bathymetry {
        Bathymetry::new(30_000.0, 30_000.0, Some(63), Some(63), None).unwrap()
    }

    #[test]
    fn test_flat_is_constant() {
        let flat = vortex_parent().flat(5000.0);
        assert_eq!(flat.depth().dim(), (63, 63));
        assert!(flat.depth().iter().all(|&d| d == 5000.0));
        assert_eq!(flat.min(), flat.max());
    }

    #[test]
    fn test_seamount_center_and_corner() {
        let bathy = vortex_parent();
        let (lon, lat) = bathy.grid().t_point(23, 22).unwrap();
        let ds = bathy.sea_mount(lon, lat, 5000.0, 2400.0, 80.0);

        assert_eq!(ds.depth_at(23, 22), Some(2600.0));
        assert_eq!(ds.min(), 2600.0);
        assert!((ds.depth_at(62, 62).unwrap() - 5000.0).abs() < 1e-6);
        assert!(ds.max() <= 5000.0);
    }

    #[test]
    fn test_sea_mount_matches_seamount() {
        let bathy = vortex_parent();
        let a = bathy.sea_mount(-255.0, -285.0, 5000.0, 2400.0, 80.0);
        let b = bathy.seamount(&Seamount::new(-255.0, -285.0, 5000.0, 2400.0, 80.0));
        assert_eq!(a.depth(), b.depth());
    }

    #[test]
    fn test_dataset_has_bathymetry() {
        let bathy = Bathymetry::new(1000.0, 1000.0, Some(3), Some(5), None).unwrap();
        let ds = bathy.flat(42.0).to_dataset();

        assert_eq!(ds.variables().len(), 19);
        let b = ds.require(BATHYMETRY_VAR).unwrap();
        assert_eq!(b.shape(), (5, 3));
        assert_eq!(b.attribute("units"), Some("m"));
    }

    #[test]
    fn test_bathy_meter_layout() {
        let bathy = Bathymetry::new(1000.0, 1000.0, Some(3), Some(5), None).unwrap();
        let ds = bathy.flat(42.0).to_bathy_meter_dataset();
        assert_eq!(ds.variable_names(), vec!["nav_lon", "nav_lat", "Bathymetry"]);
        assert_eq!(ds.coordinates().len(), 2);
    }

    #[test]
    fn test_flat_from_coordinates() {
        let grid = generate_hgrid(1000.0, 1000.0, Some(4), Some(2), None).unwrap();
        let ds = flat_from_coordinates(grid.to_dataset(), 5000.0).unwrap();

        assert_eq!(ds.variable_names(), vec!["nav_lon", "nav_lat", "Bathymetry"]);
        let b = ds.require(BATHYMETRY_VAR).unwrap();
        assert!(b.data.iter().all(|&d| d == 5000.0));
        assert_eq!(b.shape(), (2, 4));
    }

    #[test]
    fn test_flat_from_coordinates_requires_e1t() {
        let ds = Dataset::new(2, 2);
        let err = flat_from_coordinates(ds, 1.0).unwrap_err();
        assert!(matches!(err, DatasetError::MissingVariable(ref v) if v == "e1t"));
    }
}
