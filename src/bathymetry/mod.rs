//! Idealized bathymetry generation.
//!
//! Provides depth fields co-registered with the T-points of a generated grid:
//! - Flat bottom
//! - Gaussian seamount
//! - Flat bottom derived from an existing coordinates dataset

mod generator;
pub mod profiles;

pub use generator::{BATHYMETRY_VAR, Bathymetry, BathymetryDataset, flat_from_coordinates};
pub use profiles::Seamount;
