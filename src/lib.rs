//! # domcfg-rs
//!
//! Idealized ocean-model test domains for NEMO-style Cartesian configurations.
//!
//! This crate provides:
//! - Horizontal grid generation (cell-center/cell-face coordinates and
//!   scale factors on a staggered C-grid, centred on a T-point)
//! - Idealized bathymetries (flat bottom, Gaussian seamount)
//! - A labeled dataset container with NetCDF and JSON serialization
//! - The VORTEX parent/child workflow and its configuration
//!
//! # Example
//!
//! ```
//! use domcfg_rs::{Bathymetry, generate_hgrid};
//!
//! let grid = generate_hgrid(30_000.0, 30_000.0, Some(63), Some(63), None).unwrap();
//! let (lon, lat) = grid.t_point(23, 22).unwrap();
//!
//! let bathy = Bathymetry::new(30_000.0, 30_000.0, Some(63), Some(63), None).unwrap();
//! let seamount = bathy.sea_mount(lon, lat, 5000.0, 2400.0, 80.0);
//! assert_eq!(seamount.depth_at(23, 22), Some(2600.0));
//! ```

pub mod bathymetry;
pub mod config;
pub mod dataset;
pub mod grid;
pub mod io;
pub mod logging;
pub mod types;
pub mod vortex;

// Re-export main types for convenience
pub use bathymetry::{Bathymetry, BathymetryDataset, Seamount, flat_from_coordinates};
pub use config::{ChildGrid, ConfigError, SeamountSetup, VortexConfig};
pub use dataset::{Dataset, DatasetError, IndexCoordinate, Variable};
pub use grid::{AxisFields, GridError, GridSpec, HorizontalGrid, generate_hgrid};
pub use io::{NetCDFWriterConfig, read_dataset, read_json, write_dataset, write_json};
#[cfg(feature = "netcdf")]
pub use io::{read_netcdf, write_netcdf};
pub use types::{Axis, AxisSpacing, Bounds2D, Chunks2D};
pub use vortex::{
    VortexDomain, VortexDomains, VortexError, generate_domains, write_domains,
    write_flat_bathymetry,
};
