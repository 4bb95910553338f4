//! Dataset file formats.
//!
//! This module provides:
//! - **NetCDF**: NEMO-compatible `coordinates.nc` / `bathy_meter.nc` files
//!   (requires the `netcdf` feature)
//! - **JSON**: a self-describing, dependency-free dump of a dataset
//!
//! [`write_dataset`] and [`read_dataset`] pick the format from the file
//! extension (`.nc` or `.json`).

mod json_io;
mod netcdf_io;

use std::path::Path;

use crate::dataset::{Dataset, DatasetError};

pub use json_io::{read_json, write_json};
pub use netcdf_io::NetCDFWriterConfig;
#[cfg(feature = "netcdf")]
pub use netcdf_io::{read_netcdf, write_netcdf};

/// Supported on-disk formats.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DatasetFormat {
    NetCDF,
    Json,
}

impl DatasetFormat {
    /// Format implied by a path's extension.
    pub fn from_path(path: &Path) -> Option<Self> {
        match path.extension()?.to_str()? {
            "nc" | "nc4" => Some(DatasetFormat::NetCDF),
            "json" => Some(DatasetFormat::Json),
            _ => None,
        }
    }
}

/// Write a dataset, choosing the format from the path in `config`.
pub fn write_dataset(dataset: &Dataset, config: &NetCDFWriterConfig) -> Result<(), DatasetError> {
    match DatasetFormat::from_path(&config.path) {
        Some(DatasetFormat::Json) => write_json(dataset, &config.path),
        #[cfg(feature = "netcdf")]
        Some(DatasetFormat::NetCDF) => write_netcdf(dataset, config),
        _ => Err(unsupported(&config.path)),
    }
}

/// Read a dataset, choosing the format from the path.
pub fn read_dataset(path: impl AsRef<Path>) -> Result<Dataset, DatasetError> {
    let path = path.as_ref();
    match DatasetFormat::from_path(path) {
        Some(DatasetFormat::Json) => read_json(path),
        #[cfg(feature = "netcdf")]
        Some(DatasetFormat::NetCDF) => read_netcdf(path),
        _ => Err(unsupported(path)),
    }
}

fn unsupported(path: &Path) -> DatasetError {
    DatasetError::Io(std::io::Error::new(
        std::io::ErrorKind::Unsupported,
        format!("no enabled dataset format for {}", path.display()),
    ))
}
