//! NetCDF I/O for grid and bathymetry datasets.
//!
//! Writes the NEMO input files of the idealized domains (`coordinates.nc`,
//! `bathy_meter.nc`) and reads them back.
//!
//! # Layout
//!
//! - Dimensions `y` and `x`
//! - Integer index variables `x(x)` and `y(y)` with `axis` / `long_name`
//! - `f64` variables `name(y, x)` with their string attributes
//! - Global attributes: `Conventions`, `title`, `institution`, `source`,
//!   `comment`, `history`, plus the dataset's own
//!
//! # Example
//!
//! ```rust,ignore
//! use domcfg_rs::grid::generate_hgrid;
//! use domcfg_rs::io::{NetCDFWriterConfig, write_netcdf};
//!
//! let grid = generate_hgrid(30_000.0, 30_000.0, Some(63), Some(63), None)?;
//! let config = NetCDFWriterConfig::new("coordinates.nc").with_title("VORTEX parent grid");
//! write_netcdf(&grid.to_dataset(), &config)?;
//! ```

use std::path::{Path, PathBuf};

#[cfg(feature = "netcdf")]
use chrono::Utc;
#[cfg(feature = "netcdf")]
use log::{info, warn};

#[cfg(feature = "netcdf")]
use crate::dataset::{Attributes, Dataset, DatasetError, IndexCoordinate, Variable};
use crate::types::Chunks2D;

/// Configuration for NetCDF output.
#[derive(Debug, Clone)]
pub struct NetCDFWriterConfig {
    /// Output file path
    pub path: PathBuf,
    /// Title attribute
    pub title: Option<String>,
    /// Institution attribute
    pub institution: Option<String>,
    /// Source attribute (generator name/version)
    pub source: Option<String>,
    /// Comment attribute
    pub comment: Option<String>,
    /// Deflate level (0-9, 0=none)
    pub compression_level: u8,
    /// Variable chunking; `None` lets the library decide
    pub chunks: Option<Chunks2D>,
}

impl NetCDFWriterConfig {
    /// Create a new configuration with the given output path.
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            title: None,
            institution: None,
            source: Some(format!("domcfg-rs {}", env!("CARGO_PKG_VERSION"))),
            comment: None,
            compression_level: 0,
            chunks: None,
        }
    }

    /// Set the title attribute.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Set the institution attribute.
    pub fn with_institution(mut self, institution: impl Into<String>) -> Self {
        self.institution = Some(institution.into());
        self
    }

    /// Set the source attribute.
    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.source = Some(source.into());
        self
    }

    /// Set the comment attribute.
    pub fn with_comment(mut self, comment: impl Into<String>) -> Self {
        self.comment = Some(comment.into());
        self
    }

    /// Set compression level (0-9).
    pub fn with_compression(mut self, level: u8) -> Self {
        self.compression_level = level.min(9);
        self
    }

    /// Chunk the 2D variables.
    pub fn with_chunks(mut self, chunks: Chunks2D) -> Self {
        self.chunks = Some(chunks);
        self
    }
}

/// Write a dataset to a NetCDF file.
#[cfg(feature = "netcdf")]
pub fn write_netcdf(dataset: &Dataset, config: &NetCDFWriterConfig) -> Result<(), DatasetError> {
    let mut file = netcdf::create(&config.path)?;
    let (ny, nx) = dataset.shape();

    file.add_dimension("y", ny)?;
    file.add_dimension("x", nx)?;

    for coord in dataset.coordinates() {
        let mut var = file.add_variable::<i64>(&coord.name, &[coord.name.as_str()])?;
        for (key, value) in &coord.attributes {
            var.put_attribute(key, value.as_str())?;
        }
        var.put_values(&coord.values(), ..)?;
    }

    for variable in dataset.variables() {
        let mut var = file.add_variable::<f64>(&variable.name, &["y", "x"])?;
        if config.compression_level > 0 {
            var.set_compression(i32::from(config.compression_level), true)?;
        }
        if let Some(chunks) = config.chunks {
            let (cy, cx) = chunks.clipped((ny, nx));
            var.set_chunking(&[cy, cx])?;
        }
        for (key, value) in &variable.attributes {
            var.put_attribute(key, value.as_str())?;
        }
        // Standard layout is guaranteed for arrays built by this crate
        let values: Vec<f64> = variable.data.iter().copied().collect();
        var.put_values(&values, ..)?;
    }

    // Writer settings take precedence over attributes carried by the dataset
    for (key, value) in dataset.global_attributes() {
        file.add_attribute(key, value.as_str())?;
    }
    file.add_attribute("Conventions", "CF-1.8")?;
    if let Some(ref title) = config.title {
        file.add_attribute("title", title.as_str())?;
    }
    if let Some(ref institution) = config.institution {
        file.add_attribute("institution", institution.as_str())?;
    }
    if let Some(ref source) = config.source {
        file.add_attribute("source", source.as_str())?;
    }
    if let Some(ref comment) = config.comment {
        file.add_attribute("comment", comment.as_str())?;
    }

    let now = Utc::now();
    file.add_attribute(
        "history",
        format!("{}: Created by domcfg-rs", now.format("%Y-%m-%d %H:%M:%S UTC")).as_str(),
    )?;

    info!(
        "Wrote {} variables on {}x{} grid to {}",
        dataset.variables().len(),
        nx,
        ny,
        config.path.display()
    );
    Ok(())
}

/// Read a dataset written by [`write_netcdf`] (or any file with `y`/`x`
/// dimensions and 2D variables).
///
/// Variables that are not 2D over `(y, x)` are skipped.
#[cfg(feature = "netcdf")]
pub fn read_netcdf(path: impl AsRef<Path>) -> Result<Dataset, DatasetError> {
    let file = netcdf::open(path)?;

    let mut coordinates = Vec::new();
    for var in file.variables() {
        let name = var.name();
        let dims = var.dimensions();
        if dims.len() == 1 && dims[0].name() == name {
            coordinates.push(IndexCoordinate {
                name,
                len: dims[0].len(),
                attributes: read_attributes(var.attributes()),
            });
        }
    }

    let mut dataset = Dataset::with_coordinates(coordinates)?;
    let shape = dataset.shape();

    for var in file.variables() {
        let name = var.name();
        let dim_names: Vec<String> = var.dimensions().iter().map(|d| d.name()).collect();
        if dim_names.len() == 1 && dim_names[0] == name {
            continue;
        }
        if dim_names != ["y", "x"] {
            warn!("Skipping variable '{}' with dimensions {:?}", name, dim_names);
            continue;
        }

        let values: Vec<f64> = var.get_values(..)?;
        let data = ndarray::Array2::from_shape_vec(shape, values).map_err(|_| {
            DatasetError::ShapeMismatch {
                name: name.clone(),
                expected: shape,
                found: (var.dimensions()[0].len(), var.dimensions()[1].len()),
            }
        })?;
        dataset.insert_variable(Variable::new(name, data, read_attributes(var.attributes())))?;
    }

    for attr in file.attributes() {
        if let Ok(netcdf::AttributeValue::Str(value)) = attr.value() {
            dataset.set_attribute(attr.name(), value);
        }
    }

    Ok(dataset)
}

/// String-valued attributes; other types are ignored.
#[cfg(feature = "netcdf")]
fn read_attributes<'a>(attrs: impl Iterator<Item = netcdf::Attribute<'a>>) -> Attributes {
    attrs
        .filter_map(|attr| match attr.value() {
            Ok(netcdf::AttributeValue::Str(value)) => Some((attr.name().to_string(), value)),
            _ => None,
        })
        .collect()
}
