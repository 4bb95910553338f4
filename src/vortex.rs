//! VORTEX parent/child domain workflow.
//!
//! 1. Generate the parent grid and pick the seamount summit at the parent
//!    T-point `(i_mid, j_mid)`.
//! 2. Build seamount bathymetries on the parent and on the refined child
//!    grid, both centred on that summit.
//! 3. Write `coordinates.nc` and `seamount/bathy_meter.nc` for each level.
//!
//! The flat-bottom case is derived afterwards from the parent coordinates
//! file, see [`write_flat_bathymetry`].

use std::fs;
use std::path::PathBuf;

use log::info;
use thiserror::Error;

use crate::bathymetry::{Bathymetry, BathymetryDataset, Seamount, flat_from_coordinates};
use crate::config::VortexConfig;
use crate::dataset::{Dataset, DatasetError};
use crate::grid::{GridError, HorizontalGrid};
use crate::io::{NetCDFWriterConfig, read_dataset, write_dataset};

/// Error type for the domain workflow.
#[derive(Debug, Error)]
pub enum VortexError {
    /// Invalid grid parameters
    #[error(transparent)]
    Grid(#[from] GridError),

    /// Seamount centre index outside the parent grid
    #[error("Seamount centre ({i}, {j}) outside parent grid of {nx}x{ny} points")]
    CenterOutOfRange {
        i: usize,
        j: usize,
        nx: usize,
        ny: usize,
    },

    /// Dataset construction or file I/O failed
    #[error(transparent)]
    Dataset(#[from] DatasetError),

    /// Output directory could not be created
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Grid and seamount bathymetry of one nest level.
#[derive(Clone, Debug)]
pub struct VortexDomain {
    /// Horizontal grid (`coordinates.nc`)
    pub grid: HorizontalGrid,
    /// Seamount bathymetry (`bathy_meter.nc`)
    pub bathymetry: BathymetryDataset,
}

/// Parent and child domains sharing one seamount.
#[derive(Clone, Debug)]
pub struct VortexDomains {
    pub parent: VortexDomain,
    pub child: VortexDomain,
    /// Seamount used on both levels
    pub seamount: Seamount,
}

/// Generate the parent and child domains.
pub fn generate_domains(config: &VortexConfig) -> Result<VortexDomains, VortexError> {
    let parent_grid = config.parent.generate()?;

    let setup = &config.seamount;
    let (glamt_mid, gphit_mid) =
        parent_grid
            .t_point(setup.i_mid, setup.j_mid)
            .ok_or(VortexError::CenterOutOfRange {
                i: setup.i_mid,
                j: setup.j_mid,
                nx: parent_grid.nx(),
                ny: parent_grid.ny(),
            })?;
    let seamount = Seamount::new(glamt_mid, gphit_mid, setup.bot_max, setup.smnt_h, setup.smnt_l);
    info!(
        "Seamount centre at parent T-point ({}, {}): ({:.1} km, {:.1} km)",
        setup.i_mid, setup.j_mid, glamt_mid, gphit_mid
    );

    let parent = VortexDomain {
        bathymetry: Bathymetry::from_spec(&config.parent)?.seamount(&seamount),
        grid: parent_grid,
    };

    let child_spec = config.child_spec();
    let child = VortexDomain {
        grid: child_spec.generate()?,
        bathymetry: Bathymetry::from_spec(&child_spec)?.seamount(&seamount),
    };

    Ok(VortexDomains {
        parent,
        child,
        seamount,
    })
}

fn writer_config(config: &VortexConfig, path: PathBuf, comment: &str) -> NetCDFWriterConfig {
    let mut writer = NetCDFWriterConfig::new(path).with_comment(comment);
    if let Some(ref title) = config.title {
        writer = writer.with_title(title.as_str());
    }
    if let Some(ref institution) = config.institution {
        writer = writer.with_institution(institution.as_str());
    }
    if let Some(chunks) = config.parent.chunks {
        writer = writer.with_chunks(chunks);
    }
    writer
}

/// Write coordinates and seamount bathymetry of both levels.
pub fn write_domains(domains: &VortexDomains, config: &VortexConfig) -> Result<(), VortexError> {
    fs::create_dir_all(config.output_dir.join("seamount"))?;

    for (domain, child) in [(&domains.parent, false), (&domains.child, true)] {
        let level = if child { "child" } else { "parent" };

        let grid_comment = format!("{level} horizontal grid");
        let grid_writer = writer_config(config, config.coordinates_path(child), &grid_comment);
        write_dataset(&domain.grid.to_dataset(), &grid_writer)?;

        let bathy_comment = format!("{level} seamount bathymetry");
        let bathy_writer = writer_config(config, config.seamount_path(child), &bathy_comment);
        write_dataset(&domain.bathymetry.to_dataset(), &bathy_writer)?;
    }
    Ok(())
}

/// Flat-bottom bathymetry from the parent `coordinates.nc`.
///
/// Reads the coordinates file written by [`write_domains`], fills a field of
/// `config.flat_depth` and writes `bathy_flat.nc`.
pub fn write_flat_bathymetry(config: &VortexConfig) -> Result<Dataset, VortexError> {
    let coordinates = read_dataset(config.coordinates_path(false))?;
    let flat = flat_from_coordinates(coordinates, config.flat_depth)?;

    fs::create_dir_all(&config.output_dir)?;
    write_dataset(&flat, &writer_config(config, config.flat_path(), "flat bathymetry"))?;
    Ok(flat)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SeamountSetup;

    #[test]
    fn test_generate_vortex_domains() {
        let domains = generate_domains(&VortexConfig::default()).unwrap();

        assert_eq!(domains.parent.grid.shape(), (63, 63));
        assert_eq!(domains.child.grid.shape(), (65, 65));
        assert_eq!(domains.seamount.center_lon, -240.0);
        assert_eq!(domains.seamount.center_lat, -270.0);

        assert_eq!(domains.parent.bathymetry.depth_at(23, 22), Some(2600.0));
        assert!((domains.parent.bathymetry.min() - 2600.0).abs() < 1e-9);
    }

    #[test]
    fn test_child_shares_summit() {
        let domains = generate_domains(&VortexConfig::default()).unwrap();

        // Child T-points are 10 km apart around 0, so the parent summit is
        // also a child T-point.
        assert_eq!(domains.child.grid.t_point(8, 5), Some((-240.0, -270.0)));
        assert_eq!(domains.child.bathymetry.depth_at(8, 5), Some(2600.0));
        assert!(domains.child.bathymetry.min() >= 2600.0);

        let (lon, lat) = domains.child.grid.t_point(7, 4).unwrap();
        assert_eq!((lon, lat), (-250.0, -280.0));
        let expected = domains.seamount.depth(lon, lat);
        assert_eq!(domains.child.bathymetry.depth_at(7, 4), Some(expected));
    }

    #[test]
    fn test_center_out_of_range() {
        let config = VortexConfig::default().with_seamount(SeamountSetup {
            i_mid: 100,
            ..SeamountSetup::default()
        });
        let err = generate_domains(&config).unwrap_err();
        assert!(matches!(err, VortexError::CenterOutOfRange { i: 100, .. }));
    }
}
