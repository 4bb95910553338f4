//! Flat-bottom bathymetry for the VORTEX parent grid.
//!
//! Loads `coordinates.nc` (written by `create_domain_seamount`), fills a
//! 5000 m deep flat bottom on its T-points and writes `bathy_flat.nc` with
//! only `nav_lon`, `nav_lat` and `Bathymetry`.
//!
//! ## Run
//!
//! ```bash
//! cargo run --features netcdf --example bathy_flat [config.toml]
//! ```

use std::process::ExitCode;

use domcfg_rs::logging::init_logging;
use domcfg_rs::{VortexConfig, write_flat_bathymetry};

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let config = match std::env::args().nth(1) {
        Some(path) => VortexConfig::from_file(path)?,
        None => VortexConfig::default(),
    };

    println!("Input:  {}", config.coordinates_path(false).display());
    println!("Output: {}", config.flat_path().display());
    println!("Depth:  {} m", config.flat_depth);

    let ds = write_flat_bathymetry(&config)?;
    let (ny, nx) = ds.shape();
    println!("Wrote {} variables on {}x{} grid", ds.variables().len(), nx, ny);
    Ok(())
}

fn main() -> ExitCode {
    init_logging(None);
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{e}");
            ExitCode::FAILURE
        }
    }
}
