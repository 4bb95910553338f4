//! VORTEX seamount domains.
//!
//! Generates the parent (63x63, 30 km) and child (65x65, 10 km) grids and a
//! Gaussian seamount centred on parent T-point (23, 22), then writes:
//!
//! - `coordinates.nc`, `1_coordinates.nc`
//! - `seamount/bathy_meter.nc`, `seamount/1_bathy_meter.nc`
//!
//! ## Run
//!
//! ```bash
//! cargo run --features netcdf --example create_domain_seamount [config.toml]
//! ```
//!
//! Without a config file the VORTEX defaults are used and output goes to
//! `./vortex_input_files`.

use std::process::ExitCode;

use domcfg_rs::logging::init_logging;
use domcfg_rs::{VortexConfig, generate_domains, write_domains};

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let config = match std::env::args().nth(1) {
        Some(path) => VortexConfig::from_file(path)?,
        None => VortexConfig::default(),
    };

    println!("VORTEX seamount domains");
    println!("=======================");
    println!("Parent: {:?} x {:?} points", config.parent.jpiglo, config.parent.jpjglo);
    println!(
        "Child:  {} x {} points, refinement {}x{}",
        config.child.jpiglo, config.child.jpjglo, config.child.refx, config.child.refy
    );
    println!(
        "Seamount: H_max = {} m, h = {} m, L = {} km at ({}, {})",
        config.seamount.bot_max,
        config.seamount.smnt_h,
        config.seamount.smnt_l,
        config.seamount.i_mid,
        config.seamount.j_mid
    );
    println!("Output: {}", config.output_dir.display());
    println!();

    let domains = generate_domains(&config)?;
    for (name, domain) in [("Parent", &domains.parent), ("Child", &domains.child)] {
        println!(
            "{name}: extent {} km, depth [{:.1}, {:.1}] m",
            domain.grid.bounds(),
            domain.bathymetry.min(),
            domain.bathymetry.max()
        );
    }

    write_domains(&domains, &config)?;
    println!();
    println!("Done.");
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
