//! Configuration of the VORTEX idealized domains.
//!
//! Defaults reproduce the VORTEX nesting test case: a 63x63 parent grid at
//! 30 km, a 65x65 child refined 3x3, and a seamount 2400 m high, 80 km wide
//! on a 5000 m deep bottom. Any field can be overridden from TOML:
//!
//! ```toml
//! output_dir = "vortex_input_files"
//! extension = "nc"     # or "json"
//! flat_depth = 5000.0
//!
//! [parent]
//! ppe1_m = 30000.0
//! ppe2_m = 30000.0
//! jpiglo = 63
//! jpjglo = 63
//!
//! [child]
//! refx = 3
//! refy = 3
//! jpiglo = 65
//! jpjglo = 65
//!
//! [seamount]
//! bot_max = 5000.0
//! smnt_h = 2400.0
//! smnt_l = 80.0
//! i_mid = 23
//! j_mid = 22
//! ```

use std::num::NonZeroUsize;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::grid::GridSpec;

/// Error type for configuration loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// File could not be read.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Invalid TOML or field types.
    #[error("Parse error: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Refinement factor of the VORTEX child grid.
const VORTEX_REFINEMENT: NonZeroUsize = match NonZeroUsize::new(3) {
    Some(n) => n,
    None => panic!("refinement factor must be positive"),
};

/// Child (nested) grid relative to the parent.
///
/// Zero refinement factors are rejected when parsing.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChildGrid {
    /// Refinement factor along x
    pub refx: NonZeroUsize,
    /// Refinement factor along y
    pub refy: NonZeroUsize,
    /// Points along x
    pub jpiglo: usize,
    /// Points along y
    pub jpjglo: usize,
}

impl Default for ChildGrid {
    fn default() -> Self {
        Self {
            refx: VORTEX_REFINEMENT,
            refy: VORTEX_REFINEMENT,
            jpiglo: 65,
            jpjglo: 65,
        }
    }
}

/// Seamount shape and the parent T-point it is centred on.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SeamountSetup {
    /// Maximum depth of the domain (m)
    pub bot_max: f64,
    /// Height of the seamount (m)
    pub smnt_h: f64,
    /// Width of the seamount (km)
    pub smnt_l: f64,
    /// i-index of the seamount centre in the parent grid
    pub i_mid: usize,
    /// j-index of the seamount centre in the parent grid
    pub j_mid: usize,
}

impl Default for SeamountSetup {
    fn default() -> Self {
        Self {
            bot_max: 5000.0,
            smnt_h: 2400.0,
            smnt_l: 80.0,
            i_mid: 23,
            j_mid: 22,
        }
    }
}

/// Full configuration of the parent/child domain generation.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct VortexConfig {
    /// Directory all output files are written under
    pub output_dir: PathBuf,
    /// Parent grid
    pub parent: GridSpec,
    /// Child grid
    pub child: ChildGrid,
    /// Seamount bathymetry
    pub seamount: SeamountSetup,
    /// Depth of the flat-bottom case (m)
    pub flat_depth: f64,
    /// Title attribute of the output files
    pub title: Option<String>,
    /// Institution attribute of the output files
    pub institution: Option<String>,
    /// Output file extension, `nc` or `json`
    pub extension: String,
}

impl Default for VortexConfig {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from("vortex_input_files"),
            parent: GridSpec::uniform(30_000.0, 30_000.0, 63, 63),
            child: ChildGrid::default(),
            seamount: SeamountSetup::default(),
            flat_depth: 5000.0,
            title: Some("VORTEX idealized domain".to_string()),
            institution: None,
            extension: "nc".to_string(),
        }
    }
}

impl VortexConfig {
    /// Parse a TOML document; missing fields keep their defaults.
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(s)?)
    }

    /// Load a TOML configuration file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    /// Set the output directory.
    pub fn with_output_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.output_dir = dir.into();
        self
    }

    /// Set the parent grid.
    pub fn with_parent(mut self, parent: GridSpec) -> Self {
        self.parent = parent;
        self
    }

    /// Set the child grid.
    pub fn with_child(mut self, child: ChildGrid) -> Self {
        self.child = child;
        self
    }

    /// Set the seamount parameters.
    pub fn with_seamount(mut self, seamount: SeamountSetup) -> Self {
        self.seamount = seamount;
        self
    }

    /// Child grid parameters derived from the parent.
    pub fn child_spec(&self) -> GridSpec {
        self.parent.refined(
            self.child.refx,
            self.child.refy,
            self.child.jpiglo,
            self.child.jpjglo,
        )
    }

    /// Set the output file extension (`nc` or `json`).
    pub fn with_extension(mut self, extension: impl Into<String>) -> Self {
        self.extension = extension.into();
        self
    }

    /// `coordinates.nc` (parent) or `1_coordinates.nc` (child).
    pub fn coordinates_path(&self, child: bool) -> PathBuf {
        self.output_dir
            .join(format!("{}coordinates.{}", nest_prefix(child), self.extension))
    }

    /// `seamount/bathy_meter.nc` (parent) or `seamount/1_bathy_meter.nc` (child).
    pub fn seamount_path(&self, child: bool) -> PathBuf {
        self.output_dir
            .join("seamount")
            .join(format!("{}bathy_meter.{}", nest_prefix(child), self.extension))
    }

    /// `bathy_flat.nc`.
    pub fn flat_path(&self) -> PathBuf {
        self.output_dir.join(format!("bathy_flat.{}", self.extension))
    }
}

/// AGRIF-style file prefix of the first nest level.
fn nest_prefix(child: bool) -> &'static str {
    if child { "1_" } else { "" }
}
