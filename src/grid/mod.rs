//! Horizontal grid generation.
//!
//! Provides the Cartesian C-grid of the idealized test domains:
//! - 1D cell-center/cell-face coordinates and spacings per axis
//! - NEMO staggered-point naming (T, U, V, F)
//! - 2D broadcast fields with optional chunked evaluation

mod axis_fields;
mod error;
mod hgrid;
mod staggering;

pub use axis_fields::{AxisFields, M_PER_KM};
pub use error::GridError;
pub use hgrid::{GridSpec, HorizontalGrid, generate_hgrid};
pub use staggering::{FieldSource, GridPoint, axis_layout};
