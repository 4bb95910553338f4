//! Strongly-typed grid parameters.
//!
//! Newtypes and small enums that keep the grid generator's arguments from
//! being mixed up: which axis, how it is spaced, how 2D fields are chunked.
//!
//! # Example
//!
//! ```
//! use domcfg_rs::types::{Axis, AxisSpacing, Chunks2D};
//!
//! let spacing = AxisSpacing::from(30_000.0);
//! assert!(!spacing.is_vector());
//! assert_eq!(Axis::X.coord_prefix(), "glam");
//! assert_eq!(Chunks2D::square(8).y(), 8);
//! ```

mod axis;
mod bounds;
mod chunks;
mod spacing;

pub use axis::Axis;
pub use bounds::Bounds2D;
pub use chunks::Chunks2D;
pub use spacing::AxisSpacing;
