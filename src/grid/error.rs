//! Grid construction errors.

use thiserror::Error;

use crate::types::Axis;

/// Error type for grid generation.
#[derive(Debug, Error, PartialEq)]
pub enum GridError {
    /// Spacing/count pairing is invalid for one axis.
    #[error("Invalid argument for {axis}-axis: {reason}")]
    InvalidArgument { axis: Axis, reason: String },
}

impl GridError {
    /// The count must be given if and only if the spacing is a scalar.
    pub(crate) fn count_pairing(axis: Axis) -> Self {
        GridError::InvalidArgument {
            axis,
            reason: format!(
                "`{}` must be specified if and only if `{}` is not a vector",
                axis.count_name(),
                axis.spacing_name()
            ),
        }
    }

    /// Axis the error refers to.
    pub fn axis(&self) -> Axis {
        match self {
            GridError::InvalidArgument { axis, .. } => *axis,
        }
    }
}
