//! Arakawa C-grid point naming.
//!
//! Each cell carries four staggered points: T (center), U (x-face),
//! V (y-face) and F (corner). Along the x-axis, T and V share the cell-center
//! x-coordinate while U and F sit on x-faces; along the y-axis, T and U sit
//! on centers and V and F on y-faces.

use crate::types::Axis;

/// Staggered grid point.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum GridPoint {
    T,
    U,
    V,
    F,
}

impl GridPoint {
    /// All points in NEMO order.
    pub const ALL: [GridPoint; 4] = [GridPoint::T, GridPoint::U, GridPoint::V, GridPoint::F];

    /// Field-name suffix (`t`, `u`, `v`, `f`).
    pub fn suffix(self) -> &'static str {
        match self {
            GridPoint::T => "t",
            GridPoint::U => "u",
            GridPoint::V => "v",
            GridPoint::F => "f",
        }
    }

    /// Whether this point lies on a cell face along `axis`.
    pub fn on_face(self, axis: Axis) -> bool {
        match axis {
            Axis::X => matches!(self, GridPoint::U | GridPoint::F),
            Axis::Y => matches!(self, GridPoint::V | GridPoint::F),
        }
    }

    /// Coordinate field name, e.g. `glamu`.
    pub fn coordinate_name(self, axis: Axis) -> String {
        format!("{}{}", axis.coord_prefix(), self.suffix())
    }

    /// Scale-factor field name, e.g. `e2v`.
    pub fn spacing_name(self, axis: Axis) -> String {
        format!("{}{}", axis.spacing_prefix(), self.suffix())
    }
}

/// Which 1D axis array a named 2D field is broadcast from.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FieldSource {
    /// Cell-center coordinate (km)
    CenterCoordinate,
    /// Cell-face coordinate (km)
    FaceCoordinate,
    /// Cell-center spacing (m)
    CenterSpacing,
    /// Cell-face spacing (m)
    FaceSpacing,
}

/// The nine named fields contributed by one axis, in output order.
///
/// The plain alias (`nav_lon` / `nav_lat`) comes first, then the coordinate
/// fields, then the scale factors; center points before face points.
pub fn axis_layout(axis: Axis) -> Vec<(String, FieldSource)> {
    let (center, face): (Vec<_>, Vec<_>) = GridPoint::ALL
        .into_iter()
        .partition(|p| !p.on_face(axis));

    let mut layout = vec![(axis.nav_name().to_string(), FieldSource::CenterCoordinate)];
    layout.extend(center.iter().map(|p| (p.coordinate_name(axis), FieldSource::CenterCoordinate)));
    layout.extend(face.iter().map(|p| (p.coordinate_name(axis), FieldSource::FaceCoordinate)));
    layout.extend(center.iter().map(|p| (p.spacing_name(axis), FieldSource::CenterSpacing)));
    layout.extend(face.iter().map(|p| (p.spacing_name(axis), FieldSource::FaceSpacing)));
    layout
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(axis: Axis) -> Vec<String> {
        axis_layout(axis).into_iter().map(|(n, _)| n).collect()
    }

    #[test]
    fn test_x_layout() {
        assert_eq!(
            names(Axis::X),
            vec!["nav_lon", "glamt", "glamv", "glamu", "glamf", "e1t", "e1v", "e1u", "e1f"]
        );
        let layout = axis_layout(Axis::X);
        assert_eq!(layout[3].1, FieldSource::FaceCoordinate);
        assert_eq!(layout[6].1, FieldSource::CenterSpacing);
        assert_eq!(layout[8].1, FieldSource::FaceSpacing);
    }

    #[test]
    fn test_y_layout() {
        assert_eq!(
            names(Axis::Y),
            vec!["nav_lat", "gphit", "gphiu", "gphiv", "gphif", "e2t", "e2u", "e2v", "e2f"]
        );
    }

    #[test]
    fn test_on_face() {
        assert!(GridPoint::U.on_face(Axis::X));
        assert!(!GridPoint::U.on_face(Axis::Y));
        assert!(GridPoint::F.on_face(Axis::Y));
        assert!(!GridPoint::T.on_face(Axis::X));
    }
}
