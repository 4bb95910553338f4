//! Idealized bathymetry profiles.
//!
//! Profiles take T-point coordinates in km (as stored in `glamt`/`gphit`)
//! and return a positive depth in m.

use serde::{Deserialize, Serialize};

use crate::grid::M_PER_KM;

/// Flat bottom: the same depth everywhere.
#[inline]
pub fn flat(_lon: f64, _lat: f64, depth: f64) -> f64 {
    depth
}

/// Gaussian seamount as in Ezer et al. (2002).
///
/// H(x, y) = H_max - h * exp(-(Δx² + Δy²) / L²)
///
/// with Δx, Δy and L converted from km to m.
#[inline]
pub fn seamount(lon: f64, lat: f64, seamount: &Seamount) -> f64 {
    let dx = M_PER_KM * (lon - seamount.center_lon);
    let dy = M_PER_KM * (lat - seamount.center_lat);
    let l = M_PER_KM * seamount.width;
    seamount.bot_max - seamount.height * (-(dx * dx + dy * dy) / (l * l)).exp()
}

/// Parameters of the Gaussian seamount.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Seamount {
    /// x-coordinate of the summit (km)
    pub center_lon: f64,
    /// y-coordinate of the summit (km)
    pub center_lat: f64,
    /// Depth far from the seamount (m)
    pub bot_max: f64,
    /// Height of the seamount above `bot_max` (m)
    pub height: f64,
    /// e-folding width (km)
    pub width: f64,
}

impl Seamount {
    /// Seamount centred at `(center_lon, center_lat)`.
    pub fn new(center_lon: f64, center_lat: f64, bot_max: f64, height: f64, width: f64) -> Self {
        Self {
            center_lon,
            center_lat,
            bot_max,
            height,
            width,
        }
    }

    /// Depth over the summit.
    pub fn summit_depth(&self) -> f64 {
        self.bot_max - self.height
    }

    /// Depth at `(lon, lat)` in km.
    pub fn depth(&self, lon: f64, lat: f64) -> f64 {
        seamount(lon, lat, self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TOL: f64 = 1e-10;

    fn vortex() -> Seamount {
        Seamount::new(0.0, 0.0, 5000.0, 2400.0, 80.0)
    }

    #[test]
    fn test_flat_profile() {
        assert_eq!(flat(-945.0, 12.0, 4000.0), 4000.0);
    }

    #[test]
    fn test_seamount_summit() {
        let s = vortex();
        assert!((s.depth(0.0, 0.0) - 2600.0).abs() < TOL);
        assert_eq!(s.summit_depth(), 2600.0);
    }

    #[test]
    fn test_seamount_e_folding_width() {
        let s = vortex();
        // At r = L the perturbation is h / e
        let expected = 5000.0 - 2400.0 / std::f64::consts::E;
        assert!((s.depth(80.0, 0.0) - expected).abs() < 1e-9);
        assert!((s.depth(0.0, -80.0) - expected).abs() < 1e-9);
    }

    #[test]
    fn test_seamount_far_field() {
        let s = vortex();
        // r = 5 L: h * exp(-25) ~ 3e-8 m
        assert!((s.depth(400.0, 0.0) - 5000.0).abs() < 1e-6);
    }

    #[test]
    fn test_seamount_reflection_symmetry() {
        let s = Seamount::new(-255.0, -285.0, 5000.0, 2400.0, 80.0);
        for &(dx, dy) in &[(10.0, 0.0), (33.0, -17.0), (120.0, 90.0)] {
            let a = s.depth(-255.0 + dx, -285.0 + dy);
            let b = s.depth(-255.0 - dx, -285.0 - dy);
            let c = s.depth(-255.0 - dx, -285.0 + dy);
            assert!((a - b).abs() < TOL);
            assert!((a - c).abs() < TOL);
        }
    }
}
