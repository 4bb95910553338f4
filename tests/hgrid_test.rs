//! Integration tests for horizontal grid generation.
//!
//! These tests verify:
//! - Center coordinates of uniform grids (length, monotonicity, spacing, symmetry)
//! - The spacing/count pairing rule for both axes
//! - Face coordinates relative to the centers
//! - The NEMO field layout of the coordinates dataset

use domcfg_rs::{Axis, AxisSpacing, Chunks2D, GridError, generate_hgrid};
use proptest::prelude::*;

const TOL: f64 = 1e-9;

proptest! {
    #[test]
    fn uniform_centers_are_even_and_symmetric(s in 1.0f64..1.0e5, n in 1usize..200) {
        let grid = generate_hgrid(s, s, Some(n), Some(n), None).unwrap();
        let x = &grid.axis(Axis::X).coord_c;
        let tol = TOL * s * n as f64;

        prop_assert_eq!(x.len(), n);
        for k in 1..n {
            prop_assert!(x[k] > x[k - 1]);
            prop_assert!((x[k] - x[k - 1] - s).abs() < tol);
        }
        prop_assert!((x[0] + x[n - 1]).abs() < tol);
    }

    #[test]
    fn faces_lie_between_centers(s in 1.0f64..1.0e5, n in 1usize..100) {
        let grid = generate_hgrid(s, 2.0 * s, Some(n), Some(n + 1), None).unwrap();

        for axis in Axis::ALL {
            let f = grid.axis(axis);
            let last = f.len() - 1;
            for k in 0..last {
                prop_assert!(f.coord_f[k] > f.coord_c[k]);
                prop_assert!(f.coord_f[k] < f.coord_c[k + 1]);
            }
            let expected = f.coord_c[last] + 0.5 * f.delta_c[last];
            prop_assert!((f.coord_f[last] - expected).abs() < TOL * expected.abs().max(1.0));
        }
    }

    #[test]
    fn vector_spacing_sets_count(d in prop::collection::vec(1.0f64..1000.0, 1..50)) {
        let n = d.len();
        let grid = generate_hgrid(d.clone(), 100.0, None, Some(3), None).unwrap();
        prop_assert_eq!(grid.shape(), (3, n));

        let err = generate_hgrid(d, 100.0, Some(n), Some(3), None).unwrap_err();
        let on_x = matches!(err, GridError::InvalidArgument { axis: Axis::X, .. });
        prop_assert!(on_x, "unexpected error: {:?}", err);
    }

    #[test]
    fn scalar_spacing_requires_count(s in 1.0f64..1.0e5) {
        let err = generate_hgrid(s, s, Some(5), None, None).unwrap_err();
        let on_y = matches!(err, GridError::InvalidArgument { axis: Axis::Y, .. });
        prop_assert!(on_y, "unexpected error: {:?}", err);
    }
}

#[test]
fn test_vortex_parent_scenario() {
    let grid = generate_hgrid(30_000.0, 30_000.0, Some(63), Some(63), None).unwrap();
    let x = grid.axis(Axis::X);

    assert_eq!(x.len(), 63);
    assert_eq!(x.coord_c[31], 0.0);
    assert_eq!(x.center_km()[0], -930.0);
    assert_eq!(x.center_km()[62], 930.0);

    let glamt = grid.field("glamt").unwrap();
    assert_eq!(glamt.get(0, 10), Some(-930.0));
    assert_eq!(glamt.get(62, 40), Some(930.0));
    assert_eq!(glamt.attribute("units"), Some("km"));
}

#[test]
fn test_coordinates_dataset_layout() {
    let grid = generate_hgrid(vec![1000.0, 2000.0, 1000.0], 500.0, None, Some(4), None).unwrap();
    let ds = grid.to_dataset();

    assert_eq!(ds.shape(), (4, 3));
    assert_eq!(ds.variables().len(), 18);
    for name in ["nav_lon", "glamt", "glamu", "glamv", "glamf", "e1t", "e1u", "e1v", "e1f"] {
        assert!(ds.variable(name).is_some(), "missing {name}");
    }
    for name in ["nav_lat", "gphit", "gphiu", "gphiv", "gphif", "e2t", "e2u", "e2v", "e2f"] {
        assert!(ds.variable(name).is_some(), "missing {name}");
    }

    // Center fields are shared between T and the point staggered along the other axis
    assert_eq!(ds.variable("glamt").unwrap().data, ds.variable("glamv").unwrap().data);
    assert_eq!(ds.variable("glamu").unwrap().data, ds.variable("glamf").unwrap().data);
    assert_eq!(ds.variable("gphit").unwrap().data, ds.variable("gphiu").unwrap().data);
    assert_eq!(ds.variable("e2v").unwrap().data, ds.variable("e2f").unwrap().data);
    assert_eq!(ds.variable("nav_lon").unwrap().data, ds.variable("glamt").unwrap().data);

    let e1t = ds.variable("e1t").unwrap();
    assert_eq!(e1t.get(1, 3), Some(2000.0));
    assert_eq!(e1t.attribute("long_name"), Some("x-axis spacing"));

    let x = ds.coordinate("x").unwrap();
    assert_eq!(x.values(), vec![0, 1, 2]);
    assert_eq!(x.attribute("axis"), Some("X"));
}

#[test]
fn test_chunked_grid_is_identical() {
    let plain = generate_hgrid(30_000.0, 30_000.0, Some(63), Some(63), None).unwrap();
    let chunked =
        generate_hgrid(30_000.0, 30_000.0, Some(63), Some(63), Some(Chunks2D::square(16))).unwrap();

    assert_eq!(plain.to_dataset(), chunked.to_dataset());
}

#[test]
fn test_uniform_vector_equals_scalar() {
    let scalar = generate_hgrid(2500.0, 2500.0, Some(9), Some(9), None).unwrap();
    let vector = generate_hgrid(AxisSpacing::Variable(vec![2500.0; 9]), 2500.0, None, Some(9), None)
        .unwrap();

    for (a, b) in scalar.glamt().iter().zip(vector.glamt().iter()) {
        assert!((a - b).abs() < TOL);
    }
}
