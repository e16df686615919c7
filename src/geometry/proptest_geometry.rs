//! Property-based tests for the sphere and path generators.
//!
//! These check the geometric invariants over a wide range of radii and
//! offsets instead of a handful of fixed cases.

use proptest::prelude::*;

use super::path::orbit_path;
use super::sphere::sphere_surface;
use crate::types::{ORBIT_PATH_POINTS, SPHERE_RESOLUTION};

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    /// Every sampled point lies on the sphere of the requested radius.
    #[test]
    fn prop_sphere_points_on_surface(
        radius in 0.0f64..500.0,
        offset in -5000.0f64..5000.0,
    ) {
        let grid = sphere_surface(radius, offset);
        prop_assert_eq!(grid.points().len(), SPHERE_RESOLUTION * SPHERE_RESOLUTION);

        let center = grid.center();
        prop_assert_eq!(center.x, offset);

        let tolerance = 1e-9 * (1.0 + radius + offset.abs());
        for p in grid.points() {
            let error = ((*p - center).length() - radius).abs();
            prop_assert!(
                error < tolerance,
                "point {:?} is {} from center, expected {}",
                p, (*p - center).length(), radius
            );
        }
    }

    /// Paths are flat, closed, and stay within rounding distance of the circle.
    #[test]
    fn prop_orbit_path_on_circle(
        radius in 0.0f64..5000.0,
        offset in -5000.0f64..5000.0,
    ) {
        let path = orbit_path(radius, offset);
        prop_assert_eq!(path.len(), ORBIT_PATH_POINTS);
        prop_assert!(path.is_closed());

        // Each unit-circle term is off by at most 5e-6 after rounding
        let tolerance = 1e-5 * radius + 1e-9 * (1.0 + offset.abs());
        for p in path.points() {
            prop_assert_eq!(p.z, 0.0);
            let dx = p.x - offset;
            let distance = (dx * dx + p.y * p.y).sqrt();
            prop_assert!(
                (distance - radius).abs() <= tolerance,
                "point {:?} is {} from center, expected {}",
                p, distance, radius
            );
        }
    }

    /// Generators are pure: identical inputs give identical outputs.
    #[test]
    fn prop_generators_idempotent(
        radius in 0.0f64..1000.0,
        offset in -5000.0f64..5000.0,
    ) {
        prop_assert_eq!(sphere_surface(radius, offset), sphere_surface(radius, offset));
        prop_assert_eq!(orbit_path(radius, offset), orbit_path(radius, offset));
    }
}
