//! Sphere surface sampling.
//!
//! A sphere is sampled on a uniform (azimuth, polar) grid, the same
//! parameterization a surface plot uses: rows walk the azimuth θ over
//! [0, 2π], columns walk the polar angle φ over [0, π], both inclusive.

use std::f64::consts::{PI, TAU};

use bevy::{color::Color, math::DVec3};

use crate::types::SPHERE_RESOLUTION;

/// Rectangular grid of points on a sphere.
///
/// Stored row-major: `points[row * resolution + col]`, where `row` indexes
/// the azimuth and `col` the polar angle.
#[derive(Clone, Debug, PartialEq)]
pub struct SurfaceGrid {
    resolution: usize,
    center: DVec3,
    points: Vec<DVec3>,
}

impl SurfaceGrid {
    /// Samples per side.
    pub fn resolution(&self) -> usize {
        self.resolution
    }

    /// Center of the sampled sphere.
    pub fn center(&self) -> DVec3 {
        self.center
    }

    /// All points, row-major.
    pub fn points(&self) -> &[DVec3] {
        &self.points
    }

    /// Point at (`row`, `col`), if inside the grid.
    pub fn get(&self, row: usize, col: usize) -> Option<DVec3> {
        if row >= self.resolution || col >= self.resolution {
            return None;
        }
        self.points.get(row * self.resolution + col).copied()
    }

    /// Triangle-list indices covering every grid cell with two triangles.
    pub fn triangle_indices(&self) -> Vec<u32> {
        let n = self.resolution;
        if n < 2 {
            return Vec::new();
        }

        let mut indices = Vec::with_capacity((n - 1) * (n - 1) * 6);
        for row in 0..n - 1 {
            for col in 0..n - 1 {
                let a = (row * n + col) as u32;
                let b = ((row + 1) * n + col) as u32;
                let c = (row * n + col + 1) as u32;
                let d = ((row + 1) * n + col + 1) as u32;
                indices.extend_from_slice(&[a, b, d, a, d, c]);
            }
        }
        indices
    }
}

/// A flat-colored sphere ready to hand to the renderer.
#[derive(Clone, Debug)]
pub struct SurfaceTrace {
    /// Body name, used for logging and entity naming.
    pub name: String,
    pub grid: SurfaceGrid,
    /// Single fill tone; no color scale is shown.
    pub color: Color,
}

/// `count` evenly spaced samples over `[start, end]`, endpoints included.
fn linspace(start: f64, end: f64, count: usize) -> impl Iterator<Item = f64> {
    let step = if count > 1 {
        (end - start) / (count - 1) as f64
    } else {
        0.0
    };
    (0..count).map(move |i| start + step * i as f64)
}

/// Sample a sphere of `radius` centered at (`offset`, 0, 0).
///
/// Produces a `SPHERE_RESOLUTION`² grid. Callers pass a non-negative radius;
/// zero collapses the grid onto the center point.
pub fn sphere_surface(radius: f64, offset: f64) -> SurfaceGrid {
    let n = SPHERE_RESOLUTION;
    let polar: Vec<(f64, f64)> = linspace(0.0, PI, n).map(|phi| phi.sin_cos()).collect();

    let mut points = Vec::with_capacity(n * n);
    for theta in linspace(0.0, TAU, n) {
        let (sin_theta, cos_theta) = theta.sin_cos();
        for &(sin_phi, cos_phi) in &polar {
            points.push(DVec3::new(
                offset + radius * cos_theta * sin_phi,
                radius * sin_theta * sin_phi,
                radius * cos_phi,
            ));
        }
    }

    SurfaceGrid {
        resolution: n,
        center: DVec3::new(offset, 0.0, 0.0),
        points,
    }
}

/// Build a named, flat-colored sphere trace.
pub fn sphere_trace(name: impl Into<String>, radius: f64, color: Color, offset: f64) -> SurfaceTrace {
    SurfaceTrace {
        name: name.into(),
        grid: sphere_surface(radius, offset),
        color,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_unit_sphere_at_origin() {
        let grid = sphere_surface(1.0, 0.0);
        assert_eq!(grid.resolution(), 100);
        assert_eq!(grid.points().len(), 10_000);
        for p in grid.points() {
            assert_relative_eq!(p.length(), 1.0, epsilon = 1e-12);
        }
    }

    #[test]
    fn test_grid_poles_and_seam() {
        let grid = sphere_surface(3.0, 10.0);
        let last = grid.resolution() - 1;

        // First column is the north pole for every azimuth
        for row in 0..grid.resolution() {
            let p = grid.get(row, 0).unwrap();
            assert_relative_eq!(p.x, 10.0, epsilon = 1e-12);
            assert_relative_eq!(p.z, 3.0, epsilon = 1e-12);
        }

        // South pole
        let south = grid.get(0, last).unwrap();
        assert_relative_eq!(south.z, -3.0, epsilon = 1e-12);

        // θ = 0 and θ = 2π rows coincide
        for col in 0..grid.resolution() {
            let a = grid.get(0, col).unwrap();
            let b = grid.get(last, col).unwrap();
            assert_relative_eq!(a.x, b.x, epsilon = 1e-9);
            assert_relative_eq!(a.y, b.y, epsilon = 1e-9);
            assert_relative_eq!(a.z, b.z, epsilon = 1e-9);
        }
    }

    #[test]
    fn test_get_out_of_range() {
        let grid = sphere_surface(1.0, 0.0);
        assert!(grid.get(100, 0).is_none());
        assert!(grid.get(0, 100).is_none());
    }

    #[test]
    fn test_triangle_indices_cover_grid() {
        let grid = sphere_surface(1.0, 0.0);
        let indices = grid.triangle_indices();
        assert_eq!(indices.len(), 99 * 99 * 6);
        let max = *indices.iter().max().unwrap();
        assert_eq!(max as usize, grid.points().len() - 1);
    }

    #[test]
    fn test_zero_radius_collapses() {
        let grid = sphere_surface(0.0, 57.9);
        assert!(grid.points().iter().all(|p| *p == DVec3::new(57.9, 0.0, 0.0)));
    }

    #[test]
    fn test_sphere_trace_keeps_name_and_color() {
        let trace = sphere_trace("Sol", 2.0, Color::WHITE, 0.0);
        assert_eq!(trace.name, "Sol");
        assert_eq!(trace.color, Color::WHITE);
        assert_eq!(trace.grid.center(), DVec3::ZERO);
    }
}
