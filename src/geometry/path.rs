//! Closed circular paths in the z = 0 plane.
//!
//! The same generator draws orbit guides (centered on the Sun) and the
//! decorative ring bands around a planet (centered on that planet).

use bevy::{color::Color, math::DVec3};

use crate::types::{round_to_decimals, ORBIT_PATH_POINTS, PATH_DECIMALS};

/// Ordered points of a closed circle; the first and last points coincide.
#[derive(Clone, Debug, PartialEq)]
pub struct PathPoints {
    points: Vec<DVec3>,
}

impl PathPoints {
    /// All points in degree order.
    pub fn points(&self) -> &[DVec3] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Whether the last point repeats the first.
    pub fn is_closed(&self) -> bool {
        match (self.points.first(), self.points.last()) {
            (Some(first), Some(last)) => first == last,
            _ => false,
        }
    }
}

/// What a path represents in the scene.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PathKind {
    /// Orbit guide of a planet around the central body.
    Orbit,
    /// One band of a planet's ring system.
    Ring,
}

/// Line styling for a path.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PathStyle {
    pub color: Color,
    /// Line width in pixels.
    pub width: f32,
}

impl Default for PathStyle {
    fn default() -> Self {
        Self {
            color: Color::WHITE,
            width: 1.0,
        }
    }
}

/// A styled path ready to hand to the renderer.
#[derive(Clone, Debug)]
pub struct PathTrace {
    pub kind: PathKind,
    pub points: PathPoints,
    pub style: PathStyle,
}

/// Trace a circle of `radius` centered at (`offset`, 0, 0).
///
/// One point per integer degree from 0 to 360 inclusive. The unit-circle
/// terms are rounded to five decimals before scaling, so the cardinal
/// points land exactly on the axes.
pub fn orbit_path(radius: f64, offset: f64) -> PathPoints {
    let points = (0..ORBIT_PATH_POINTS)
        .map(|degree| {
            let (sin, cos) = (degree as f64).to_radians().sin_cos();
            DVec3::new(
                round_to_decimals(cos, PATH_DECIMALS) * radius + offset,
                round_to_decimals(sin, PATH_DECIMALS) * radius,
                0.0,
            )
        })
        .collect();

    PathPoints { points }
}

/// Build a styled path trace.
pub fn orbit_trace(kind: PathKind, radius: f64, offset: f64, style: PathStyle) -> PathTrace {
    PathTrace {
        kind,
        points: orbit_path(radius, offset),
        style,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_orbit_cardinal_points() {
        let path = orbit_path(10.0, 0.0);
        let points = path.points();
        assert_eq!(points.len(), 361);
        assert_eq!(points[0], DVec3::new(10.0, 0.0, 0.0));
        assert_eq!(points[90], DVec3::new(0.0, 10.0, 0.0));
        assert_eq!(points[180], DVec3::new(-10.0, 0.0, 0.0));
        assert_eq!(points[270], DVec3::new(0.0, -10.0, 0.0));
        assert_eq!(points[360], points[0]);
        assert!(path.is_closed());
    }

    #[test]
    fn test_orbit_offset_shifts_x_only() {
        let base = orbit_path(25.0, 0.0);
        let shifted = orbit_path(25.0, 1433.5);
        for (a, b) in base.points().iter().zip(shifted.points()) {
            assert_relative_eq!(b.x - a.x, 1433.5, epsilon = 1e-9);
            assert_eq!(a.y, b.y);
            assert_eq!(b.z, 0.0);
        }
    }

    #[test]
    fn test_zero_radius_is_degenerate_point() {
        let path = orbit_path(0.0, 5.0);
        assert_eq!(path.len(), 361);
        assert!(path.points().iter().all(|p| *p == DVec3::new(5.0, 0.0, 0.0)));
    }

    #[test]
    fn test_default_style_is_thin_white() {
        let style = PathStyle::default();
        assert_eq!(style.color, Color::WHITE);
        assert_eq!(style.width, 1.0);
    }

    #[test]
    fn test_orbit_trace_carries_style() {
        let style = PathStyle {
            color: Color::srgb_u8(0x82, 0x79, 0x62),
            width: 3.0,
        };
        let trace = orbit_trace(PathKind::Ring, 23.0, 1433.5, style);
        assert_eq!(trace.kind, PathKind::Ring);
        assert_eq!(trace.style, style);
        assert_eq!(trace.points.points()[0], DVec3::new(1456.5, 0.0, 0.0));
    }
}
