//! Common test utilities for integration tests.

use bevy::math::DVec3;
use solmap::config::SolarSystemConfig;
use solmap::scene::{assemble_scene, Scene};

/// Assemble the default Sol scene.
pub fn default_scene() -> Scene {
    assemble_scene(&SolarSystemConfig::default()).expect("default config should assemble")
}

/// Distance of `point` from (`offset`, 0, 0).
pub fn distance_from_axis_point(point: DVec3, offset: f64) -> f64 {
    (point - DVec3::new(offset, 0.0, 0.0)).length()
}
