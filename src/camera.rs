//! Orbiting camera for inspecting the static scene.
//!
//! Left drag rotates around the focus point, middle drag pans, and the
//! scroll wheel zooms. Scene coordinates are Z-up.

use std::f32::consts::{FRAC_PI_2, FRAC_PI_4};

use bevy::{
    input::mouse::{AccumulatedMouseMotion, AccumulatedMouseScroll},
    prelude::*,
};

use crate::scene::Scene;
use crate::types::DEFAULT_AXIS_HALF_RANGE;

/// Eye distance as a multiple of the axis half-range, along the (1, 1, 1) diagonal.
pub const EYE_DISTANCE_FACTOR: f32 = 1.25;

/// Pitch is kept just short of the poles so `looking_at` stays well defined.
const MAX_PITCH: f32 = FRAC_PI_2 - 0.01;

/// Marker component for the main camera.
#[derive(Component)]
pub struct MainCamera;

/// Input tuning for the orbit camera.
#[derive(Resource)]
pub struct CameraSettings {
    /// Radians per pixel of drag.
    pub rotate_speed: f32,
    /// Fraction of the eye distance moved per pixel of drag.
    pub pan_speed: f32,
    /// Fractional distance change per scroll line.
    pub zoom_speed: f32,
    pub min_distance: f32,
    pub max_distance: f32,
}

impl Default for CameraSettings {
    fn default() -> Self {
        Self {
            rotate_speed: 0.005,
            pan_speed: 0.001,
            zoom_speed: 0.1,
            min_distance: 5.0,
            max_distance: 100_000.0,
        }
    }
}

/// Spherical camera placement around a focus point.
#[derive(Resource, Clone, Copy, Debug, PartialEq)]
pub struct OrbitCamera {
    pub focus: Vec3,
    /// Azimuth around +Z, measured from +X.
    pub yaw: f32,
    /// Elevation above the XY plane.
    pub pitch: f32,
    pub distance: f32,
}

impl Default for OrbitCamera {
    fn default() -> Self {
        Self::framing(DEFAULT_AXIS_HALF_RANGE as f32)
    }
}

impl OrbitCamera {
    /// Look at the origin from the (1, 1, 1) diagonal so the whole
    /// `[-half_range, half_range]` cube is in view.
    pub fn framing(half_range: f32) -> Self {
        Self {
            focus: Vec3::ZERO,
            yaw: FRAC_PI_4,
            pitch: (1.0f32 / 3.0f32.sqrt()).asin(),
            distance: EYE_DISTANCE_FACTOR * half_range * 3.0f32.sqrt(),
        }
    }

    /// Eye position in scene coordinates.
    pub fn translation(&self) -> Vec3 {
        let (sin_yaw, cos_yaw) = self.yaw.sin_cos();
        let (sin_pitch, cos_pitch) = self.pitch.sin_cos();
        self.focus
            + self.distance * Vec3::new(cos_pitch * cos_yaw, cos_pitch * sin_yaw, sin_pitch)
    }

    pub fn transform(&self) -> Transform {
        Transform::from_translation(self.translation()).looking_at(self.focus, Vec3::Z)
    }
}

/// Plugin providing camera functionality.
pub struct CameraPlugin;

impl Plugin for CameraPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<CameraSettings>()
            .init_resource::<OrbitCamera>()
            .add_systems(Startup, setup_camera)
            .add_systems(
                Update,
                (camera_rotate, camera_pan, camera_zoom, apply_orbit_camera).chain(),
            );
    }
}

/// Spawn the main camera framed on the scene's axis range.
fn setup_camera(
    mut commands: Commands,
    scene: Res<Scene>,
    settings: Res<CameraSettings>,
    mut orbit: ResMut<OrbitCamera>,
) {
    let half_range = scene.layout.axes[0].range.1 as f32;
    *orbit = OrbitCamera::framing(half_range);

    commands.spawn((
        Camera3d::default(),
        Projection::from(PerspectiveProjection {
            near: 0.5,
            far: settings.max_distance * 2.0,
            ..default()
        }),
        orbit.transform(),
        MainCamera,
    ));

    debug!("Camera framed at distance {:.0}", orbit.distance);
}

/// Handle left mouse button drag for rotation.
fn camera_rotate(
    mouse_buttons: Res<ButtonInput<MouseButton>>,
    mouse_motion: Res<AccumulatedMouseMotion>,
    settings: Res<CameraSettings>,
    mut orbit: ResMut<OrbitCamera>,
) {
    if !mouse_buttons.pressed(MouseButton::Left) || mouse_motion.delta == Vec2::ZERO {
        return;
    }

    let delta = mouse_motion.delta * settings.rotate_speed;
    orbit.yaw -= delta.x;
    orbit.pitch = (orbit.pitch + delta.y).clamp(-MAX_PITCH, MAX_PITCH);
}

/// Handle middle mouse button drag for panning.
fn camera_pan(
    mouse_buttons: Res<ButtonInput<MouseButton>>,
    mouse_motion: Res<AccumulatedMouseMotion>,
    settings: Res<CameraSettings>,
    camera_query: Query<&Transform, With<MainCamera>>,
    mut orbit: ResMut<OrbitCamera>,
) {
    if !mouse_buttons.pressed(MouseButton::Middle) || mouse_motion.delta == Vec2::ZERO {
        return;
    }

    let Ok(transform) = camera_query.single() else {
        return;
    };

    // Screen motion is in pixels; scale with eye distance so panning feels
    // the same at every zoom level
    let scale = orbit.distance * settings.pan_speed;
    let right = *transform.right();
    let up = *transform.up();
    let offset = (-mouse_motion.delta.x * right + mouse_motion.delta.y * up) * scale;
    orbit.focus += offset;
}

/// Handle mouse scroll wheel for zoom.
fn camera_zoom(
    mouse_scroll: Res<AccumulatedMouseScroll>,
    settings: Res<CameraSettings>,
    mut orbit: ResMut<OrbitCamera>,
) {
    if mouse_scroll.delta.y == 0.0 {
        return;
    }

    // Logarithmic zoom: multiply distance by factor based on scroll direction
    let zoom_factor = (1.0 - mouse_scroll.delta.y * settings.zoom_speed).max(0.1);
    orbit.distance =
        (orbit.distance * zoom_factor).clamp(settings.min_distance, settings.max_distance);
}

/// Copy the orbit state onto the camera transform when it changes.
fn apply_orbit_camera(
    orbit: Res<OrbitCamera>,
    mut camera_query: Query<&mut Transform, With<MainCamera>>,
) {
    if !orbit.is_changed() {
        return;
    }

    let Ok(mut transform) = camera_query.single_mut() else {
        return;
    };
    *transform = orbit.transform();
}
