//! Scene backdrop: clear color, axis lines and the floor grid.

use bevy::prelude::*;

use crate::scene::{AxisLayout, Scene};

/// Plugin providing the background and axis frame.
pub struct AxesPlugin;

impl Plugin for AxesPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<AxesSettings>()
            .add_systems(Startup, (apply_background, spawn_axes));
    }
}

/// Settings for the axis frame.
#[derive(Resource)]
pub struct AxesSettings {
    /// Distance between grid lines in display units.
    pub grid_spacing: f64,
    /// Line width in pixels for axes and grid.
    pub line_width: f32,
}

impl Default for AxesSettings {
    fn default() -> Self {
        Self {
            grid_spacing: 2000.0,
            line_width: 1.0,
        }
    }
}

/// Multiples of `spacing` that fall inside `range`, ascending.
pub fn grid_ticks(range: (f64, f64), spacing: f64) -> Vec<f64> {
    let (min, max) = range;
    if !(spacing > 0.0) || min > max {
        return Vec::new();
    }

    let first = (min / spacing).ceil() as i64;
    let last = (max / spacing).floor() as i64;
    (first..=last).map(|k| k as f64 * spacing).collect()
}

fn apply_background(mut commands: Commands, scene: Res<Scene>) {
    commands.insert_resource(ClearColor(scene.layout.background));
}

fn axis_line(axis: &AxisLayout, direction: Vec3) -> (Vec3, Vec3) {
    let (min, max) = axis.range;
    (direction * min as f32, direction * max as f32)
}

/// Build the axis lines through the origin and a grid on the floor plane.
pub fn axes_gizmo(axes: &[AxisLayout; 3], grid_spacing: f64) -> GizmoAsset {
    let [x_axis, y_axis, z_axis] = axes;
    let mut gizmo = GizmoAsset::default();

    for (axis, direction) in [(x_axis, Vec3::X), (y_axis, Vec3::Y), (z_axis, Vec3::Z)] {
        let (start, end) = axis_line(axis, direction);
        gizmo.line(start, end, axis.color);
    }

    let floor = z_axis.range.0 as f32;
    let (x_min, x_max) = (x_axis.range.0 as f32, x_axis.range.1 as f32);
    let (y_min, y_max) = (y_axis.range.0 as f32, y_axis.range.1 as f32);

    // Lines of constant x belong to the x axis grid, and likewise for y
    for x in grid_ticks(x_axis.range, grid_spacing) {
        let x = x as f32;
        gizmo.line(
            Vec3::new(x, y_min, floor),
            Vec3::new(x, y_max, floor),
            x_axis.grid_color,
        );
    }
    for y in grid_ticks(y_axis.range, grid_spacing) {
        let y = y as f32;
        gizmo.line(
            Vec3::new(x_min, y, floor),
            Vec3::new(x_max, y, floor),
            y_axis.grid_color,
        );
    }

    gizmo
}

fn spawn_axes(
    mut commands: Commands,
    mut gizmo_assets: ResMut<Assets<GizmoAsset>>,
    scene: Res<Scene>,
    settings: Res<AxesSettings>,
) {
    commands.spawn((
        Name::new("Axes"),
        Gizmo {
            handle: gizmo_assets.add(axes_gizmo(&scene.layout.axes, settings.grid_spacing)),
            line_config: GizmoLineConfig {
                width: settings.line_width,
                ..default()
            },
            ..default()
        },
    ));

    debug!(
        "Axis frame spans {:?} with grid spacing {}",
        scene.layout.axes[0].range, settings.grid_spacing
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grid_ticks_inside_range() {
        let ticks = grid_ticks((-7000.0, 7000.0), 2000.0);
        assert_eq!(ticks, vec![-6000.0, -4000.0, -2000.0, 0.0, 2000.0, 4000.0, 6000.0]);
    }

    #[test]
    fn test_grid_ticks_include_endpoints_on_multiples() {
        let ticks = grid_ticks((-4000.0, 4000.0), 2000.0);
        assert_eq!(ticks.first(), Some(&-4000.0));
        assert_eq!(ticks.last(), Some(&4000.0));
    }

    #[test]
    fn test_grid_ticks_reject_bad_spacing() {
        assert!(grid_ticks((-1.0, 1.0), 0.0).is_empty());
        assert!(grid_ticks((-1.0, 1.0), -5.0).is_empty());
        assert!(grid_ticks((1.0, -1.0), 1.0).is_empty());
    }
}
