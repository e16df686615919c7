//! Orbit guides and ring bands as retained gizmo line strips.
//!
//! The scene is static, so every path is built into a gizmo asset once at
//! startup instead of being redrawn each frame.

use bevy::prelude::*;

use crate::geometry::{PathKind, PathTrace};
use crate::scene::Scene;

/// Component tagging a spawned path gizmo.
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScenePath {
    pub kind: PathKind,
}

/// Plugin providing orbit path visualization.
pub struct OrbitPathPlugin;

impl Plugin for OrbitPathPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, spawn_paths);
    }
}

/// Line strip for one path, in scene coordinates.
pub fn path_gizmo(path: &PathTrace) -> GizmoAsset {
    let mut gizmo = GizmoAsset::default();
    gizmo.linestrip(
        path.points.points().iter().map(|p| p.as_vec3()),
        path.style.color,
    );
    gizmo
}

/// Spawn one gizmo entity per scene path, each with its own line width.
pub fn spawn_paths(
    mut commands: Commands,
    mut gizmo_assets: ResMut<Assets<GizmoAsset>>,
    scene: Res<Scene>,
) {
    for path in &scene.paths {
        commands.spawn((
            Gizmo {
                handle: gizmo_assets.add(path_gizmo(path)),
                line_config: GizmoLineConfig {
                    width: path.style.width,
                    ..default()
                },
                ..default()
            },
            ScenePath { kind: path.kind },
        ));
    }

    info!(
        "Spawned {} orbit paths and {} ring bands",
        scene.paths_of(PathKind::Orbit).count(),
        scene.paths_of(PathKind::Ring).count()
    );
}
