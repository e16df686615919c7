//! Headless Bevy integration tests.
//!
//! These tests spawn the scene into a world without a GPU or window and
//! check the entities the render plugins produce.

mod common;

use bevy::prelude::*;
use solmap::geometry::PathKind;
use solmap::render::bodies::spawn_bodies;
use solmap::render::orbits::spawn_paths;
use solmap::render::{SceneBody, ScenePath};

use common::default_scene;

fn create_minimal_app() -> App {
    let mut app = App::new();
    app.add_plugins((MinimalPlugins, AssetPlugin::default()));
    app.init_asset::<Mesh>()
        .init_asset::<StandardMaterial>()
        .init_asset::<GizmoAsset>();
    app.insert_resource(default_scene());
    app
}

#[test]
fn test_bodies_spawn_with_meshes() {
    let mut app = create_minimal_app();
    app.add_systems(Startup, spawn_bodies);
    app.update();

    let mut query = app.world_mut().query::<(&SceneBody, &Transform)>();
    let bodies: Vec<(String, Vec3)> = query
        .iter(app.world())
        .map(|(body, transform)| (body.name.clone(), transform.translation))
        .collect();

    assert_eq!(bodies.len(), 9);
    let earth = bodies.iter().find(|(name, _)| name == "Earth").unwrap();
    assert_eq!(earth.1, Vec3::new(149.6, 0.0, 0.0));

    assert_eq!(app.world().resource::<Assets<Mesh>>().len(), 9);
    assert_eq!(app.world().resource::<Assets<StandardMaterial>>().len(), 9);
}

#[test]
fn test_paths_spawn_as_gizmos() {
    let mut app = create_minimal_app();
    app.add_systems(Startup, spawn_paths);
    app.update();

    let mut query = app.world_mut().query::<(&ScenePath, &Gizmo)>();
    let paths: Vec<(PathKind, f32)> = query
        .iter(app.world())
        .map(|(path, gizmo)| (path.kind, gizmo.line_config.width))
        .collect();

    assert_eq!(paths.len(), 14);
    assert_eq!(paths.iter().filter(|(kind, _)| *kind == PathKind::Orbit).count(), 8);
    assert!(
        paths
            .iter()
            .filter(|(kind, _)| *kind == PathKind::Ring)
            .all(|(_, width)| *width == 3.0)
    );
    assert_eq!(app.world().resource::<Assets<GizmoAsset>>().len(), 14);
}
