//! Sphere meshes for the Sun and planets.
//!
//! Each surface grid becomes a triangle-list mesh with a flat, unlit fill so
//! bodies read as solid discs of color from any angle.

use bevy::asset::RenderAssetUsages;
use bevy::math::DVec3;
use bevy::mesh::{Indices, PrimitiveTopology};
use bevy::prelude::*;

use crate::geometry::SurfaceGrid;
use crate::scene::Scene;

/// Component marking an entity as a rendered body.
#[derive(Component, Debug)]
pub struct SceneBody {
    /// Human-readable name.
    pub name: String,
}

/// Plugin spawning one mesh per scene surface.
pub struct BodyPlugin;

impl Plugin for BodyPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, spawn_bodies);
    }
}

/// Build a mesh from a surface grid, in coordinates relative to the grid center.
pub fn surface_mesh(grid: &SurfaceGrid) -> Mesh {
    let center = grid.center();

    let positions: Vec<[f32; 3]> = grid
        .points()
        .iter()
        .map(|p| (*p - center).as_vec3().to_array())
        .collect();

    // A degenerate (zero radius) grid has no outward direction; fall back to +Z
    let normals: Vec<[f32; 3]> = grid
        .points()
        .iter()
        .map(|p| {
            let n = (*p - center).normalize_or_zero();
            let n = if n == DVec3::ZERO { DVec3::Z } else { n };
            n.as_vec3().to_array()
        })
        .collect();

    let mut mesh = Mesh::new(
        PrimitiveTopology::TriangleList,
        RenderAssetUsages::RENDER_WORLD | RenderAssetUsages::MAIN_WORLD,
    );
    mesh.insert_attribute(Mesh::ATTRIBUTE_POSITION, positions);
    mesh.insert_attribute(Mesh::ATTRIBUTE_NORMAL, normals);
    mesh.insert_indices(Indices::U32(grid.triangle_indices()));
    mesh
}

/// Spawn all bodies of the scene.
pub fn spawn_bodies(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    scene: Res<Scene>,
) {
    for surface in &scene.surfaces {
        let mesh = meshes.add(surface_mesh(&surface.grid));

        // Flat fill: no shading, visible from inside and out
        let material = materials.add(StandardMaterial {
            base_color: surface.color,
            unlit: true,
            double_sided: true,
            cull_mode: None,
            ..default()
        });

        commands.spawn((
            Mesh3d(mesh),
            MeshMaterial3d(material),
            Transform::from_translation(surface.grid.center().as_vec3()),
            Name::new(surface.name.clone()),
            SceneBody {
                name: surface.name.clone(),
            },
        ));
    }

    info!("Spawned {} bodies", scene.surfaces.len());
}
