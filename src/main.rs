//! Solmap - a static 3D map of the Sol system
//!
//! Opens an interactive 3D view of the Sun, the planets, their orbits and
//! Saturn's rings, then prints reference facts for each planet once the
//! window is closed.

use std::io::{self, Write};

use bevy::prelude::*;
use bevy_egui::EguiPlugin;

use solmap::camera::CameraPlugin;
use solmap::config::SolarSystemConfig;
use solmap::reference::{print_reference_table, REFERENCE_HEADER};
use solmap::render::RenderPlugin;
use solmap::scene::assemble_scene;

fn main() -> AppExit {
    let config = SolarSystemConfig::default();

    let scene = match assemble_scene(&config) {
        Ok(scene) => scene,
        Err(err) => {
            eprintln!("error: failed to assemble scene: {err}");
            return AppExit::error();
        }
    };
    let title = scene.layout.title.clone();

    // Blocks until the viewer window is closed
    let exit = App::new()
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(Window {
                title,
                ..default()
            }),
            ..default()
        }))
        .add_plugins(EguiPlugin::default())
        // Insert the scene before plugins that read it at startup
        .insert_resource(scene)
        .add_plugins((CameraPlugin, RenderPlugin))
        .run();

    info!("Viewer closed ({exit:?})");

    let mut out = io::stdout().lock();
    let printed = writeln!(out, "{REFERENCE_HEADER}")
        .and_then(|()| print_reference_table(&config.planet_facts, &mut out));
    if let Err(err) = printed {
        eprintln!("error: failed to print reference table: {err}");
        return AppExit::error();
    }

    exit
}
