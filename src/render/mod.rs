//! Rendering systems for the Sol system map.
//!
//! Each plugin reads the assembled [`Scene`](crate::scene::Scene) resource
//! once at startup (labels are re-projected every frame) and hands it to
//! Bevy as meshes, gizmos and egui text.

mod axes;
pub mod bodies;
mod labels;
pub mod orbits;

use bevy::prelude::*;

use self::axes::AxesPlugin;
use self::bodies::BodyPlugin;
use self::labels::LabelPlugin;
use self::orbits::OrbitPathPlugin;

// Re-export for use in other modules
pub use self::axes::AxesSettings;
pub use self::bodies::{surface_mesh, SceneBody};
pub use self::labels::LabelSettings;
pub use self::orbits::{path_gizmo, ScenePath};

/// Plugin aggregating all rendering functionality.
pub struct RenderPlugin;

impl Plugin for RenderPlugin {
    fn build(&self, app: &mut App) {
        app.add_plugins((BodyPlugin, OrbitPathPlugin, AxesPlugin, LabelPlugin));
    }
}
