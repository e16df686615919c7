//! Body labels and axis titles using egui for text rendering.
//!
//! Anchors live in scene coordinates; every frame they are projected to the
//! viewport and painted on the egui background layer.

use bevy::prelude::*;
use bevy_egui::{egui, EguiContexts};

use crate::annotation::HorizontalAnchor;
use crate::camera::MainCamera;
use crate::scene::Scene;

/// Plugin providing label rendering.
pub struct LabelPlugin;

impl Plugin for LabelPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<LabelSettings>()
            .add_systems(bevy_egui::EguiPrimaryContextPass, draw_scene_labels);
    }
}

/// Settings for label rendering.
#[derive(Resource)]
pub struct LabelSettings {
    /// Whether labels are visible.
    pub visible: bool,
    /// Whether axis titles are painted at the positive end of each axis.
    /// Off by default: the x and y titles are black on the black background.
    pub axis_titles: bool,
    /// Font size for axis titles.
    pub axis_title_size: f32,
}

impl Default for LabelSettings {
    fn default() -> Self {
        Self {
            visible: true,
            axis_titles: false,
            axis_title_size: 14.0,
        }
    }
}

/// egui alignment for a horizontal anchor, vertically centered on the point.
pub fn align_for(anchor: HorizontalAnchor) -> egui::Align2 {
    match anchor {
        HorizontalAnchor::Left => egui::Align2::LEFT_CENTER,
        HorizontalAnchor::Center => egui::Align2::CENTER_CENTER,
        HorizontalAnchor::Right => egui::Align2::RIGHT_CENTER,
    }
}

/// Convert a Bevy color to an egui color.
pub fn egui_color(color: Color) -> egui::Color32 {
    let srgba = color.to_srgba();
    let channel = |v: f32| (v.clamp(0.0, 1.0) * 255.0).round() as u8;
    egui::Color32::from_rgba_unmultiplied(
        channel(srgba.red),
        channel(srgba.green),
        channel(srgba.blue),
        channel(srgba.alpha),
    )
}

/// Draw every annotation (and axis titles) at its projected position.
fn draw_scene_labels(
    mut egui_ctx: EguiContexts,
    scene: Res<Scene>,
    camera: Query<(&Camera, &GlobalTransform), With<MainCamera>>,
    settings: Res<LabelSettings>,
) {
    if !settings.visible {
        return;
    }

    let Ok((camera, camera_transform)) = camera.single() else {
        return;
    };
    let Ok(ctx) = egui_ctx.ctx_mut() else {
        return;
    };

    let painter = ctx.layer_painter(egui::LayerId::background());

    for label in &scene.layout.annotations {
        // Anchors behind the camera have no viewport position
        let Ok(screen_pos) = camera.world_to_viewport(camera_transform, label.position.as_vec3())
        else {
            continue;
        };

        painter.text(
            egui::pos2(screen_pos.x, screen_pos.y),
            align_for(label.anchor),
            &label.text,
            egui::FontId::proportional(label.font_size),
            egui_color(label.color),
        );
    }

    if !settings.axis_titles {
        return;
    }

    for (axis, direction) in scene.layout.axes.iter().zip([Vec3::X, Vec3::Y, Vec3::Z]) {
        if axis.title.is_empty() {
            continue;
        }
        let tip = direction * axis.range.1 as f32;
        let Ok(screen_pos) = camera.world_to_viewport(camera_transform, tip) else {
            continue;
        };

        painter.text(
            egui::pos2(screen_pos.x, screen_pos.y),
            egui::Align2::CENTER_CENTER,
            &axis.title,
            egui::FontId::proportional(settings.axis_title_size),
            egui_color(axis.title_color),
        );
    }
}
