//! Scene assembly: turns the system configuration into drawable traces and
//! a layout for the viewer.

use bevy::color::HexColorError;
use bevy::prelude::*;

use crate::annotation::{annotation, Annotation};
use crate::config::{ConfigError, SolarSystemConfig};
use crate::geometry::{orbit_trace, sphere_trace, PathKind, PathStyle, PathTrace, SurfaceTrace};

#[derive(thiserror::Error, Debug)]
pub enum SceneError {
    #[error("invalid configuration: {0}")]
    Config(#[from] ConfigError),

    #[error("invalid color {hex:?} for {body}: {source}")]
    Color {
        body: &'static str,
        hex: String,
        #[source]
        source: HexColorError,
    },
}

/// Styling and extent of one spatial axis.
#[derive(Clone, Debug, PartialEq)]
pub struct AxisLayout {
    pub title: String,
    pub title_color: Color,
    pub range: (f64, f64),
    /// Color of the axis line.
    pub color: Color,
    pub grid_color: Color,
}

/// Scene-wide layout handed to the viewer alongside the traces.
#[derive(Clone, Debug, PartialEq)]
pub struct SceneLayout {
    pub title: String,
    pub background: Color,
    /// x, y, z in that order.
    pub axes: [AxisLayout; 3],
    pub annotations: Vec<Annotation>,
}

/// Everything the viewer draws. Built once, then only read.
#[derive(Resource, Clone, Debug)]
pub struct Scene {
    pub surfaces: Vec<SurfaceTrace>,
    pub paths: Vec<PathTrace>,
    pub layout: SceneLayout,
}

impl Scene {
    /// Paths of one kind, in assembly order.
    pub fn paths_of(&self, kind: PathKind) -> impl Iterator<Item = &PathTrace> {
        self.paths.iter().filter(move |p| p.kind == kind)
    }
}

fn parse_color(body: &'static str, hex: &str) -> Result<Color, SceneError> {
    Srgba::hex(hex)
        .map(Color::from)
        .map_err(|source| SceneError::Color {
            body,
            hex: hex.to_string(),
            source,
        })
}

/// Displayed radius of every body, in body order.
///
/// Each raw diameter is normalized against the scale reference's diameter
/// and multiplied by the display constant, so the reference body comes out
/// at exactly the display constant.
pub fn display_radii(config: &SolarSystemConfig) -> Result<Vec<f64>, SceneError> {
    let reference = config
        .body(config.scale_reference)
        .ok_or(ConfigError::MissingBody(config.scale_reference.name()))?;

    Ok(config
        .bodies
        .iter()
        .map(|b| b.diameter_km / reference.diameter_km * config.display_constant)
        .collect())
}

fn axis(title: &str, title_color: Color, color: Color, half_range: f64) -> AxisLayout {
    AxisLayout {
        title: title.to_string(),
        title_color,
        range: (-half_range, half_range),
        color,
        grid_color: Color::BLACK,
    }
}

/// Build the full scene from a validated configuration.
pub fn assemble_scene(config: &SolarSystemConfig) -> Result<Scene, SceneError> {
    config.validate()?;
    let radii = display_radii(config)?;

    let mut surfaces = Vec::with_capacity(config.bodies.len());
    let mut paths = Vec::new();
    let mut annotations = Vec::with_capacity(config.bodies.len());

    for (body, &radius) in config.bodies.iter().zip(&radii) {
        let name = body.id.name();
        let color = parse_color(name, &body.color_hex)?;
        surfaces.push(sphere_trace(name, radius, color, body.distance));

        annotations.push(annotation(
            body.distance,
            body.label.height,
            name,
            body.label.anchor,
        ));
    }

    for body in config.bodies.iter().filter(|b| b.id != config.central_body) {
        paths.push(orbit_trace(
            PathKind::Orbit,
            body.distance,
            0.0,
            PathStyle::default(),
        ));
    }

    for body in &config.bodies {
        let Some(rings) = &body.rings else {
            continue;
        };
        let style = PathStyle {
            color: parse_color(body.id.name(), &rings.color_hex)?,
            width: rings.width,
        };
        for &radius in &rings.radii {
            paths.push(orbit_trace(PathKind::Ring, radius, body.distance, style));
        }
    }

    let half_range = config.axis_half_range;
    let layout = SceneLayout {
        title: config.title.clone(),
        background: Color::BLACK,
        axes: [
            axis("Distance from the Sun", Color::BLACK, Color::BLACK, half_range),
            axis("Distance from the Sun", Color::BLACK, Color::BLACK, half_range),
            axis("", Color::WHITE, Color::WHITE, half_range),
        ],
        annotations,
    };

    debug!(
        "Assembled scene: {} surfaces, {} paths, {} annotations",
        surfaces.len(),
        paths.len(),
        layout.annotations.len()
    );

    Ok(Scene {
        surfaces,
        paths,
        layout,
    })
}
