//! Fixed reference data for the Sol system.
//!
//! The plotted body table and the printed planet facts are two separate
//! lists with different radii and units. They are never cross-checked.

use crate::annotation::HorizontalAnchor;
use crate::types::{DEFAULT_AXIS_HALF_RANGE, DEFAULT_DISPLAY_CONSTANT};

/// Identifier for bodies drawn in the scene.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum BodyId {
    Sun,
    Mercury,
    Venus,
    Earth,
    Mars,
    Jupiter,
    Saturn,
    Uranus,
    Neptune,
}

impl BodyId {
    /// Every body, Sun first, planets outward.
    pub const ALL: &'static [BodyId] = &[
        BodyId::Sun,
        BodyId::Mercury,
        BodyId::Venus,
        BodyId::Earth,
        BodyId::Mars,
        BodyId::Jupiter,
        BodyId::Saturn,
        BodyId::Uranus,
        BodyId::Neptune,
    ];

    /// Human-readable name
    pub fn name(&self) -> &'static str {
        match self {
            BodyId::Sun => "Sol",
            BodyId::Mercury => "Mercury",
            BodyId::Venus => "Venus",
            BodyId::Earth => "Earth",
            BodyId::Mars => "Mars",
            BodyId::Jupiter => "Jupiter",
            BodyId::Saturn => "Saturn",
            BodyId::Uranus => "Uranus",
            BodyId::Neptune => "Neptune",
        }
    }
}

/// Where a body's name tag sits relative to the body.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LabelPlacement {
    /// Height above the orbital plane, chosen per body to clear the sphere.
    pub height: f64,
    pub anchor: HorizontalAnchor,
}

impl LabelPlacement {
    pub fn centered(height: f64) -> Self {
        Self {
            height,
            anchor: HorizontalAnchor::Center,
        }
    }
}

/// Concentric decorative rings drawn around a body.
#[derive(Clone, Debug, PartialEq)]
pub struct RingSystem {
    /// Ring radii in display units, measured from the body center.
    pub radii: Vec<f64>,
    pub color_hex: String,
    /// Line width in pixels.
    pub width: f32,
}

/// Display data for one plotted body.
#[derive(Clone, Debug, PartialEq)]
pub struct BodyConfig {
    pub id: BodyId,
    /// Raw diameter in kilometers, before display scaling.
    pub diameter_km: f64,
    pub color_hex: String,
    /// Distance from the central body in display units (millions of km).
    pub distance: f64,
    pub label: LabelPlacement,
    pub rings: Option<RingSystem>,
}

/// Moons listed in a planet's fact record.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Moons {
    None,
    Named(Vec<String>),
    Counted(u32),
}

impl Moons {
    pub fn named<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Moons::Named(names.into_iter().map(Into::into).collect())
    }
}

/// A numeric fact, kept in the form it was recorded in.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum FactValue {
    Int(i64),
    Float(f64),
}

impl FactValue {
    pub fn as_f64(&self) -> f64 {
        match *self {
            FactValue::Int(v) => v as f64,
            FactValue::Float(v) => v,
        }
    }
}

/// Reference facts printed after the viewer closes.
#[derive(Clone, Debug, PartialEq)]
pub struct PlanetFacts {
    pub name: String,
    pub radius_km: FactValue,
    pub distance_au: FactValue,
    pub moons: Moons,
}

impl PlanetFacts {
    fn new(name: &str, radius_km: FactValue, distance_au: FactValue, moons: Moons) -> Self {
        Self {
            name: name.to_string(),
            radius_km,
            distance_au,
            moons,
        }
    }
}

#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    #[error("{body} has non-positive diameter {diameter}")]
    NonPositiveDiameter { body: &'static str, diameter: f64 },

    #[error("{body} has invalid distance {distance} (must be non-negative)")]
    NegativeDistance { body: &'static str, distance: f64 },

    #[error("central body {body} must sit at the origin (distance {distance})")]
    CentralBodyOffset { body: &'static str, distance: f64 },

    #[error("{body} is not the central body but has zero distance")]
    ZeroDistance { body: &'static str },

    #[error("{0} is missing from the body table")]
    MissingBody(&'static str),

    #[error("{body} has non-positive ring radius {radius}")]
    NonPositiveRingRadius { body: &'static str, radius: f64 },

    #[error("display constant must be positive (got {0})")]
    NonPositiveDisplayConstant(f64),

    #[error("axis half-range {half_range} does not contain the outermost path at {extent}")]
    AxisRangeTooSmall { half_range: f64, extent: f64 },
}

/// Immutable description of the whole system, built once at startup.
#[derive(Clone, Debug)]
pub struct SolarSystemConfig {
    /// Window and scene title.
    pub title: String,
    pub central_body: BodyId,
    /// Body whose displayed radius is pinned to `display_constant`.
    pub scale_reference: BodyId,
    pub display_constant: f64,
    /// Every axis spans `[-axis_half_range, axis_half_range]`.
    pub axis_half_range: f64,
    pub bodies: Vec<BodyConfig>,
    pub planet_facts: Vec<PlanetFacts>,
}

impl SolarSystemConfig {
    /// Look up a body by id.
    pub fn body(&self, id: BodyId) -> Option<&BodyConfig> {
        self.bodies.iter().find(|b| b.id == id)
    }

    /// Check the data-model invariants.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.display_constant > 0.0) {
            return Err(ConfigError::NonPositiveDisplayConstant(self.display_constant));
        }
        if self.body(self.central_body).is_none() {
            return Err(ConfigError::MissingBody(self.central_body.name()));
        }
        if self.body(self.scale_reference).is_none() {
            return Err(ConfigError::MissingBody(self.scale_reference.name()));
        }

        let mut extent: f64 = 0.0;
        for body in &self.bodies {
            let name = body.id.name();
            if !(body.diameter_km > 0.0) {
                return Err(ConfigError::NonPositiveDiameter {
                    body: name,
                    diameter: body.diameter_km,
                });
            }
            if !(body.distance >= 0.0) {
                return Err(ConfigError::NegativeDistance {
                    body: name,
                    distance: body.distance,
                });
            }
            if body.id == self.central_body {
                if body.distance != 0.0 {
                    return Err(ConfigError::CentralBodyOffset {
                        body: name,
                        distance: body.distance,
                    });
                }
            } else if body.distance == 0.0 {
                return Err(ConfigError::ZeroDistance { body: name });
            }

            extent = extent.max(body.distance);
            if let Some(rings) = &body.rings {
                for &radius in &rings.radii {
                    if !(radius > 0.0) {
                        return Err(ConfigError::NonPositiveRingRadius { body: name, radius });
                    }
                    extent = extent.max(body.distance + radius);
                }
            }
        }

        if extent > self.axis_half_range {
            return Err(ConfigError::AxisRangeTooSmall {
                half_range: self.axis_half_range,
                extent,
            });
        }

        Ok(())
    }
}

fn body(
    id: BodyId,
    diameter_km: f64,
    color_hex: &str,
    distance: f64,
    label: LabelPlacement,
) -> BodyConfig {
    BodyConfig {
        id,
        diameter_km,
        color_hex: color_hex.to_string(),
        distance,
        label,
        rings: None,
    }
}

impl Default for SolarSystemConfig {
    fn default() -> Self {
        let saturn_rings = RingSystem {
            radii: vec![23.0, 24.0, 25.0, 26.0, 27.0, 28.0],
            color_hex: "#827962".to_string(),
            width: 3.0,
        };

        let bodies = vec![
            body(
                BodyId::Sun,
                200_000.0,
                "#ffff00",
                0.0,
                LabelPlacement {
                    height: 40.0,
                    anchor: HorizontalAnchor::Left,
                },
            ),
            body(BodyId::Mercury, 4878.0, "#87877d", 57.9, LabelPlacement::centered(5.0)),
            body(BodyId::Venus, 12104.0, "#d23100", 108.2, LabelPlacement::centered(9.0)),
            body(BodyId::Earth, 12756.0, "#325bff", 149.6, LabelPlacement::centered(9.0)),
            body(BodyId::Mars, 6787.0, "#b20000", 227.9, LabelPlacement::centered(7.0)),
            body(BodyId::Jupiter, 142_796.0, "#ebebd2", 778.6, LabelPlacement::centered(30.0)),
            BodyConfig {
                rings: Some(saturn_rings),
                ..body(BodyId::Saturn, 120_660.0, "#ebcd82", 1433.5, LabelPlacement::centered(28.0))
            },
            body(BodyId::Uranus, 51118.0, "#37ffda", 2872.5, LabelPlacement::centered(20.0)),
            body(BodyId::Neptune, 48600.0, "#2500ab", 4495.1, LabelPlacement::centered(20.0)),
        ];

        // Radii here are the published planetary radii, not the plotted diameters
        use FactValue::{Float, Int};
        let planet_facts = vec![
            PlanetFacts::new("Mercury", Float(2439.7), Float(0.39), Moons::None),
            PlanetFacts::new("Venus", Float(6051.8), Float(0.72), Moons::None),
            PlanetFacts::new("Earth", Float(6371.0), Int(1), Moons::named(["Luna"])),
            PlanetFacts::new("Mars", Float(3396.2), Float(1.52), Moons::named(["Deimos, Phobos"])),
            PlanetFacts::new("Jupiter", Int(142_984), Float(5.2), Moons::Counted(79)),
            PlanetFacts::new("Saturn", Float(60.268), Float(9.54), Moons::Counted(82)),
            PlanetFacts::new("Uranus", Int(25118), Float(19.2), Moons::Counted(27)),
            PlanetFacts::new("Neptune", Int(24764), Float(30.06), Moons::Counted(14)),
        ];

        Self {
            title: "Solar System".to_string(),
            central_body: BodyId::Sun,
            scale_reference: BodyId::Earth,
            display_constant: DEFAULT_DISPLAY_CONSTANT,
            axis_half_range: DEFAULT_AXIS_HALF_RANGE,
            bodies,
            planet_facts,
        }
    }
}
