//! Text annotations anchored next to bodies.

use std::str::FromStr;

use bevy::{color::Color, math::DVec3};

use crate::types::ANNOTATION_FONT_SIZE;

/// Horizontal alignment of annotation text relative to its anchor.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum HorizontalAnchor {
    /// Text starts at the anchor.
    Left,
    #[default]
    Center,
    /// Text ends at the anchor.
    Right,
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown horizontal anchor {0:?} (expected \"left\", \"center\" or \"right\")")]
pub struct ParseAnchorError(pub String);

impl FromStr for HorizontalAnchor {
    type Err = ParseAnchorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "left" => Ok(Self::Left),
            "center" => Ok(Self::Center),
            "right" => Ok(Self::Right),
            other => Err(ParseAnchorError(other.to_string())),
        }
    }
}

/// A positioned text label in scene coordinates.
#[derive(Clone, Debug, PartialEq)]
pub struct Annotation {
    pub position: DVec3,
    pub text: String,
    pub anchor: HorizontalAnchor,
    pub color: Color,
    pub font_size: f32,
    pub show_arrow: bool,
}

/// Build a label at (`x`, 0, `z`) in white, size 12, with no leader arrow.
pub fn annotation(x: f64, z: f64, text: impl Into<String>, anchor: HorizontalAnchor) -> Annotation {
    Annotation {
        position: DVec3::new(x, 0.0, z),
        text: text.into(),
        anchor,
        color: Color::WHITE,
        font_size: ANNOTATION_FONT_SIZE,
        show_arrow: false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_annotation_fixed_styling() {
        let label = annotation(149.6, 9.0, "Earth", HorizontalAnchor::default());
        assert_eq!(label.position, DVec3::new(149.6, 0.0, 9.0));
        assert_eq!(label.text, "Earth");
        assert_eq!(label.anchor, HorizontalAnchor::Center);
        assert_eq!(label.color, Color::WHITE);
        assert_eq!(label.font_size, 12.0);
        assert!(!label.show_arrow);
    }

    #[test]
    fn test_anchor_keywords() {
        assert_eq!("left".parse::<HorizontalAnchor>(), Ok(HorizontalAnchor::Left));
        assert_eq!("center".parse::<HorizontalAnchor>(), Ok(HorizontalAnchor::Center));
        assert_eq!("right".parse::<HorizontalAnchor>(), Ok(HorizontalAnchor::Right));
    }

    #[test]
    fn test_anchor_rejects_unknown_keyword() {
        let err = "middle".parse::<HorizontalAnchor>().unwrap_err();
        assert_eq!(err, ParseAnchorError("middle".to_string()));
        assert!(err.to_string().contains("middle"));
    }
}
