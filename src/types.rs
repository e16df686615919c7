//! Shared constants for scene geometry and display.

/// Samples per angular axis of a sphere surface grid.
pub const SPHERE_RESOLUTION: usize = 100;

/// Points in a closed orbit path: one per integer degree, 0..=360.
pub const ORBIT_PATH_POINTS: usize = 361;

/// Decimal digits kept on the unit-circle terms of an orbit path.
pub const PATH_DECIMALS: i32 = 5;

/// Displayed radius of the scale reference body (Earth).
pub const DEFAULT_DISPLAY_CONSTANT: f64 = 2.0;

/// Half-width of every axis range in display units.
pub const DEFAULT_AXIS_HALF_RANGE: f64 = 7000.0;

/// Font size of body annotations, in points.
pub const ANNOTATION_FONT_SIZE: f32 = 12.0;

/// Round `value` to `decimals` digits after the point.
pub fn round_to_decimals(value: f64, decimals: i32) -> f64 {
    let scale = 10f64.powi(decimals);
    (value * scale).round() / scale
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_to_five_decimals() {
        assert_eq!(round_to_decimals(0.123_456_789, PATH_DECIMALS), 0.12346);
        assert_eq!(round_to_decimals(1.0, PATH_DECIMALS), 1.0);
        assert_eq!(round_to_decimals(-0.000_004, PATH_DECIMALS), 0.0);
    }

    #[test]
    fn test_round_collapses_trig_noise() {
        // cos(90°) is ~6e-17 in floating point
        let cos_90 = 90f64.to_radians().cos();
        assert_ne!(cos_90, 0.0);
        assert_eq!(round_to_decimals(cos_90, PATH_DECIMALS), 0.0);
    }
}
