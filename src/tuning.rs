//! Game balance, expressed as fractions of the playing field
//!
//! `Tuning` is the data-driven part (loadable from JSON); `Physics` is the
//! concrete set of per-tick constants derived from it for one field size.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::field::FieldSize;

/// Field-relative balance parameters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    // === Player (fractions of field width) ===
    /// Body radius
    pub player_radius: f32,
    /// Resting x position, also where a wall bounce puts the player back
    pub player_home_x: f32,

    // === Player (fractions of field height) ===
    /// Starting y position
    pub player_start_y: f32,
    /// Downward acceleration per tick
    pub gravity: f32,
    /// Upward velocity set by a jump
    pub jump: f32,

    // === Walls ===
    /// Vertical gap between the two segments (of height)
    pub gap: f32,
    /// Shortest allowed segment (of height)
    pub min_segment: f32,
    /// Wall width (of width)
    pub wall_width: f32,
    /// Leftward scroll per tick (of width)
    pub scroll_speed: f32,
    /// Horizontal distance between consecutive walls (of width)
    pub spacing: f32,

    // === Background ===
    /// Field width in pixels per meteor
    pub pixels_per_meteor: f32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            player_radius: 0.0375,
            player_home_x: 0.125,

            player_start_y: 0.5,
            gravity: 0.0008,
            jump: 0.015,

            gap: 0.4,
            min_segment: 0.1,
            wall_width: 0.075,
            scroll_speed: 0.003,
            spacing: 0.4,

            pixels_per_meteor: 20.0,
        }
    }
}

/// Reasons a tuning file is rejected
#[derive(Debug)]
pub enum TuningError {
    /// The JSON could not be parsed
    Parse(serde_json::Error),
    /// A field-relative value is outside its usable range
    OutOfRange { name: &'static str, value: f32 },
    /// The gap plus both minimum segments does not fit in the field
    GapTooLarge { gap: f32, min_segment: f32 },
}

impl fmt::Display for TuningError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TuningError::Parse(e) => write!(f, "invalid tuning JSON: {e}"),
            TuningError::OutOfRange { name, value } => {
                write!(f, "tuning value `{name}` out of range: {value}")
            }
            TuningError::GapTooLarge { gap, min_segment } => write!(
                f,
                "gap {gap} plus two segments of {min_segment} exceeds the field height"
            ),
        }
    }
}

impl std::error::Error for TuningError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            TuningError::Parse(e) => Some(e),
            _ => None,
        }
    }
}

impl From<serde_json::Error> for TuningError {
    fn from(e: serde_json::Error) -> Self {
        TuningError::Parse(e)
    }
}

impl Tuning {
    /// Parse and validate tuning from JSON. Missing keys keep their defaults.
    pub fn from_json(json: &str) -> Result<Self, TuningError> {
        let tuning: Tuning = serde_json::from_str(json)?;
        tuning.validate()?;
        Ok(tuning)
    }

    /// Check every value is usable for any field size
    pub fn validate(&self) -> Result<(), TuningError> {
        let fractions = [
            ("player_radius", self.player_radius),
            ("player_home_x", self.player_home_x),
            ("player_start_y", self.player_start_y),
            ("gravity", self.gravity),
            ("jump", self.jump),
            ("gap", self.gap),
            ("min_segment", self.min_segment),
            ("wall_width", self.wall_width),
            ("scroll_speed", self.scroll_speed),
            ("spacing", self.spacing),
        ];
        for (name, value) in fractions {
            if !(value.is_finite() && value > 0.0 && value < 1.0) {
                return Err(TuningError::OutOfRange { name, value });
            }
        }
        if !(self.pixels_per_meteor.is_finite() && self.pixels_per_meteor > 0.0) {
            return Err(TuningError::OutOfRange {
                name: "pixels_per_meteor",
                value: self.pixels_per_meteor,
            });
        }
        if self.gap + 2.0 * self.min_segment >= 1.0 {
            return Err(TuningError::GapTooLarge {
                gap: self.gap,
                min_segment: self.min_segment,
            });
        }
        Ok(())
    }
}

/// Per-tick constants for one field size, in pixels
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Physics {
    pub radius: f32,
    pub home_x: f32,
    pub start_y: f32,
    pub gravity: f32,
    pub jump: f32,
    pub gap: f32,
    pub min_segment: f32,
    pub wall_width: f32,
    pub scroll_speed: f32,
    pub spacing: f32,
}

impl Physics {
    /// Scale the tuning fractions to a concrete field
    pub fn derive(field: FieldSize, tuning: &Tuning) -> Self {
        let (w, h) = (field.width(), field.height());
        Self {
            radius: w * tuning.player_radius,
            home_x: w * tuning.player_home_x,
            start_y: h * tuning.player_start_y,
            gravity: h * tuning.gravity,
            jump: h * tuning.jump,
            gap: h * tuning.gap,
            min_segment: h * tuning.min_segment,
            wall_width: w * tuning.wall_width,
            scroll_speed: w * tuning.scroll_speed,
            spacing: w * tuning.spacing,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: f32, b: f32) -> bool {
        (a - b).abs() < 1e-3
    }

    #[test]
    fn test_default_tuning_is_valid() {
        assert!(Tuning::default().validate().is_ok());
    }

    #[test]
    fn test_physics_for_800x600() {
        let field = FieldSize::new(800.0, 600.0).unwrap();
        let p = Physics::derive(field, &Tuning::default());
        assert!(approx(p.radius, 30.0));
        assert!(approx(p.home_x, 100.0));
        assert!(approx(p.start_y, 300.0));
        assert!(approx(p.gravity, 0.48));
        assert!(approx(p.jump, 9.0));
        assert!(approx(p.gap, 240.0));
        assert!(approx(p.min_segment, 60.0));
        assert!(approx(p.wall_width, 60.0));
        assert!(approx(p.scroll_speed, 2.4));
        assert!(approx(p.spacing, 320.0));
    }

    #[test]
    fn test_from_json_partial() {
        let tuning = Tuning::from_json(r#"{ "gravity": 0.001 }"#).unwrap();
        assert_eq!(tuning.gravity, 0.001);
        assert_eq!(tuning.gap, Tuning::default().gap);
    }

    #[test]
    fn test_from_json_rejects_bad_values() {
        assert!(matches!(
            Tuning::from_json("not json"),
            Err(TuningError::Parse(_))
        ));
        assert!(matches!(
            Tuning::from_json(r#"{ "jump": -0.2 }"#),
            Err(TuningError::OutOfRange { name: "jump", .. })
        ));
        assert!(matches!(
            Tuning::from_json(r#"{ "gap": 0.7, "min_segment": 0.2 }"#),
            Err(TuningError::GapTooLarge { .. })
        ));
    }
}
