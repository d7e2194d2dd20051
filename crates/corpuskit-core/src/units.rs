//! Unit conversion utilities
//!
//! Converts millimetre dimensions into scene units (metres), clamps
//! entered dimensions into their allowed bounds and formats lengths
//! for dimension labels in metric or imperial.

use crate::constants::{
    MAX_PANEL_SIZE, MAX_PANEL_THICKNESS, MIN_PANEL_SIZE, MIN_PANEL_THICKNESS, MM_PER_SCENE_UNIT,
};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Measurement system used for display
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MeasurementSystem {
    /// Metric system (mm)
    #[default]
    Metric,
    /// Imperial system (inches)
    Imperial,
}

impl fmt::Display for MeasurementSystem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Metric => write!(f, "Metric"),
            Self::Imperial => write!(f, "Imperial"),
        }
    }
}

impl FromStr for MeasurementSystem {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "metric" | "mm" => Ok(Self::Metric),
            "imperial" | "inch" | "in" => Ok(Self::Imperial),
            _ => Err(format!("Unknown measurement system: {}", s)),
        }
    }
}

/// Inclusive `[min, max]` range for a panel dimension in millimetres.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DimensionBounds {
    pub min: u32,
    pub max: u32,
}

impl DimensionBounds {
    /// Bounds for width, height and depth.
    pub const SIZE: Self = Self {
        min: MIN_PANEL_SIZE,
        max: MAX_PANEL_SIZE,
    };

    /// Bounds for board thickness.
    pub const THICKNESS: Self = Self {
        min: MIN_PANEL_THICKNESS,
        max: MAX_PANEL_THICKNESS,
    };

    pub fn new(min: u32, max: u32) -> Self {
        Self { min, max }
    }

    pub fn contains(&self, value: u32) -> bool {
        (self.min..=self.max).contains(&value)
    }

    /// Round and clamp `value` into these bounds.
    pub fn clamp(&self, value: f64) -> u32 {
        clamp_dimension(value, self.min, self.max)
    }
}

/// Convert millimetres to scene units (1000 mm = 1 unit).
pub fn to_scene_units(mm: f64) -> f64 {
    mm / MM_PER_SCENE_UNIT
}

/// Convert scene units back to millimetres.
pub fn from_scene_units(units: f64) -> f64 {
    units * MM_PER_SCENE_UNIT
}

/// Round `value` to the nearest integer and clamp it into `[min, max]`.
///
/// Never panics: NaN lands on `min`, infinities land on the nearest bound.
pub fn clamp_dimension(value: f64, min: u32, max: u32) -> u32 {
    if value.is_nan() {
        return min;
    }
    let rounded = value.round();
    if rounded <= f64::from(min) {
        min
    } else if rounded >= f64::from(max) {
        max
    } else {
        rounded as u32
    }
}

/// Parse a dimension field entered as text.
///
/// Blank input, unparseable text and non-finite numbers are rejected.
pub fn parse_dimension(input: &str) -> Result<f64, String> {
    let input = input.trim();
    if input.is_empty() {
        return Err("value is blank".to_string());
    }

    let value = input.parse::<f64>().map_err(|e| e.to_string())?;
    if !value.is_finite() {
        return Err(format!("{} is not a finite number", input));
    }
    Ok(value)
}

/// Format length value for display
///
/// * `value_mm` - Value in millimetres
/// * `system` - Target measurement system
pub fn format_length(value_mm: f64, system: MeasurementSystem) -> String {
    match system {
        MeasurementSystem::Metric => format!("{:.0} mm", value_mm),
        MeasurementSystem::Imperial => format!("{:.3} in", value_mm / 25.4),
    }
}

/// Get the unit label for the given system ("mm" or "in")
pub fn get_unit_label(system: MeasurementSystem) -> &'static str {
    match system {
        MeasurementSystem::Metric => "mm",
        MeasurementSystem::Imperial => "in",
    }
}
