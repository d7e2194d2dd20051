//! Tunable layout defaults.
//!
//! `LayoutSettings::default()` reproduces the fixed carcass literals, so an
//! engine built without a config file behaves exactly like the stock layout.

use corpuskit_core::constants::{
    DEFAULT_CORPUS_DEPTH, DEFAULT_CORPUS_HEIGHT, DEFAULT_CORPUS_THICKNESS, DEFAULT_CORPUS_WIDTH,
    INTERIOR_SPAN_BOTH_SIDES, INTERIOR_SPAN_SINGLE_SIDE, MIN_ANNOTATED_SPACING_MM,
};
use corpuskit_core::DimensionBounds;
use serde::{Deserialize, Serialize};

/// Defaults and thresholds used by the layout engine, in millimetres.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutSettings {
    /// Carcass width when no side panel exists
    pub default_width: u32,
    /// Carcass height when no side panel exists
    pub default_height: u32,
    /// Carcass depth when no panel supplies one
    pub default_depth: u32,
    /// Board thickness when no side panel exists
    pub default_thickness: u32,
    /// Added to both side widths when both sides exist
    pub interior_span_both_sides: u32,
    /// Added to the single side width when only one side exists
    pub interior_span_single_side: u32,
    /// Gaps must exceed this to be annotated
    pub min_annotated_spacing_mm: f64,
    /// Bounds for width, height and depth
    pub size_bounds: DimensionBounds,
    /// Bounds for thickness
    pub thickness_bounds: DimensionBounds,
}

impl Default for LayoutSettings {
    fn default() -> Self {
        Self {
            default_width: DEFAULT_CORPUS_WIDTH,
            default_height: DEFAULT_CORPUS_HEIGHT,
            default_depth: DEFAULT_CORPUS_DEPTH,
            default_thickness: DEFAULT_CORPUS_THICKNESS,
            interior_span_both_sides: INTERIOR_SPAN_BOTH_SIDES,
            interior_span_single_side: INTERIOR_SPAN_SINGLE_SIDE,
            min_annotated_spacing_mm: MIN_ANNOTATED_SPACING_MM,
            size_bounds: DimensionBounds::SIZE,
            thickness_bounds: DimensionBounds::THICKNESS,
        }
    }
}

impl LayoutSettings {
    /// Create settings with the stock defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Check that the settings describe a usable layout.
    pub fn validate(&self) -> Result<(), String> {
        for (name, bounds) in [
            ("size_bounds", self.size_bounds),
            ("thickness_bounds", self.thickness_bounds),
        ] {
            if bounds.min == 0 || bounds.min > bounds.max {
                return Err(format!(
                    "{} must satisfy 0 < min <= max (got {}..{})",
                    name, bounds.min, bounds.max
                ));
            }
        }

        if self.default_width == 0
            || self.default_height == 0
            || self.default_depth == 0
            || self.default_thickness == 0
        {
            return Err("Default corpus dimensions must be > 0".to_string());
        }

        if !self.min_annotated_spacing_mm.is_finite() || self.min_annotated_spacing_mm < 0.0 {
            return Err("Minimum annotated spacing must be a non-negative number".to_string());
        }

        Ok(())
    }
}
