//! # CorpusKit Core
//!
//! Core types and utilities shared by the CorpusKit crates.
//! Provides millimetre/scene unit conversion, dimension bounds,
//! the fixed layout constants and the validation error taxonomy.

pub mod constants;
pub mod error;
pub mod units;

pub use error::{ValidationError, ValidationResult};

pub use units::{
    clamp_dimension, format_length, from_scene_units, get_unit_label, parse_dimension,
    to_scene_units, DimensionBounds, MeasurementSystem,
};
