//! Panel model
//!
//! A panel is one structural board of the corpus. Its type decides which
//! vertical anchor it carries and what that anchor means:
//!
//! - `top` stores its **top edge** (the ceiling face)
//! - `bottom` stores its **bottom edge** (the floor face)
//! - `shelf` stores its **center**
//! - side panels carry no vertical anchor
//!
//! The asymmetry is part of the contract and is encoded in [`PanelSlot`] so
//! that every consumer has to state which convention it is reading.

use corpuskit_core::{parse_dimension, ValidationError, ValidationResult};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

use crate::settings::LayoutSettings;

/// Kind of structural board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PanelType {
    LeftSide,
    RightSide,
    Top,
    Bottom,
    Shelf,
}

impl PanelType {
    /// Every panel type in canonical order.
    pub const ALL: [PanelType; 5] = [
        PanelType::LeftSide,
        PanelType::RightSide,
        PanelType::Top,
        PanelType::Bottom,
        PanelType::Shelf,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::LeftSide => "left-side",
            Self::RightSide => "right-side",
            Self::Top => "top",
            Self::Bottom => "bottom",
            Self::Shelf => "shelf",
        }
    }

    /// At most one panel of a singleton type may exist in a corpus.
    pub fn is_singleton(&self) -> bool {
        !matches!(self, Self::Shelf)
    }

    /// Top, bottom and shelves span the carcass width and stack vertically.
    pub fn is_horizontal(&self) -> bool {
        matches!(self, Self::Top | Self::Bottom | Self::Shelf)
    }

    pub fn is_side(&self) -> bool {
        matches!(self, Self::LeftSide | Self::RightSide)
    }
}

impl fmt::Display for PanelType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PanelType {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase();
        if normalized.is_empty() {
            return Err(ValidationError::BlankType);
        }
        Self::ALL
            .into_iter()
            .find(|t| t.as_str() == normalized)
            .ok_or_else(|| ValidationError::UnknownType(s.trim().to_string()))
    }
}

/// Opaque, immutable panel identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PanelId(Uuid);

impl PanelId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for PanelId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for PanelId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Board dimensions in millimetres.
///
/// Side panels use `width` as their thin dimension and `height` as the
/// carcass height. Horizontal panels use `width` as the carcass width and
/// `thickness` as their vertical extent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dimensions {
    pub width: u32,
    pub height: u32,
    pub depth: u32,
    pub thickness: u32,
}

impl Dimensions {
    pub fn new(width: u32, height: u32, depth: u32, thickness: u32) -> Self {
        Self {
            width,
            height,
            depth,
            thickness,
        }
    }

    /// Clamp raw millimetre values into the configured bounds.
    pub fn clamped(
        width: f64,
        height: f64,
        depth: f64,
        thickness: f64,
        settings: &LayoutSettings,
    ) -> Self {
        Self {
            width: settings.size_bounds.clamp(width),
            height: settings.size_bounds.clamp(height),
            depth: settings.size_bounds.clamp(depth),
            thickness: settings.thickness_bounds.clamp(thickness),
        }
    }

    /// Re-clamp already stored values into the configured bounds.
    pub fn clamped_to(self, settings: &LayoutSettings) -> Self {
        Self::clamped(
            f64::from(self.width),
            f64::from(self.height),
            f64::from(self.depth),
            f64::from(self.thickness),
            settings,
        )
    }
}

/// Type-specific state of a panel, carrying only the anchor that type uses.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum PanelSlot {
    LeftSide,
    RightSide,
    Top {
        /// Y of the ceiling face
        #[serde(default, skip_serializing_if = "Option::is_none")]
        top_edge: Option<f64>,
    },
    Bottom {
        /// Y of the floor face
        #[serde(default, skip_serializing_if = "Option::is_none")]
        bottom_edge: Option<f64>,
    },
    Shelf {
        /// Y of the shelf midplane
        #[serde(default, skip_serializing_if = "Option::is_none")]
        center: Option<f64>,
    },
}

impl PanelSlot {
    /// A fresh slot with no vertical anchor yet.
    pub fn unpositioned(panel_type: PanelType) -> Self {
        match panel_type {
            PanelType::LeftSide => Self::LeftSide,
            PanelType::RightSide => Self::RightSide,
            PanelType::Top => Self::Top { top_edge: None },
            PanelType::Bottom => Self::Bottom { bottom_edge: None },
            PanelType::Shelf => Self::Shelf { center: None },
        }
    }

    pub fn panel_type(&self) -> PanelType {
        match self {
            Self::LeftSide => PanelType::LeftSide,
            Self::RightSide => PanelType::RightSide,
            Self::Top { .. } => PanelType::Top,
            Self::Bottom { .. } => PanelType::Bottom,
            Self::Shelf { .. } => PanelType::Shelf,
        }
    }

    pub fn anchor(&self) -> Option<VerticalAnchor> {
        match *self {
            Self::Top { top_edge } => top_edge.map(VerticalAnchor::TopEdge),
            Self::Bottom { bottom_edge } => bottom_edge.map(VerticalAnchor::BottomEdge),
            Self::Shelf { center } => center.map(VerticalAnchor::Center),
            Self::LeftSide | Self::RightSide => None,
        }
    }
}

/// A stored vertical position together with its convention.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum VerticalAnchor {
    /// The value is the panel's upper face
    TopEdge(f64),
    /// The value is the panel's lower face
    BottomEdge(f64),
    /// The value is the midpoint of the panel's thickness
    Center(f64),
}

impl VerticalAnchor {
    /// The raw stored millimetre value.
    pub fn value(&self) -> f64 {
        match *self {
            Self::TopEdge(y) | Self::BottomEdge(y) | Self::Center(y) => y,
        }
    }

    /// Y of the upper face for a panel of the given thickness.
    pub fn upper_face(&self, thickness: f64) -> f64 {
        match *self {
            Self::TopEdge(y) => y,
            Self::BottomEdge(y) => y + thickness,
            Self::Center(y) => y + thickness / 2.0,
        }
    }

    /// Y of the lower face for a panel of the given thickness.
    pub fn lower_face(&self, thickness: f64) -> f64 {
        match *self {
            Self::TopEdge(y) => y - thickness,
            Self::BottomEdge(y) => y,
            Self::Center(y) => y - thickness / 2.0,
        }
    }
}

/// A structural board in the corpus.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Panel {
    id: PanelId,
    #[serde(flatten)]
    dimensions: Dimensions,
    #[serde(flatten)]
    slot: PanelSlot,
}

impl Panel {
    /// Create an unpositioned panel with a fresh id.
    pub fn new(panel_type: PanelType, dimensions: Dimensions) -> Self {
        Self {
            id: PanelId::new(),
            dimensions,
            slot: PanelSlot::unpositioned(panel_type),
        }
    }

    /// Create a shelf already centered at `center` mm.
    pub fn shelf_at(dimensions: Dimensions, center: f64) -> Self {
        Self {
            id: PanelId::new(),
            dimensions,
            slot: PanelSlot::Shelf {
                center: Some(center),
            },
        }
    }

    pub fn id(&self) -> PanelId {
        self.id
    }

    pub fn panel_type(&self) -> PanelType {
        self.slot.panel_type()
    }

    pub fn slot(&self) -> &PanelSlot {
        &self.slot
    }

    pub(crate) fn slot_mut(&mut self) -> &mut PanelSlot {
        &mut self.slot
    }

    pub fn dimensions(&self) -> Dimensions {
        self.dimensions
    }

    pub(crate) fn clamp_dimensions(&mut self, settings: &LayoutSettings) {
        self.dimensions = self.dimensions.clamped_to(settings);
    }

    pub fn width(&self) -> u32 {
        self.dimensions.width
    }

    pub fn height(&self) -> u32 {
        self.dimensions.height
    }

    pub fn depth(&self) -> u32 {
        self.dimensions.depth
    }

    pub fn thickness(&self) -> u32 {
        self.dimensions.thickness
    }

    pub fn is_horizontal(&self) -> bool {
        self.panel_type().is_horizontal()
    }

    pub fn vertical_anchor(&self) -> Option<VerticalAnchor> {
        self.slot.anchor()
    }

    /// Stored Y in millimetres, whatever its convention.
    pub fn y_position(&self) -> Option<f64> {
        self.vertical_anchor().map(|anchor| anchor.value())
    }
}

/// A dimension field as entered: a number or the text of a form field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum DimensionInput {
    Number(f64),
    Text(String),
}

impl DimensionInput {
    /// Parse into a finite millimetre value.
    pub fn parse(&self, field: &str) -> ValidationResult<f64> {
        match self {
            Self::Number(value) if value.is_finite() => Ok(*value),
            Self::Number(value) => Err(ValidationError::invalid_dimension(
                field,
                format!("{} is not a finite number", value),
            )),
            Self::Text(text) => parse_dimension(text)
                .map_err(|reason| ValidationError::invalid_dimension(field, reason)),
        }
    }
}

impl From<f64> for DimensionInput {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<u32> for DimensionInput {
    fn from(value: u32) -> Self {
        Self::Number(f64::from(value))
    }
}

impl From<i32> for DimensionInput {
    fn from(value: i32) -> Self {
        Self::Number(f64::from(value))
    }
}

impl From<&str> for DimensionInput {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for DimensionInput {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

/// A panel the user asked to add, before validation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PanelCandidate {
    #[serde(rename = "type")]
    pub panel_type: String,
    pub width: DimensionInput,
    pub height: DimensionInput,
    pub depth: DimensionInput,
    pub thickness: DimensionInput,
}

impl PanelCandidate {
    pub fn new(
        panel_type: impl Into<String>,
        width: impl Into<DimensionInput>,
        height: impl Into<DimensionInput>,
        depth: impl Into<DimensionInput>,
        thickness: impl Into<DimensionInput>,
    ) -> Self {
        Self {
            panel_type: panel_type.into(),
            width: width.into(),
            height: height.into(),
            depth: depth.into(),
            thickness: thickness.into(),
        }
    }

    /// Parse the type and clamp all four dimensions.
    ///
    /// Out-of-range numbers are clamped, never rejected; only a blank or
    /// unknown type and non-numeric fields fail.
    pub fn validate(&self, settings: &LayoutSettings) -> ValidationResult<(PanelType, Dimensions)> {
        let panel_type: PanelType = self.panel_type.parse()?;

        let width = self.width.parse("width")?;
        let height = self.height.parse("height")?;
        let depth = self.depth.parse("depth")?;
        let thickness = self.thickness.parse("thickness")?;

        Ok((
            panel_type,
            Dimensions::clamped(width, height, depth, thickness, settings),
        ))
    }
}

/// Horizontal panels that have a vertical anchor, ordered by stored Y.
///
/// The sort is stable, so panels at equal Y keep their list order.
pub fn stacked_horizontal_panels(panels: &[Panel]) -> Vec<(&Panel, VerticalAnchor)> {
    let mut stacked: Vec<(&Panel, VerticalAnchor)> = panels
        .iter()
        .filter(|panel| panel.is_horizontal())
        .filter_map(|panel| panel.vertical_anchor().map(|anchor| (panel, anchor)))
        .collect();
    stacked.sort_by(|a, b| a.1.value().total_cmp(&b.1.value()));
    stacked
}
