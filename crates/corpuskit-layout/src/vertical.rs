//! Vertical layout solver
//!
//! Recomputes the stored Y of every horizontal panel:
//!
//! - `top` is pinned to the corpus height (its ceiling face)
//! - `bottom` is pinned to 0 (its floor face)
//! - shelves are spread between the inner faces of bottom and top so that
//!   every gap between consecutive boards is equal, and store their center
//!
//! Shelves the user has positioned are sticky unless a forced
//! redistribution is requested. Shelves that do not fit produce negative
//! gaps; overlap detection reports that, the solver never fails.

use tracing::debug;

use crate::panel::{Panel, PanelSlot, PanelType};
use crate::settings::LayoutSettings;

/// Whether existing shelf positions survive a recompute.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Redistribution {
    /// Keep user-set shelf centers, only place shelves that have none
    #[default]
    Preserve,
    /// Re-spread every shelf with equal gaps
    Force,
}

/// The usable vertical span between bottom and top, in millimetres.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VerticalBounds {
    /// Height of the carcass
    pub corpus_height: f64,
    /// Upper face of the bottom panel, or 0
    pub lower: f64,
    /// Lower face of the top panel, or the corpus height
    pub upper: f64,
}

impl VerticalBounds {
    pub fn from_panels(panels: &[Panel], settings: &LayoutSettings) -> Self {
        let corpus_height = f64::from(corpus_height(panels, settings));

        let lower = find_panel(panels, PanelType::Bottom)
            .map(|bottom| f64::from(bottom.thickness()))
            .unwrap_or(0.0);
        let upper = find_panel(panels, PanelType::Top)
            .map(|top| corpus_height - f64::from(top.thickness()))
            .unwrap_or(corpus_height);

        Self {
            corpus_height,
            lower,
            upper,
        }
    }

    pub fn available_space(&self) -> f64 {
        self.upper - self.lower
    }
}

/// Equal-gap placement of a run of shelves.
#[derive(Debug, Clone, PartialEq)]
pub struct ShelfDistribution {
    /// Size of each of the `n + 1` gaps; negative when shelves do not fit
    pub gap: f64,
    /// Shelf centers in input order
    pub centers: Vec<f64>,
}

/// Height of the carcass: left side, else right side, else the default.
pub fn corpus_height(panels: &[Panel], settings: &LayoutSettings) -> u32 {
    find_panel(panels, PanelType::LeftSide)
        .or_else(|| find_panel(panels, PanelType::RightSide))
        .map(|side| side.height())
        .unwrap_or(settings.default_height)
}

/// Spread shelves of the given thicknesses across `bounds` with equal gaps
/// below the first shelf, between each pair, and above the last.
pub fn distribute_shelves(thicknesses: &[f64], bounds: &VerticalBounds) -> ShelfDistribution {
    if thicknesses.is_empty() {
        return ShelfDistribution {
            gap: bounds.available_space(),
            centers: Vec::new(),
        };
    }

    let total_thickness: f64 = thicknesses.iter().sum();
    let gap = (bounds.available_space() - total_thickness) / (thicknesses.len() + 1) as f64;

    let mut cursor = bounds.lower + gap;
    let centers = thicknesses
        .iter()
        .map(|&thickness| {
            let center = cursor + thickness / 2.0;
            cursor += thickness + gap;
            center
        })
        .collect();

    ShelfDistribution { gap, centers }
}

/// Recompute the vertical anchors of all horizontal panels.
///
/// Returns a new panel list in the same order; side panels pass through.
pub fn solve_vertical_layout(
    panels: &[Panel],
    mode: Redistribution,
    settings: &LayoutSettings,
) -> Vec<Panel> {
    let bounds = VerticalBounds::from_panels(panels, settings);

    let shelf_thicknesses: Vec<f64> = panels
        .iter()
        .filter(|panel| panel.panel_type() == PanelType::Shelf)
        .map(|shelf| f64::from(shelf.thickness()))
        .collect();

    let needs_distribution = mode == Redistribution::Force
        || panels
            .iter()
            .any(|panel| matches!(panel.slot(), PanelSlot::Shelf { center: None }));

    let distribution = if needs_distribution && !shelf_thicknesses.is_empty() {
        let distribution = distribute_shelves(&shelf_thicknesses, &bounds);
        debug!(
            "Distributing {} shelves ({:?}) over {:.1}..{:.1} mm, gap {:.2} mm",
            shelf_thicknesses.len(),
            mode,
            bounds.lower,
            bounds.upper,
            distribution.gap
        );
        Some(distribution)
    } else {
        None
    };

    let mut shelf_index = 0;
    panels
        .iter()
        .map(|panel| {
            let mut panel = panel.clone();
            match panel.slot_mut() {
                PanelSlot::Top { top_edge } => *top_edge = Some(bounds.corpus_height),
                PanelSlot::Bottom { bottom_edge } => *bottom_edge = Some(0.0),
                PanelSlot::Shelf { center } => {
                    let slot = distribution
                        .as_ref()
                        .and_then(|d| d.centers.get(shelf_index).copied());
                    shelf_index += 1;
                    if mode == Redistribution::Force || center.is_none() {
                        *center = slot;
                    }
                }
                PanelSlot::LeftSide | PanelSlot::RightSide => {}
            }
            panel
        })
        .collect()
}

fn find_panel(panels: &[Panel], panel_type: PanelType) -> Option<&Panel> {
    panels.iter().find(|panel| panel.panel_type() == panel_type)
}
