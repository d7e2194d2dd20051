//! Overlap detection between stacked horizontal panels.
//!
//! Every stored Y is read as a center with a `thickness / 2` half extent,
//! for `top` and `bottom` too even though those store edge values. The
//! check is therefore an approximation for the outermost boards. Changing it
//! to honour [`VerticalAnchor`](crate::panel::VerticalAnchor) would change
//! which layouts raise a warning, so it stays uniform.

use serde::{Deserialize, Serialize};

use crate::panel::{stacked_horizontal_panels, Panel, PanelId};

/// Two vertically adjacent panels whose extents intersect.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OverlapPair {
    /// The panel with the smaller stored Y
    pub lower: PanelId,
    /// The panel with the larger stored Y
    pub upper: PanelId,
    /// How far the extents intersect, in millimetres
    pub depth_mm: f64,
}

/// All adjacent pairs (in Y order) whose extents intersect.
pub fn find_overlaps(panels: &[Panel]) -> Vec<OverlapPair> {
    let stacked = stacked_horizontal_panels(panels);

    stacked
        .windows(2)
        .filter_map(|pair| {
            let (current, current_anchor) = pair[0];
            let (next, next_anchor) = pair[1];

            let current_top = current_anchor.value() + f64::from(current.thickness()) / 2.0;
            let next_bottom = next_anchor.value() - f64::from(next.thickness()) / 2.0;

            (current_top > next_bottom).then(|| OverlapPair {
                lower: current.id(),
                upper: next.id(),
                depth_mm: current_top - next_bottom,
            })
        })
        .collect()
}

/// True when any two adjacent horizontal panels intersect.
///
/// Advisory only; callers warn, they do not block the edit.
pub fn has_overlap(panels: &[Panel]) -> bool {
    !find_overlaps(panels).is_empty()
}
