//! Spacing annotation
//!
//! Derives the clear vertical distance between consecutive horizontal
//! panels for dimension lines. Faces are read through each panel's own
//! anchor convention, so a bottom's stored floor edge and a shelf's stored
//! center both yield the correct face.

use corpuskit_core::{format_length, MeasurementSystem};
use serde::{Deserialize, Serialize};

use crate::panel::{stacked_horizontal_panels, Panel, PanelId};
use crate::settings::LayoutSettings;

/// A dimension line between two stacked panels, in millimetres.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Spacing {
    /// Panel below the gap
    pub lower_panel: PanelId,
    /// Panel above the gap
    pub upper_panel: PanelId,
    /// Upper face of the lower panel
    pub y_start: f64,
    /// Lower face of the upper panel
    pub y_end: f64,
    /// Clear distance, rounded to whole millimetres
    pub distance_mm: i64,
}

impl Spacing {
    /// Text for the dimension line.
    ///
    /// Metric labels show the rounded `distance_mm`; imperial labels convert
    /// the exact gap so inches keep their precision.
    pub fn label(&self, system: MeasurementSystem) -> String {
        match system {
            MeasurementSystem::Metric => format_length(self.distance_mm as f64, system),
            MeasurementSystem::Imperial => format_length(self.y_end - self.y_start, system),
        }
    }

    /// Where the label sits along the dimension line.
    pub fn midpoint(&self) -> f64 {
        (self.y_start + self.y_end) / 2.0
    }
}

/// Clear distances between consecutive horizontal panels, bottom to top.
///
/// Gaps not larger than `settings.min_annotated_spacing_mm` are skipped.
pub fn compute_spacings(panels: &[Panel], settings: &LayoutSettings) -> Vec<Spacing> {
    let stacked = stacked_horizontal_panels(panels);

    stacked
        .windows(2)
        .filter_map(|pair| {
            let (lower, lower_anchor) = pair[0];
            let (upper, upper_anchor) = pair[1];

            let y_start = lower_anchor.upper_face(f64::from(lower.thickness()));
            let y_end = upper_anchor.lower_face(f64::from(upper.thickness()));
            let distance = y_end - y_start;

            (distance > settings.min_annotated_spacing_mm).then(|| Spacing {
                lower_panel: lower.id(),
                upper_panel: upper.id(),
                y_start,
                y_end,
                distance_mm: distance.round() as i64,
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::panel::{Dimensions, PanelType};
    use crate::vertical::{solve_vertical_layout, Redistribution};

    fn dims() -> Dimensions {
        Dimensions::new(564, 18, 540, 18)
    }

    #[test]
    fn test_bottom_shelf_top_faces() {
        let settings = LayoutSettings::default();
        let panels = vec![
            Panel::new(PanelType::Bottom, dims()),
            Panel::new(PanelType::Top, dims()),
            Panel::new(PanelType::Shelf, dims()),
        ];
        let panels = solve_vertical_layout(&panels, Redistribution::Force, &settings);
        let spacings = compute_spacings(&panels, &settings);

        // one shelf over 18..702: gap = (684 - 18) / 2 = 333
        assert_eq!(spacings.len(), 2);
        assert_eq!(spacings[0].y_start, 18.0);
        assert_eq!(spacings[0].y_end, 351.0);
        assert_eq!(spacings[0].distance_mm, 333);
        assert_eq!(spacings[1].y_start, 369.0);
        assert_eq!(spacings[1].y_end, 702.0);
        assert_eq!(spacings[1].lower_panel, panels[2].id());
        assert_eq!(spacings[1].upper_panel, panels[1].id());
    }

    #[test]
    fn test_small_gaps_suppressed() {
        let settings = LayoutSettings::default();
        let panels = vec![
            Panel::shelf_at(dims(), 100.0),
            Panel::shelf_at(dims(), 128.0),
            Panel::shelf_at(dims(), 156.5),
        ];
        // first gap is exactly 10 mm, second is 10.5 mm
        let spacings = compute_spacings(&panels, &settings);
        assert_eq!(spacings.len(), 1);
        assert_eq!(spacings[0].y_start, 137.0);
        assert_eq!(spacings[0].distance_mm, 11);
    }

    #[test]
    fn test_top_below_shelf_uses_top_edge() {
        let settings = LayoutSettings::default();
        let panels = vec![
            Panel::new(PanelType::Top, dims()),
            Panel::shelf_at(dims(), 800.0),
        ];
        let panels = solve_vertical_layout(&panels, Redistribution::Preserve, &settings);
        let spacings = compute_spacings(&panels, &settings);
        assert_eq!(spacings.len(), 1);
        assert_eq!(spacings[0].y_start, 720.0);
        assert_eq!(spacings[0].y_end, 791.0);
    }

    #[test]
    fn test_overlapping_panels_yield_no_spacing() {
        let settings = LayoutSettings::default();
        let panels = vec![Panel::shelf_at(dims(), 300.0), Panel::shelf_at(dims(), 305.0)];
        assert!(compute_spacings(&panels, &settings).is_empty());
    }

    #[test]
    fn test_label_and_midpoint() {
        let spacing = Spacing {
            lower_panel: PanelId::new(),
            upper_panel: PanelId::new(),
            y_start: 18.0,
            y_end: 175.5,
            distance_mm: 158,
        };
        assert_eq!(spacing.label(MeasurementSystem::Metric), "158 mm");
        assert_eq!(spacing.label(MeasurementSystem::Imperial), "6.201 in");
        assert_eq!(spacing.midpoint(), 96.75);
    }
}
