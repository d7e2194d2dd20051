//! Envelope and placement calculation
//!
//! The envelope is the overall bounding box of the corpus, derived fresh
//! from whichever panels exist. Placements are the 3D box size and center of
//! every panel in scene units, with the origin at the horizontal and depth
//! center and the floor at `y = 0`.

use corpuskit_core::to_scene_units;
use nalgebra::Vector3;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::panel::{Panel, PanelId, PanelSlot, PanelType};
use crate::settings::LayoutSettings;

/// Overall corpus dimensions in millimetres.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Envelope {
    pub width: u32,
    pub height: u32,
    pub depth: u32,
    pub thickness: u32,
    /// Reserved for inset tops; always 0
    pub top_offset: u32,
    /// Reserved for inset bottoms; always 0
    pub bottom_offset: u32,
}

impl Envelope {
    /// The envelope of an empty corpus.
    pub fn default_for(settings: &LayoutSettings) -> Self {
        Self {
            width: settings.default_width,
            height: settings.default_height,
            depth: settings.default_depth,
            thickness: settings.default_thickness,
            top_offset: 0,
            bottom_offset: 0,
        }
    }

    /// Envelope size in scene units.
    pub fn scene_size(&self) -> Vector3<f64> {
        Vector3::new(
            to_scene_units(f64::from(self.width)),
            to_scene_units(f64::from(self.height)),
            to_scene_units(f64::from(self.depth)),
        )
    }
}

impl Default for Envelope {
    fn default() -> Self {
        Self::default_for(&LayoutSettings::default())
    }
}

/// Derive the corpus envelope from the current panels.
pub fn compute_envelope(panels: &[Panel], settings: &LayoutSettings) -> Envelope {
    if panels.is_empty() {
        return Envelope::default_for(settings);
    }

    let find = |panel_type: PanelType| panels.iter().find(|p| p.panel_type() == panel_type);
    let left = find(PanelType::LeftSide);
    let right = find(PanelType::RightSide);
    let side = left.or(right);

    let height = side.map(Panel::height).unwrap_or(settings.default_height);
    let depth = side
        .or_else(|| find(PanelType::Top))
        .or_else(|| find(PanelType::Bottom))
        .map(Panel::depth)
        .unwrap_or(settings.default_depth);
    let thickness = side.map(Panel::thickness).unwrap_or(settings.default_thickness);

    // Saturate: panels built directly or loaded from disk may bypass clamping.
    let width = match (left, right) {
        (Some(left), Some(right)) => left
            .width()
            .saturating_add(right.width())
            .saturating_add(settings.interior_span_both_sides),
        (Some(only), None) | (None, Some(only)) => {
            only.width().saturating_add(settings.interior_span_single_side)
        }
        (None, None) => settings.default_width,
    };

    debug!(
        "Envelope {}x{}x{} mm (thickness {})",
        width, height, depth, thickness
    );

    Envelope {
        width,
        height,
        depth,
        thickness,
        top_offset: 0,
        bottom_offset: 0,
    }
}

/// 3D box of one panel, in scene units.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Placement {
    pub panel_id: PanelId,
    pub panel_type: PanelType,
    /// Box extents along x, y, z
    pub size: Vector3<f64>,
    /// Box center
    pub position: Vector3<f64>,
}

impl Placement {
    pub fn min_corner(&self) -> Vector3<f64> {
        self.position - self.size / 2.0
    }

    pub fn max_corner(&self) -> Vector3<f64> {
        self.position + self.size / 2.0
    }
}

/// Compute the 3D box of every panel against `envelope`.
///
/// Side panels sit flush with the left and right edges. Horizontal panels
/// are centered in x and z and take their thickness on the vertical axis:
/// the bottom rests on the floor, the top touches the ceiling and shelves
/// sit at their stored center (or mid-height when unplaced).
pub fn compute_placements(panels: &[Panel], envelope: &Envelope) -> Vec<Placement> {
    let envelope_width = f64::from(envelope.width);
    let envelope_height = f64::from(envelope.height);

    panels
        .iter()
        .map(|panel| {
            let width = f64::from(panel.width());
            let height = f64::from(panel.height());
            let depth = f64::from(panel.depth());
            let thickness = f64::from(panel.thickness());

            let (size, position) = match panel.slot() {
                PanelSlot::LeftSide => (
                    [thickness, height, depth],
                    [-(envelope_width / 2.0 - thickness / 2.0), height / 2.0, 0.0],
                ),
                PanelSlot::RightSide => (
                    [thickness, height, depth],
                    [envelope_width / 2.0 - thickness / 2.0, height / 2.0, 0.0],
                ),
                PanelSlot::Top { .. } => (
                    [width, thickness, depth],
                    [0.0, envelope_height - thickness / 2.0, 0.0],
                ),
                PanelSlot::Bottom { .. } => ([width, thickness, depth], [0.0, thickness / 2.0, 0.0]),
                PanelSlot::Shelf { center } => (
                    [width, thickness, depth],
                    [0.0, center.unwrap_or(envelope_height / 2.0), 0.0],
                ),
            };

            Placement {
                panel_id: panel.id(),
                panel_type: panel.panel_type(),
                size: scene_vector(size),
                position: scene_vector(position),
            }
        })
        .collect()
}

fn scene_vector(mm: [f64; 3]) -> Vector3<f64> {
    Vector3::new(
        to_scene_units(mm[0]),
        to_scene_units(mm[1]),
        to_scene_units(mm[2]),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::panel::Dimensions;

    const EPS: f64 = 1e-12;

    fn side(panel_type: PanelType) -> Panel {
        Panel::new(panel_type, Dimensions::new(18, 720, 560, 18))
    }

    fn assert_vec_eq(actual: Vector3<f64>, expected: [f64; 3]) {
        for (a, e) in actual.iter().zip(expected.iter()) {
            assert!((a - e).abs() < EPS, "expected {:?}, got {:?}", expected, actual);
        }
    }

    #[test]
    fn test_empty_envelope_defaults() {
        let envelope = compute_envelope(&[], &LayoutSettings::default());
        assert_eq!(
            envelope,
            Envelope {
                width: 600,
                height: 720,
                depth: 560,
                thickness: 18,
                top_offset: 0,
                bottom_offset: 0,
            }
        );
    }

    #[test]
    fn test_width_with_both_sides() {
        let panels = vec![side(PanelType::LeftSide), side(PanelType::RightSide)];
        let envelope = compute_envelope(&panels, &LayoutSettings::default());
        assert_eq!(envelope.width, 600);
    }

    #[test]
    fn test_width_with_single_side() {
        let panels = vec![Panel::new(
            PanelType::RightSide,
            Dimensions::new(19, 800, 500, 19),
        )];
        let envelope = compute_envelope(&panels, &LayoutSettings::default());
        assert_eq!(envelope.width, 19 + 582);
        assert_eq!(envelope.height, 800);
        assert_eq!(envelope.depth, 500);
        assert_eq!(envelope.thickness, 19);
    }

    #[test]
    fn test_depth_falls_back_to_top_then_bottom() {
        let settings = LayoutSettings::default();
        let bottom = Panel::new(PanelType::Bottom, Dimensions::new(564, 18, 480, 18));
        let top = Panel::new(PanelType::Top, Dimensions::new(564, 18, 520, 18));

        let envelope = compute_envelope(&[bottom.clone()], &settings);
        assert_eq!(envelope.depth, 480);
        assert_eq!(envelope.width, 600);
        assert_eq!(envelope.height, 720);

        let envelope = compute_envelope(&[bottom, top], &settings);
        assert_eq!(envelope.depth, 520);
    }

    #[test]
    fn test_side_placements_flush_to_edges() {
        let panels = vec![side(PanelType::LeftSide), side(PanelType::RightSide)];
        let envelope = compute_envelope(&panels, &LayoutSettings::default());
        let placements = compute_placements(&panels, &envelope);

        assert_vec_eq(placements[0].size, [0.018, 0.72, 0.56]);
        assert_vec_eq(placements[0].position, [-0.291, 0.36, 0.0]);
        assert_vec_eq(placements[1].position, [0.291, 0.36, 0.0]);
        assert!((placements[0].min_corner().x + 0.3).abs() < EPS);
        assert!((placements[1].max_corner().x - 0.3).abs() < EPS);
    }

    #[test]
    fn test_horizontal_placements_use_vertical_thickness() {
        let dims = Dimensions::new(564, 18, 540, 18);
        let panels = vec![
            Panel::new(PanelType::Top, dims),
            Panel::new(PanelType::Bottom, dims),
            Panel::shelf_at(dims, 184.5),
            Panel::new(PanelType::Shelf, dims),
        ];
        let envelope = Envelope::default();
        let placements = compute_placements(&panels, &envelope);

        assert_vec_eq(placements[0].size, [0.564, 0.018, 0.54]);
        assert_vec_eq(placements[0].position, [0.0, 0.711, 0.0]);
        assert_vec_eq(placements[1].position, [0.0, 0.009, 0.0]);
        assert_vec_eq(placements[2].position, [0.0, 0.1845, 0.0]);
        assert_vec_eq(placements[3].position, [0.0, 0.36, 0.0]);
    }

    #[test]
    fn test_oversized_side_width_saturates() {
        let settings = LayoutSettings::default();
        let huge = Panel::new(PanelType::LeftSide, Dimensions::new(u32::MAX, 720, 560, 18));

        let both = compute_envelope(&[huge.clone(), side(PanelType::RightSide)], &settings);
        assert_eq!(both.width, u32::MAX);

        let single = compute_envelope(&[huge], &settings);
        assert_eq!(single.width, u32::MAX);
    }

    #[test]
    fn test_envelope_scene_size() {
        assert_vec_eq(Envelope::default().scene_size(), [0.6, 0.72, 0.56]);
    }
}
