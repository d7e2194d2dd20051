//! # CorpusKit Layout
//!
//! The panel-layout and spacing engine for furniture carcasses.
//!
//! Data flows one way:
//!
//! 1. **Registry** - ordered panels, one each of left/right side, top and bottom, any number of shelves
//! 2. **Vertical solver** - pins top and bottom, spreads shelves with equal gaps
//! 3. **Overlap check** - flags horizontal panels whose extents intersect
//! 4. **Envelope and placements** - overall corpus box and per-panel 3D boxes
//! 5. **Spacing** - clear distances between stacked panels for dimension lines
//!
//! Every function is pure over an in-memory panel list. Registry edits return
//! new snapshots.

pub mod envelope;
pub mod error;
pub mod overlap;
pub mod panel;
pub mod registry;
pub mod scene;
pub mod settings;
pub mod spacing;
pub mod vertical;

pub use envelope::{compute_envelope, compute_placements, Envelope, Placement};
pub use error::{LayoutError, LayoutResult};
pub use overlap::{find_overlaps, has_overlap, OverlapPair};
pub use panel::{
    Dimensions, DimensionInput, Panel, PanelCandidate, PanelId, PanelSlot, PanelType,
    VerticalAnchor,
};
pub use registry::{available_types_to_add, PanelRegistry};
pub use scene::CorpusScene;
pub use settings::LayoutSettings;
pub use spacing::{compute_spacings, Spacing};
pub use vertical::{
    corpus_height, distribute_shelves, solve_vertical_layout, Redistribution, ShelfDistribution,
    VerticalBounds,
};
