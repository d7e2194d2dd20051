//! Renderer-facing snapshot of a corpus.

use serde::{Deserialize, Serialize};

use crate::envelope::{compute_placements, Envelope, Placement};
use crate::panel::Panel;
use crate::registry::PanelRegistry;
use crate::spacing::Spacing;

/// All derived geometry for one registry snapshot.
///
/// A visualisation consumer needs nothing else: it never re-derives
/// positions from the panel list itself.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CorpusScene {
    pub envelope: Envelope,
    pub placements: Vec<Placement>,
    pub spacings: Vec<Spacing>,
    pub has_overlap: bool,
    pub panels: Vec<Panel>,
}

impl CorpusScene {
    pub fn build(registry: &PanelRegistry) -> Self {
        let envelope = registry.envelope();
        Self {
            placements: compute_placements(registry.panels(), &envelope),
            envelope,
            spacings: registry.spacings(),
            has_overlap: registry.has_overlap(),
            panels: registry.panels().to_vec(),
        }
    }

    pub fn to_json_pretty(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}
