//! Panel registry
//!
//! The registry is an immutable snapshot of the panels the user has added,
//! in insertion order. Every edit returns a new snapshot with the vertical
//! layout already reconciled, so callers can swap the whole value and
//! re-render without any shared mutable state.
//!
//! # Reconciliation
//!
//! - adding or removing a shelf forces a full equal-gap redistribution
//! - any other add or remove keeps user-positioned shelves where they are
//! - top and bottom are always re-pinned to the current corpus height
//!
//! Deserialized snapshots go through the same checks as edits: singleton
//! types may appear once and every dimension is clamped into bounds.

use corpuskit_core::{ValidationError, ValidationResult};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::envelope::{compute_envelope, compute_placements, Envelope, Placement};
use crate::error::{LayoutError, LayoutResult};
use crate::overlap::{find_overlaps, OverlapPair};
use crate::panel::{Panel, PanelCandidate, PanelId, PanelSlot, PanelType};
use crate::scene::CorpusScene;
use crate::settings::LayoutSettings;
use crate::spacing::{compute_spacings, Spacing};
use crate::vertical::{solve_vertical_layout, Redistribution};

/// Ordered collection of panels making up one corpus.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RegistrySnapshot")]
pub struct PanelRegistry {
    panels: Vec<Panel>,
    settings: LayoutSettings,
}

/// Unchecked wire form of a registry.
#[derive(Deserialize)]
struct RegistrySnapshot {
    panels: Vec<Panel>,
    #[serde(default)]
    settings: LayoutSettings,
}

impl TryFrom<RegistrySnapshot> for PanelRegistry {
    type Error = LayoutError;

    fn try_from(snapshot: RegistrySnapshot) -> LayoutResult<Self> {
        let RegistrySnapshot {
            panels: loaded,
            settings,
        } = snapshot;
        settings.validate().map_err(LayoutError::InvalidSettings)?;

        let mut panels: Vec<Panel> = Vec::with_capacity(loaded.len());
        for mut panel in loaded {
            let panel_type = panel.panel_type();
            if panel_type.is_singleton() && panels.iter().any(|p| p.panel_type() == panel_type) {
                return Err(ValidationError::DuplicatePanel(panel_type.to_string()).into());
            }
            panel.clamp_dimensions(&settings);
            panels.push(panel);
        }
        debug!("Loaded registry snapshot with {} panels", panels.len());

        Ok(Self::with_settings(settings).reconciled(panels, Redistribution::Preserve))
    }
}

impl PanelRegistry {
    /// Create an empty registry with the stock layout settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty registry with custom layout settings
    pub fn with_settings(settings: LayoutSettings) -> Self {
        Self {
            panels: Vec::new(),
            settings,
        }
    }

    pub fn settings(&self) -> &LayoutSettings {
        &self.settings
    }

    pub fn panels(&self) -> &[Panel] {
        &self.panels
    }

    pub fn len(&self) -> usize {
        self.panels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.panels.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Panel> {
        self.panels.iter()
    }

    pub fn get(&self, id: PanelId) -> Option<&Panel> {
        self.panels.iter().find(|panel| panel.id() == id)
    }

    /// First panel of the given type, if any.
    pub fn find_by_type(&self, panel_type: PanelType) -> Option<&Panel> {
        self.panels.iter().find(|panel| panel.panel_type() == panel_type)
    }

    pub fn shelves(&self) -> impl Iterator<Item = &Panel> {
        self.panels
            .iter()
            .filter(|panel| panel.panel_type() == PanelType::Shelf)
    }

    /// Validate, clamp and append a candidate panel.
    ///
    /// On failure the registry is untouched; the caller decides how to
    /// surface the error.
    pub fn add_panel(&self, candidate: &PanelCandidate) -> ValidationResult<(Self, PanelId)> {
        let (panel_type, dimensions) = candidate.validate(&self.settings)?;

        if panel_type.is_singleton() && self.find_by_type(panel_type).is_some() {
            return Err(ValidationError::DuplicatePanel(panel_type.to_string()));
        }

        let panel = Panel::new(panel_type, dimensions);
        let id = panel.id();
        debug!("Adding {} panel {} ({:?})", panel_type, id, dimensions);

        let mut panels = self.panels.clone();
        panels.push(panel);

        Ok((self.reconciled(panels, mode_for(panel_type)), id))
    }

    /// Remove the panel with the given id; unknown ids leave the layout as is.
    pub fn remove_panel(&self, id: PanelId) -> Self {
        let Some(removed) = self.get(id) else {
            debug!("Remove ignored, no panel {}", id);
            return self.clone();
        };
        let panel_type = removed.panel_type();
        debug!("Removing {} panel {}", panel_type, id);

        let panels = self
            .panels
            .iter()
            .filter(|panel| panel.id() != id)
            .cloned()
            .collect();

        self.reconciled(panels, mode_for(panel_type))
    }

    /// Set a shelf's center to a user-chosen height in millimetres.
    ///
    /// The position is sticky across later non-forced recomputes.
    pub fn set_shelf_position(&self, id: PanelId, y_mm: f64) -> LayoutResult<Self> {
        if !y_mm.is_finite() {
            return Err(LayoutError::InvalidPosition(y_mm));
        }

        let mut panels = self.panels.clone();
        let panel = panels
            .iter_mut()
            .find(|panel| panel.id() == id)
            .ok_or(LayoutError::PanelNotFound(id))?;

        match panel.slot_mut() {
            PanelSlot::Shelf { center } => *center = Some(y_mm),
            other => {
                return Err(LayoutError::NotAShelf {
                    id,
                    panel_type: other.panel_type(),
                })
            }
        }
        debug!("Shelf {} moved to {:.1} mm", id, y_mm);

        Ok(self.reconciled(panels, Redistribution::Preserve))
    }

    /// Discard user shelf positions and re-spread every shelf evenly.
    pub fn redistribute_shelves(&self) -> Self {
        self.reconciled(self.panels.clone(), Redistribution::Force)
    }

    /// Panel types that can still be added.
    pub fn available_types_to_add(&self) -> Vec<PanelType> {
        available_types_to_add(&self.panels)
    }

    pub fn envelope(&self) -> Envelope {
        compute_envelope(&self.panels, &self.settings)
    }

    pub fn placements(&self) -> Vec<Placement> {
        compute_placements(&self.panels, &self.envelope())
    }

    pub fn spacings(&self) -> Vec<Spacing> {
        compute_spacings(&self.panels, &self.settings)
    }

    pub fn overlaps(&self) -> Vec<OverlapPair> {
        find_overlaps(&self.panels)
    }

    pub fn has_overlap(&self) -> bool {
        !self.overlaps().is_empty()
    }

    /// Overlap check for a committed edit; logs a warning when panels collide.
    pub fn check_overlap(&self) -> bool {
        let overlaps = self.overlaps();
        for pair in &overlaps {
            warn!(
                "Panels {} and {} overlap by {:.1} mm",
                pair.lower, pair.upper, pair.depth_mm
            );
        }
        !overlaps.is_empty()
    }

    /// Everything a renderer needs for the current snapshot.
    pub fn scene(&self) -> CorpusScene {
        CorpusScene::build(self)
    }

    fn reconciled(&self, panels: Vec<Panel>, mode: Redistribution) -> Self {
        Self {
            panels: solve_vertical_layout(&panels, mode, &self.settings),
            settings: self.settings.clone(),
        }
    }
}

/// Panel types not yet present as singletons; shelves are always available.
pub fn available_types_to_add(panels: &[Panel]) -> Vec<PanelType> {
    PanelType::ALL
        .into_iter()
        .filter(|panel_type| {
            !panel_type.is_singleton() || !panels.iter().any(|p| p.panel_type() == *panel_type)
        })
        .collect()
}

fn mode_for(panel_type: PanelType) -> Redistribution {
    match panel_type {
        PanelType::Shelf => Redistribution::Force,
        _ => Redistribution::Preserve,
    }
}
