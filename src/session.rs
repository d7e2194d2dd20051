//! Session replay
//!
//! A session file records the edits a user made in the corpus editor:
//! panels added (optionally labelled), panels removed, shelves dragged to a
//! new height and explicit redistributions. Replaying it against an empty
//! registry reproduces the final corpus.

use anyhow::{bail, Context, Result};
use corpuskit_layout::{CorpusScene, LayoutSettings, PanelCandidate, PanelId, PanelRegistry};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;
use tracing::{info, warn};

/// One recorded edit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "kebab-case")]
pub enum SessionOp {
    Add {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        label: Option<String>,
        #[serde(flatten)]
        panel: PanelCandidate,
    },
    Remove {
        label: String,
    },
    SetShelf {
        label: String,
        y: f64,
    },
    Redistribute,
}

/// A recorded editing session.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Session {
    #[serde(default)]
    pub ops: Vec<SessionOp>,
}

impl Session {
    /// Load a session from a `.json` or `.toml` file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read session file {}", path.display()))?;

        match path.extension().and_then(|ext| ext.to_str()) {
            Some("json") => serde_json::from_str(&content)
                .with_context(|| format!("Invalid JSON session {}", path.display())),
            Some("toml") => toml::from_str(&content)
                .with_context(|| format!("Invalid TOML session {}", path.display())),
            _ => bail!("Session file must be .json or .toml"),
        }
    }
}

/// Result of replaying a session.
#[derive(Debug, Clone)]
pub struct ReplayOutcome {
    pub registry: PanelRegistry,
    /// Edits that were rejected and skipped
    pub rejected: usize,
    /// Shelf moves that left panels overlapping
    pub overlap_warnings: usize,
}

impl ReplayOutcome {
    pub fn scene(&self) -> CorpusScene {
        self.registry.scene()
    }
}

/// Replay `session` against an empty registry.
///
/// Rejected edits are logged and skipped; they never abort the replay.
pub fn replay(session: &Session, settings: LayoutSettings) -> ReplayOutcome {
    let mut registry = PanelRegistry::with_settings(settings);
    let mut labels: HashMap<String, PanelId> = HashMap::new();
    let mut rejected = 0;
    let mut overlap_warnings = 0;

    for (index, op) in session.ops.iter().enumerate() {
        match op {
            SessionOp::Add { label, panel } => match registry.add_panel(panel) {
                Ok((next, id)) => {
                    registry = next;
                    if let Some(label) = label {
                        labels.insert(label.clone(), id);
                    }
                }
                Err(e) => {
                    warn!("Op {}: add rejected: {}", index, e);
                    rejected += 1;
                }
            },
            SessionOp::Remove { label } => match labels.remove(label) {
                Some(id) => registry = registry.remove_panel(id),
                None => {
                    warn!("Op {}: no panel labelled '{}'", index, label);
                    rejected += 1;
                }
            },
            SessionOp::SetShelf { label, y } => {
                let Some(&id) = labels.get(label) else {
                    warn!("Op {}: no panel labelled '{}'", index, label);
                    rejected += 1;
                    continue;
                };
                match registry.set_shelf_position(id, *y) {
                    Ok(next) => {
                        registry = next;
                        if registry.check_overlap() {
                            overlap_warnings += 1;
                        }
                    }
                    Err(e) => {
                        warn!("Op {}: {}", index, e);
                        rejected += 1;
                    }
                }
            }
            SessionOp::Redistribute => registry = registry.redistribute_shelves(),
        }
    }

    info!(
        "Replayed {} ops: {} panels, {} rejected",
        session.ops.len(),
        registry.len(),
        rejected
    );

    ReplayOutcome {
        registry,
        rejected,
        overlap_warnings,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use corpuskit_core::MeasurementSystem;
    use corpuskit_settings::Config;
    use tempfile::TempDir;

    const SESSION_JSON: &str = r#"{
        "ops": [
            { "op": "add", "type": "left-side", "width": 18, "height": 720, "depth": 560, "thickness": 18 },
            { "op": "add", "type": "right-side", "width": "18", "height": "720", "depth": "560", "thickness": "18" },
            { "op": "add", "type": "bottom", "width": 564, "height": 18, "depth": 540, "thickness": 18 },
            { "op": "add", "type": "top", "width": 564, "height": 18, "depth": 540, "thickness": 18 },
            { "op": "add", "label": "a", "type": "shelf", "width": 564, "height": 18, "depth": 540, "thickness": 18 },
            { "op": "add", "label": "b", "type": "shelf", "width": 564, "height": 18, "depth": 540, "thickness": 18 },
            { "op": "add", "label": "c", "type": "shelf", "width": 564, "height": 18, "depth": 540, "thickness": 18 }
        ]
    }"#;

    fn parse(json: &str) -> Session {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn test_replay_builds_corpus() {
        let outcome = replay(&parse(SESSION_JSON), LayoutSettings::default());
        assert_eq!(outcome.rejected, 0);
        assert_eq!(outcome.registry.len(), 7);

        let scene = outcome.scene();
        assert_eq!(scene.envelope.width, 600);
        assert_eq!(scene.spacings.len(), 4);
        assert!(!scene.has_overlap);
    }

    #[test]
    fn test_replay_counts_rejections_and_overlaps() {
        let mut session = parse(SESSION_JSON);
        session.ops.push(SessionOp::SetShelf {
            label: "b".to_string(),
            y: 190.0,
        });
        session.ops.push(SessionOp::Remove {
            label: "missing".to_string(),
        });
        session.ops.push(SessionOp::Add {
            label: None,
            panel: PanelCandidate::new("top", 564, 18, 540, 18),
        });

        let outcome = replay(&session, LayoutSettings::default());
        assert_eq!(outcome.overlap_warnings, 1);
        assert_eq!(outcome.rejected, 2);
        assert!(outcome.registry.has_overlap());
    }

    #[test]
    fn test_remove_then_redistribute() {
        let mut session = parse(SESSION_JSON);
        session.ops.push(SessionOp::SetShelf {
            label: "a".to_string(),
            y: 100.0,
        });
        session.ops.push(SessionOp::Remove {
            label: "c".to_string(),
        });
        session.ops.push(SessionOp::Redistribute);

        let outcome = replay(&session, LayoutSettings::default());
        let centers: Vec<f64> = outcome
            .registry
            .shelves()
            .filter_map(|shelf| shelf.y_position())
            .collect();
        assert_eq!(centers, vec![18.0 + 216.0 + 9.0, 18.0 + 216.0 + 18.0 + 216.0 + 9.0]);
    }

    #[test]
    fn test_toml_session() {
        let session: Session = toml::from_str(
            r#"
            [[ops]]
            op = "add"
            label = "s"
            type = "shelf"
            width = 564
            height = 18
            depth = 540
            thickness = 18

            [[ops]]
            op = "set-shelf"
            label = "s"
            y = 200.0
            "#,
        )
        .unwrap();

        let outcome = replay(&session, LayoutSettings::default());
        assert_eq!(
            outcome.registry.shelves().next().unwrap().y_position(),
            Some(200.0)
        );
    }

    const SESSION_TOML: &str = r#"
[[ops]]
op = "add"
type = "left-side"
width = 18
height = 720
depth = 560
thickness = 18

[[ops]]
op = "add"
type = "bottom"
width = 564
height = 18
depth = 540
thickness = 18

[[ops]]
op = "add"
type = "top"
width = 564
height = 18
depth = 540
thickness = 18

[[ops]]
op = "add"
label = "middle"
type = "shelf"
width = 564
height = 18
depth = 540
thickness = "18"
"#;

    #[test]
    fn test_session_file_replay() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("session.toml");
        std::fs::write(&path, SESSION_TOML).unwrap();

        let session = Session::load(&path).unwrap();
        assert_eq!(session.ops.len(), 4);

        let scene = replay(&session, Config::default().layout).scene();
        assert_eq!(scene.envelope.width, 18 + 582);
        assert_eq!(scene.placements.len(), 4);

        // one shelf between 18 and 702: two gaps of 333 mm
        assert_eq!(scene.spacings.len(), 2);
        assert!(scene.spacings.iter().all(|s| s.distance_mm == 333));
        assert_eq!(scene.spacings[0].label(MeasurementSystem::Metric), "333 mm");
    }

    #[test]
    fn test_session_with_custom_layout_config() {
        let dir = TempDir::new().unwrap();
        let config_path = dir.path().join("config.toml");
        std::fs::write(&config_path, "[layout]\nmin_annotated_spacing_mm = 400.0\n").unwrap();
        let session_path = dir.path().join("session.toml");
        std::fs::write(&session_path, SESSION_TOML).unwrap();

        let config = Config::load_from_file(&config_path).unwrap();
        let session = Session::load(&session_path).unwrap();
        let scene = replay(&session, config.layout).scene();

        assert!(scene.spacings.is_empty());
    }

    #[test]
    fn test_session_rejects_unknown_extension() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("session.yaml");
        std::fs::write(&path, "ops: []").unwrap();

        assert!(Session::load(&path).is_err());
    }
}
