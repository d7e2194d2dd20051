//! # CorpusKit
//!
//! A layout engine for furniture carcasses ("corpus") assembled from named
//! panels: left side, right side, top, bottom and any number of shelves.
//!
//! ## Architecture
//!
//! CorpusKit is organized as a workspace with multiple crates:
//!
//! 1. **corpuskit-core** - Unit conversion, dimension bounds, constants, validation errors
//! 2. **corpuskit-layout** - Panel registry, vertical solver, overlap check, placements, spacings
//! 3. **corpuskit-settings** - Layout and display configuration files
//! 4. **corpuskit** - This crate: re-exports, logging and the session replay shell
//!
//! ## Features
//!
//! - **Equal-gap shelves**: shelves spread between bottom and top with identical clearances
//! - **Sticky positions**: user-placed shelves stay put until a forced redistribution
//! - **Renderer output**: envelope, per-panel 3D boxes and dimension lines in one scene
//! - **Overlap warnings**: advisory detection of colliding horizontal panels

pub mod session;

pub use corpuskit_core::{
    clamp_dimension, format_length, to_scene_units, DimensionBounds, MeasurementSystem,
    ValidationError,
};

pub use corpuskit_layout::{
    available_types_to_add, compute_envelope, compute_placements, compute_spacings,
    find_overlaps, has_overlap, solve_vertical_layout, CorpusScene, Dimensions, Envelope,
    LayoutError, LayoutSettings, OverlapPair, Panel, PanelCandidate, PanelId, PanelRegistry,
    PanelType, Placement, Redistribution, Spacing, VerticalAnchor,
};

pub use corpuskit_settings::{Config, DisplaySettings, SettingsError};

pub use session::{replay, ReplayOutcome, Session, SessionOp};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Build date (set at compile time)
pub const BUILD_DATE: &str = env!("BUILD_DATE");

/// Initialize logging
///
/// Sets up structured logging with:
/// - Output on stderr, leaving stdout for scene data
/// - RUST_LOG environment variable support
/// - `info` as the default level
/// - One JSON object per event when `json` is set
pub fn init_logging(json: bool) -> anyhow::Result<()> {
    use tracing_subscriber::fmt;
    use tracing_subscriber::prelude::*;
    use tracing_subscriber::EnvFilter;

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let registry = tracing_subscriber::registry().with(env_filter);

    if json {
        let json_layer = fmt::layer()
            .json()
            .with_writer(std::io::stderr)
            .with_target(true)
            .with_line_number(true);
        registry.with(json_layer).try_init()?;
    } else {
        let fmt_layer = fmt::layer()
            .with_writer(std::io::stderr)
            .with_target(true)
            .with_level(true)
            .with_line_number(true);
        registry.with(fmt_layer).try_init()?;
    }

    Ok(())
}
