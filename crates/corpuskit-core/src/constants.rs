//! Fixed layout constants, all in millimetres.

/// Millimetres per scene unit (the scene works in metres).
pub const MM_PER_SCENE_UNIT: f64 = 1000.0;

/// Carcass width used when no side panel exists.
pub const DEFAULT_CORPUS_WIDTH: u32 = 600;
/// Carcass height used when no side panel exists.
pub const DEFAULT_CORPUS_HEIGHT: u32 = 720;
/// Carcass depth used when no panel supplies one.
pub const DEFAULT_CORPUS_DEPTH: u32 = 560;
/// Board thickness used when no side panel exists.
pub const DEFAULT_CORPUS_THICKNESS: u32 = 18;

/// Interior span added to the two side widths when both sides exist.
pub const INTERIOR_SPAN_BOTH_SIDES: u32 = 564;
/// Interior span plus the nominal thickness of the missing side.
pub const INTERIOR_SPAN_SINGLE_SIDE: u32 = 582;

/// Gaps at or below this many millimetres get no dimension line.
pub const MIN_ANNOTATED_SPACING_MM: f64 = 10.0;

/// Smallest accepted width, height or depth.
pub const MIN_PANEL_SIZE: u32 = 12;
/// Largest accepted width, height or depth.
pub const MAX_PANEL_SIZE: u32 = 2000;
/// Thinnest accepted board.
pub const MIN_PANEL_THICKNESS: u32 = 12;
/// Thickest accepted board.
pub const MAX_PANEL_THICKNESS: u32 = 25;
