//! Error types for the layout crate.
//!
//! Only explicit registry edits and snapshot loading can fail. Geometry that does not fit is
//! reported through overlap detection, never through an error.

use corpuskit_core::ValidationError;
use thiserror::Error;

use crate::panel::{PanelId, PanelType};

/// Errors that can occur when editing a panel registry.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum LayoutError {
    /// A candidate panel failed validation.
    #[error("Validation failed: {0}")]
    Validation(#[from] ValidationError),

    /// No panel with the given id exists.
    #[error("Panel not found: {0}")]
    PanelNotFound(PanelId),

    /// Only shelves accept a user-set vertical position.
    #[error("Panel {id} is a {panel_type}, only shelves can be repositioned")]
    NotAShelf { id: PanelId, panel_type: PanelType },

    /// A requested position was not a finite number.
    #[error("Invalid shelf position: {0}")]
    InvalidPosition(f64),

    /// A loaded snapshot carried unusable layout settings.
    #[error("Invalid layout settings: {0}")]
    InvalidSettings(String),
}

/// Result type alias for registry edits.
pub type LayoutResult<T> = Result<T, LayoutError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layout_error_display() {
        let err = LayoutError::InvalidPosition(f64::INFINITY);
        assert_eq!(err.to_string(), "Invalid shelf position: inf");

        let err: LayoutError = ValidationError::BlankType.into();
        assert_eq!(err.to_string(), "Validation failed: Panel type is blank");
    }

    #[test]
    fn test_not_a_shelf_display() {
        let id = PanelId::new();
        let err = LayoutError::NotAShelf {
            id,
            panel_type: PanelType::Top,
        };
        assert_eq!(
            err.to_string(),
            format!("Panel {} is a top, only shelves can be repositioned", id)
        );
    }
}
