//! Validation errors for panel input.
//!
//! A validation failure rejects an add without touching the registry.
//! Degenerate geometry is never an error.

use thiserror::Error;

/// Reasons a candidate panel is rejected.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ValidationError {
    /// The panel type field was empty.
    #[error("Panel type is blank")]
    BlankType,

    /// The panel type is not one of the known panel types.
    #[error("Unknown panel type: {0}")]
    UnknownType(String),

    /// A dimension field did not parse as a finite number.
    #[error("Invalid value for '{field}': {reason}")]
    InvalidDimension { field: String, reason: String },

    /// A singleton panel type is already present.
    #[error("Corpus already has a {0} panel")]
    DuplicatePanel(String),
}

impl ValidationError {
    pub fn invalid_dimension(field: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidDimension {
            field: field.into(),
            reason: reason.into(),
        }
    }
}

/// Result type alias for input validation.
pub type ValidationResult<T> = Result<T, ValidationError>;
