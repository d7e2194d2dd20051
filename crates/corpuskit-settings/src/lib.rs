//! CorpusKit Settings Crate
//!
//! Handles layout and display configuration, loaded from and saved to
//! JSON or TOML files.

pub mod config;
pub mod error;

pub use config::{Config, DisplaySettings, CONFIG_FILE_NAME};
pub use error::{SettingsError, SettingsResult};
