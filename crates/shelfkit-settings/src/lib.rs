//! ShelfKit Settings Crate
//!
//! Handles application configuration and its persistence.

pub mod config;
pub mod error;

pub use config::{Config, ExportSettings, PlywoodSettings, ShelfSettings};
pub use error::{ConfigError, SettingsError, SettingsResult};
