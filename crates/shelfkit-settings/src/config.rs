//! Configuration and settings management for ShelfKit
//!
//! Supports JSON and TOML files; the default location is
//! `<platform config dir>/shelfkit/config.toml`.
//!
//! Configuration is organized into logical sections:
//! - Plywood stock (sheet size, thickness)
//! - Shelf design (counts, cavity, border, radius, notches)
//! - Export defaults (formats, output directory, cut program)
//!
//! Every section is `#[serde(default)]`, so a file only needs the keys it
//! changes.

use crate::error::{ConfigError, SettingsError, SettingsResult};
use serde::{Deserialize, Serialize};
use shelfkit_camtools::{CutProgramSettings, ExportFormat, ShelfParameters, SheetSpec};
use std::path::{Path, PathBuf};

/// Plywood stock the parts are cut from
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlywoodSettings {
    /// Sheet width in mm
    pub sheet_width: f64,
    /// Sheet height in mm
    pub sheet_height: f64,
    /// Panel thickness in mm
    pub thickness: f64,
}

impl Default for PlywoodSettings {
    fn default() -> Self {
        Self {
            sheet_width: 1220.0,
            sheet_height: 2440.0,
            thickness: 18.0,
        }
    }
}

impl PlywoodSettings {
    pub fn validate(&self) -> SettingsResult<()> {
        for (key, value) in [
            ("plywood.sheet_width", self.sheet_width),
            ("plywood.sheet_height", self.sheet_height),
            ("plywood.thickness", self.thickness),
        ] {
            if !(value.is_finite() && value > 0.0) {
                return Err(ConfigError::out_of_range(key, value).into());
            }
        }
        Ok(())
    }
}

/// Shelf design inputs
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ShelfSettings {
    pub shelf_count: i32,
    pub middle_count: i32,
    pub min_inner_width: f64,
    pub min_inner_height: f64,
    pub border_thickness: f64,
    pub tool_gap: f64,
    pub radius_percent: f64,
    pub notch_size: f64,
    pub notch_interval: f64,
    pub notch_corner_radius: f64,
}

impl Default for ShelfSettings {
    fn default() -> Self {
        Self {
            shelf_count: 7,
            middle_count: 6,
            min_inner_width: 109.0,
            min_inner_height: 109.0,
            border_thickness: 30.0,
            tool_gap: 6.0,
            radius_percent: 15.0,
            notch_size: 8.0,
            notch_interval: 20.0,
            notch_corner_radius: 1.0,
        }
    }
}

impl ShelfSettings {
    /// Engine input for these settings.
    pub fn to_parameters(&self) -> ShelfParameters {
        ShelfParameters {
            shelf_count: self.shelf_count,
            middle_count: self.middle_count,
            min_inner_width: self.min_inner_width,
            min_inner_height: self.min_inner_height,
            border_thickness: self.border_thickness,
            tool_gap: self.tool_gap,
            radius_percent: self.radius_percent,
            notch_size: self.notch_size,
            notch_interval: self.notch_interval,
            notch_corner_radius: self.notch_corner_radius,
        }
    }
}

/// Output defaults
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExportSettings {
    /// Formats written when none is given on the command line
    pub formats: Vec<ExportFormat>,
    /// Directory the cut files are written to
    pub output_directory: PathBuf,
    pub passes: u32,
    /// Depth added per pass in mm
    pub z_step_down: f64,
    /// Spindle speed or laser power (S word)
    pub power: u32,
    /// Cutting feed rate in mm/min
    pub feed_rate: f64,
    pub safe_z: f64,
    /// Arc flattening chord length in mm
    pub segment_length: f64,
}

impl Default for ExportSettings {
    fn default() -> Self {
        let program = CutProgramSettings::default();
        Self {
            formats: ExportFormat::ALL.to_vec(),
            output_directory: PathBuf::from("shelfkit-out"),
            passes: program.passes,
            z_step_down: program.z_step_down,
            power: program.power,
            feed_rate: program.feed_rate,
            safe_z: program.safe_z,
            segment_length: program.segment_length,
        }
    }
}

impl ExportSettings {
    pub fn to_program_settings(&self) -> CutProgramSettings {
        CutProgramSettings {
            passes: self.passes,
            z_step_down: self.z_step_down,
            power: self.power,
            feed_rate: self.feed_rate,
            safe_z: self.safe_z,
            segment_length: self.segment_length,
        }
    }
}

/// Complete application configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub plywood: PlywoodSettings,
    pub shelf: ShelfSettings,
    pub export: ExportSettings,
}

enum FileFormat {
    Json,
    Toml,
}

impl FileFormat {
    fn of(path: &Path) -> Result<Self, ConfigError> {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("json") => Ok(Self::Json),
            Some("toml") => Ok(Self::Toml),
            other => Err(ConfigError::UnsupportedFormat(
                other.unwrap_or("<none>").to_string(),
            )),
        }
    }
}

impl Config {
    /// Create new config with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// `<config dir>/shelfkit/config.toml`
    pub fn default_path() -> SettingsResult<PathBuf> {
        dirs::config_dir()
            .map(|dir| dir.join("shelfkit").join("config.toml"))
            .ok_or_else(|| {
                ConfigError::UnsupportedPlatform(
                    "no configuration directory on this platform".to_string(),
                )
                .into()
            })
    }

    /// Load config from file (JSON or TOML)
    pub fn load_from_file(path: &Path) -> SettingsResult<Self> {
        let format = FileFormat::of(path)?;
        let content = std::fs::read_to_string(path).map_err(|e| {
            SettingsError::LoadError(format!("{}: {}", path.display(), e))
        })?;

        let config: Self = match format {
            FileFormat::Json => serde_json::from_str(&content)?,
            FileFormat::Toml => toml::from_str(&content)?,
        };

        config.validate()?;
        tracing::debug!(path = %path.display(), "loaded configuration");
        Ok(config)
    }

    /// Load `path` if it exists, otherwise fall back to defaults.
    pub fn load_or_default(path: &Path) -> SettingsResult<Self> {
        if path.exists() {
            Self::load_from_file(path)
        } else {
            tracing::info!(path = %path.display(), "no configuration file, using defaults");
            Ok(Self::default())
        }
    }

    /// Save config to file (JSON or TOML)
    pub fn save_to_file(&self, path: &Path) -> SettingsResult<()> {
        self.validate()?;

        let content = match FileFormat::of(path)? {
            FileFormat::Json => serde_json::to_string_pretty(self)?,
            FileFormat::Toml => toml::to_string_pretty(self)?,
        };

        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)
                .map_err(|e| SettingsError::ConfigDirectory(e.to_string()))?;
        }
        std::fs::write(path, content)
            .map_err(|e| SettingsError::SaveError(format!("{}: {}", path.display(), e)))?;

        Ok(())
    }

    /// Validate configuration
    pub fn validate(&self) -> SettingsResult<()> {
        self.plywood.validate()?;

        self.shelf
            .to_parameters()
            .validate()
            .map_err(|e| SettingsError::InvalidSetting {
                key: "shelf".to_string(),
                reason: e.to_string(),
            })?;

        self.export
            .to_program_settings()
            .validate()
            .map_err(|e| SettingsError::InvalidSetting {
                key: "export".to_string(),
                reason: e.to_string(),
            })?;

        if self.export.formats.is_empty() {
            return Err(SettingsError::InvalidSetting {
                key: "export.formats".to_string(),
                reason: "at least one format is required".to_string(),
            });
        }

        Ok(())
    }

    /// Sheet stock for the packer. The packing gap is the tool gap.
    pub fn sheet_spec(&self) -> SheetSpec {
        SheetSpec {
            width: self.plywood.sheet_width,
            height: self.plywood.sheet_height,
            gap: self.shelf.tool_gap,
        }
    }
}
