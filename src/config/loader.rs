//! Configuration file loading with precedence handling.
//!
//! Engine defaults are always valid on their own; a TOML file can override
//! any subset of them. Loading never partially applies: a file that fails
//! to read, parse, or validate leaves the caller with the defaults.

use crate::model::{CalibrationParams, MmPerMv, PaperSpeed};
use crate::scroll::FlingTuning;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors that can occur during config loading.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ConfigError {
    /// Failed to read the config file (missing file, permissions).
    #[error("Failed to read config file at {path}: {reason}")]
    ReadError {
        /// Path that failed to read.
        path: PathBuf,
        /// Reason for failure.
        reason: String,
    },

    /// Config file contains invalid TOML syntax or unknown fields.
    #[error("Invalid TOML in {path}: {reason}")]
    ParseError {
        /// Path with invalid TOML.
        path: PathBuf,
        /// Parse error details.
        reason: String,
    },

    /// A field parsed but its value is outside the accepted set.
    #[error("Invalid value {value} for '{field}'")]
    InvalidValue {
        /// The offending config key.
        field: &'static str,
        /// The rejected numeric value.
        value: f64,
    },
}

/// TOML configuration file structure.
///
/// All fields are optional; unspecified values fall back to the engine
/// defaults. Unknown keys are rejected so typos surface as parse errors
/// instead of silently using a default.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct ConfigFile {
    /// Calibration overrides.
    #[serde(default)]
    pub calibration: Option<CalibrationSection>,

    /// Scroll physics overrides.
    #[serde(default)]
    pub scroll: Option<ScrollSection>,
}

/// `[calibration]` section.
///
/// Scales are written as plain numbers and validated against the clinical
/// sets on resolution:
///
/// ```toml
/// [calibration]
/// mm_per_mv = 10.0
/// paper_speed = 25.0
/// gain_divisor = 2000.0
/// sampling_rate_hz = 250
/// grid_divisions = 40
/// ```
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct CalibrationSection {
    /// Amplitude scale in mm/mV; must be one of 4, 5, 10, 20.
    #[serde(default)]
    pub mm_per_mv: Option<f64>,

    /// Paper speed in mm/s; must be one of 12.5, 25, 50.
    #[serde(default)]
    pub paper_speed: Option<f64>,

    /// Raw sample units per millivolt.
    #[serde(default)]
    pub gain_divisor: Option<f64>,

    /// Samples per second of the lead data.
    #[serde(default)]
    pub sampling_rate_hz: Option<u32>,

    /// Vertical grid divisions per viewport height.
    #[serde(default)]
    pub grid_divisions: Option<u32>,
}

/// `[scroll]` section. All velocities in px/s, friction in 1/s.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct ScrollSection {
    /// Fling decay rate.
    #[serde(default)]
    pub friction: Option<f64>,

    /// Minimum release speed that starts a fling.
    #[serde(default)]
    pub min_fling_velocity: Option<f64>,

    /// Maximum fling speed; faster releases are clamped.
    #[serde(default)]
    pub max_fling_velocity: Option<f64>,

    /// Speed below which a fling settles.
    #[serde(default)]
    pub rest_velocity: Option<f64>,
}

/// Resolved engine configuration after merging a file over the defaults.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct EngineConfig {
    /// Calibration parameter set.
    pub calibration: CalibrationParams,
    /// Fling tuning constants.
    pub fling: FlingTuning,
}

impl ConfigFile {
    /// Parse TOML text. `path` is carried only for error context.
    pub fn parse(text: &str, path: &Path) -> Result<Self, ConfigError> {
        toml::from_str(text).map_err(|err| ConfigError::ParseError {
            path: path.to_path_buf(),
            reason: err.to_string(),
        })
    }

    /// Read and parse a config file from disk.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path).map_err(|err| ConfigError::ReadError {
            path: path.to_path_buf(),
            reason: err.to_string(),
        })?;
        Self::parse(&text, path)
    }

    /// Merge this file over the engine defaults.
    ///
    /// Scale values are validated against the enumerated clinical sets;
    /// anything outside them is [`ConfigError::InvalidValue`].
    pub fn resolve(&self) -> Result<EngineConfig, ConfigError> {
        let mut config = EngineConfig::default();

        if let Some(calibration) = &self.calibration {
            if let Some(value) = calibration.mm_per_mv {
                config.calibration.mm_per_mv = MmPerMv::from_value(value)
                    .ok_or(ConfigError::InvalidValue {
                        field: "calibration.mm_per_mv",
                        value,
                    })?;
            }
            if let Some(value) = calibration.paper_speed {
                config.calibration.paper_speed = PaperSpeed::from_value(value)
                    .ok_or(ConfigError::InvalidValue {
                        field: "calibration.paper_speed",
                        value,
                    })?;
            }
            if let Some(value) = calibration.gain_divisor {
                config.calibration.gain_divisor = value;
            }
            if let Some(value) = calibration.sampling_rate_hz {
                config.calibration.sampling_rate_hz = value;
            }
            if let Some(value) = calibration.grid_divisions {
                config.calibration.grid_divisions_per_height = value;
            }
        }

        if let Some(scroll) = &self.scroll {
            if let Some(value) = scroll.friction {
                config.fling.friction = value;
            }
            if let Some(value) = scroll.min_fling_velocity {
                config.fling.min_fling_velocity_px_s = value;
            }
            if let Some(value) = scroll.max_fling_velocity {
                config.fling.max_fling_velocity_px_s = value;
            }
            if let Some(value) = scroll.rest_velocity {
                config.fling.rest_velocity_px_s = value;
            }
        }

        Ok(config)
    }
}

/// Resolve the standard config file location.
///
/// `~/.config/ecgstrip/config.toml` on Unix-like systems, the platform
/// equivalent elsewhere. `None` when no config directory exists.
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("ecgstrip").join("config.toml"))
}

/// Load the resolved engine configuration.
///
/// A missing file is not an error: defaults apply. A present but invalid
/// file is an error, so a broken config never silently degrades to
/// defaults.
pub fn load_or_default(path: &Path) -> Result<EngineConfig, ConfigError> {
    if !path.exists() {
        tracing::debug!(?path, "no config file, using defaults");
        return Ok(EngineConfig::default());
    }
    ConfigFile::load(path)?.resolve()
}
