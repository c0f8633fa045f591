//! TOML-backed timing defaults for animation presets.
//!
//! The tunable scalar knobs of each variant are consolidated here.
//! [`Defaults`] serializes to/from TOML for preset files; all sub-structs
//! use `#[serde(default)]` so partial files (e.g. only overriding
//! `[flash]`) work correctly, and unknown keys are rejected as a
//! configuration error.

use std::path::Path;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::animation::effects::{FadeConfig, FlashConfig, RotatingConfig};
use crate::animation::Timing;
use crate::error::ConfigError;

/// Timing defaults for the rotation variant.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, JsonSchema)]
#[serde(default, deny_unknown_fields)]
pub struct RotatingDefaults {
    /// Total run duration in seconds.
    pub run_time: f32,
    /// Total rotation magnitude in radians.
    pub radians: f32,
    /// Pivot at the object's own center rather than the scene origin.
    pub in_place: bool,
}

impl Default for RotatingDefaults {
    fn default() -> Self {
        Self {
            run_time: RotatingConfig::DEFAULT_RUN_TIME,
            radians: RotatingConfig::DEFAULT_RADIANS,
            in_place: true,
        }
    }
}

/// Timing defaults for the flash pulse.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, JsonSchema)]
#[serde(default, deny_unknown_fields)]
pub struct FlashDefaults {
    /// Total run duration in seconds.
    pub run_time: f32,
    /// Peak blend factor reached at the midpoint of the pulse.
    pub slow_factor: f32,
}

impl Default for FlashDefaults {
    fn default() -> Self {
        Self {
            run_time: FlashConfig::DEFAULT_RUN_TIME,
            slow_factor: FlashConfig::DEFAULT_SLOW_FACTOR,
        }
    }
}

/// Timing defaults for the fade variants.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, JsonSchema)]
#[serde(default, deny_unknown_fields)]
pub struct FadeDefaults {
    /// Total run duration in seconds.
    pub run_time: f32,
}

impl Default for FadeDefaults {
    fn default() -> Self {
        Self {
            run_time: FadeConfig::DEFAULT_RUN_TIME,
        }
    }
}

/// Timing defaults for the progressive reveal.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, JsonSchema)]
#[serde(default, deny_unknown_fields)]
pub struct CreationDefaults {
    /// Total run duration in seconds.
    pub run_time: f32,
}

impl Default for CreationDefaults {
    fn default() -> Self {
        Self {
            run_time: Timing::DEFAULT_RUN_TIME,
        }
    }
}

/// Top-level defaults container.
#[derive(
    Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Default, JsonSchema,
)]
#[serde(default, deny_unknown_fields)]
pub struct Defaults {
    /// Rotation timing knobs.
    pub rotating: RotatingDefaults,
    /// Flash pulse knobs.
    pub flash: FlashDefaults,
    /// Fade timing knobs.
    pub fade: FadeDefaults,
    /// Progressive-reveal timing knobs.
    pub creation: CreationDefaults,
}

impl Defaults {
    /// Generate a JSON Schema describing the preset file format.
    #[must_use]
    pub fn json_schema() -> schemars::Schema {
        schemars::schema_for!(Defaults)
    }

    /// JSON Schema serialized to a string, for external tooling.
    ///
    /// # Errors
    ///
    /// [`ConfigError::PresetParse`] if schema serialization fails.
    pub fn json_schema_string() -> Result<String, ConfigError> {
        serde_json::to_string_pretty(&Self::json_schema())
            .map_err(|e| ConfigError::PresetParse(e.to_string()))
    }

    /// Load defaults from a TOML file. Missing fields use defaults;
    /// unknown keys are rejected.
    ///
    /// # Errors
    ///
    /// [`ConfigError::Io`] on read failure, [`ConfigError::PresetParse`]
    /// on malformed or unrecognized content.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(ConfigError::Io)?;
        let defaults: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::PresetParse(e.to_string()))?;
        log::debug!("loaded animation defaults from {}", path.display());
        Ok(defaults)
    }

    /// Save defaults to a TOML file (pretty-printed).
    ///
    /// # Errors
    ///
    /// [`ConfigError::Io`] on write failure, [`ConfigError::PresetParse`]
    /// on serialization failure.
    pub fn save(&self, path: &Path) -> Result<(), ConfigError> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| ConfigError::PresetParse(e.to_string()))?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(ConfigError::Io)?;
        }
        std::fs::write(path, content).map_err(ConfigError::Io)
    }

    /// Rotation config seeded from these defaults.
    #[must_use]
    pub fn rotating_config(&self) -> RotatingConfig {
        RotatingConfig {
            run_time: self.rotating.run_time,
            radians: self.rotating.radians,
            in_place: self.rotating.in_place,
            ..RotatingConfig::default()
        }
    }

    /// Flash config seeded from these defaults.
    #[must_use]
    pub fn flash_config(&self) -> FlashConfig {
        FlashConfig::default()
            .with_run_time(self.flash.run_time)
            .with_slow_factor(self.flash.slow_factor)
    }

    /// Fade config seeded from these defaults.
    #[must_use]
    pub fn fade_config(&self) -> FadeConfig {
        FadeConfig::new(self.fade.run_time)
    }

    /// Progressive-reveal timing seeded from these defaults.
    #[must_use]
    pub fn creation_timing(&self) -> Timing {
        Timing::new(self.creation.run_time)
    }
}
