//! Interpolation configuration
//!
//! Thresholds that decide when a change is smoothed and when it is treated
//! as instantaneous. Loaded from a flat TOML document:
//!
//! ```toml
//! enabled = true
//! position_epsilon = 0.1
//! tolerance_base = 10.0
//! tolerance_max = 50.0
//! ghost_jump_limit = 25.0
//! scale_jump_limit = 100.0
//! ```
//!
//! Every field is optional and falls back to its default.

use crate::error::{ConfigError, Result};
use serde::Deserialize;
use std::fs;
use std::path::Path;

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct InterpolationConfig {
    /// Master switch; when off, capture stores nothing and frames are no-ops
    pub enabled: bool,
    /// Movements at or below this on both axes are ignored
    #[serde(default = "default_position_epsilon")]
    pub position_epsilon: f32,
    /// Added to the drawable extent to get the teleport tolerance per axis
    #[serde(default = "default_tolerance_base")]
    pub tolerance_base: f32,
    /// Upper bound of the teleport tolerance per axis
    #[serde(default = "default_tolerance_max")]
    pub tolerance_max: f32,
    /// Ghost changes at or above this are applied instantly
    #[serde(default = "default_ghost_jump_limit")]
    pub ghost_jump_limit: f32,
    /// Scale changes (percent) at or above this are applied instantly
    #[serde(default = "default_scale_jump_limit")]
    pub scale_jump_limit: f32,
}

fn default_position_epsilon() -> f32 {
    0.1
}

fn default_tolerance_base() -> f32 {
    10.0
}

fn default_tolerance_max() -> f32 {
    50.0
}

fn default_ghost_jump_limit() -> f32 {
    25.0
}

fn default_scale_jump_limit() -> f32 {
    100.0
}

impl Default for InterpolationConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            position_epsilon: default_position_epsilon(),
            tolerance_base: default_tolerance_base(),
            tolerance_max: default_tolerance_max(),
            ghost_jump_limit: default_ghost_jump_limit(),
            scale_jump_limit: default_scale_jump_limit(),
        }
    }
}

impl InterpolationConfig {
    /// Parse and validate a TOML document
    pub fn from_toml_str(source: &str) -> Result<Self> {
        let config: Self = toml::from_str(source)?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate a TOML file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let source = fs::read_to_string(path)?;
        let config = Self::from_toml_str(&source)?;
        tracing::debug!(path = %path.display(), ?config, "loaded interpolation config");
        Ok(config)
    }

    /// Check that every threshold is finite and non-negative
    pub fn validate(&self) -> Result<()> {
        let fields = [
            ("position_epsilon", self.position_epsilon),
            ("tolerance_base", self.tolerance_base),
            ("tolerance_max", self.tolerance_max),
            ("ghost_jump_limit", self.ghost_jump_limit),
            ("scale_jump_limit", self.scale_jump_limit),
        ];
        for (field, value) in fields {
            if !value.is_finite() || value < 0.0 {
                return Err(ConfigError::Invalid {
                    field,
                    reason: format!("expected a finite non-negative number, got {value}"),
                });
            }
        }
        Ok(())
    }

    /// Teleport tolerance for one axis given the drawable's extent on it
    pub fn tolerance_for(&self, extent: f32) -> f32 {
        // f32::max drops NaN, so a degenerate extent counts as zero
        (self.tolerance_base + extent.max(0.0)).min(self.tolerance_max)
    }
}
