//! Game settings and tuning
//!
//! Defaults reproduce the authored game. Overrides arrive as JSON; nothing is persisted.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::input::JumpMode;

/// Game settings/tuning
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    // === Physics ===
    /// Downward acceleration per tick
    pub gravity: f32,
    /// Vertical velocity set by a jump (must be negative)
    pub jump_velocity: f32,
    /// Obstacle scroll speed per tick
    pub scroll_speed: f32,

    // === Course ===
    /// Minimum gap between a recycled building and the last one (unscaled)
    pub gap_min: f32,
    /// Maximum gap (unscaled)
    pub gap_max: f32,

    // === Input ===
    /// How held keys are treated
    pub jump_mode: JumpMode,

    /// Fixed RNG seed (`None` derives one from the clock)
    pub seed: Option<u64>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            gravity: GRAVITY,
            jump_velocity: JUMP_VELOCITY,
            scroll_speed: SCROLL_SPEED,
            gap_min: GAP_MIN,
            gap_max: GAP_MAX,
            jump_mode: JumpMode::default(),
            seed: None,
        }
    }
}

/// Settings rejected at load time
#[derive(Debug)]
pub enum SettingsError {
    /// Not valid JSON for `Settings`
    Parse(serde_json::Error),
    /// Parsed, but a value makes the game unplayable
    Invalid(&'static str),
}

impl fmt::Display for SettingsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SettingsError::Parse(e) => write!(f, "failed to parse settings: {e}"),
            SettingsError::Invalid(reason) => write!(f, "invalid settings: {reason}"),
        }
    }
}

impl std::error::Error for SettingsError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SettingsError::Parse(e) => Some(e),
            SettingsError::Invalid(_) => None,
        }
    }
}

impl From<serde_json::Error> for SettingsError {
    fn from(e: serde_json::Error) -> Self {
        SettingsError::Parse(e)
    }
}

impl Settings {
    /// Parse overrides from JSON; missing fields keep their defaults
    pub fn from_json(json: &str) -> Result<Self, SettingsError> {
        let settings: Settings = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }

    pub fn validate(&self) -> Result<(), SettingsError> {
        if !(self.gravity > 0.0) {
            return Err(SettingsError::Invalid("gravity must be positive"));
        }
        if !(self.jump_velocity < 0.0) {
            return Err(SettingsError::Invalid("jump_velocity must be negative (upward)"));
        }
        if !(self.scroll_speed > 0.0) {
            return Err(SettingsError::Invalid("scroll_speed must be positive"));
        }
        if !(self.gap_min >= 0.0) || !self.gap_max.is_finite() {
            return Err(SettingsError::Invalid("gaps must be finite and non-negative"));
        }
        if self.gap_min > self.gap_max {
            return Err(SettingsError::Invalid("gap_min must not exceed gap_max"));
        }
        Ok(())
    }
}
