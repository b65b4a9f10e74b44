//! Tunable timings and gesture thresholds.
//!
//! Defaults match the shipped app. Hosts can override any subset by passing
//! a YAML document to [`Settings::from_yaml_str`].

use serde::{Deserialize, Serialize};
use std::time::Duration;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SettingsError {
    #[error("Failed to parse settings: {0}")]
    ParseError(#[from] serde_yaml::Error),

    #[error("Invalid setting {key}: {message}")]
    InvalidValue { key: &'static str, message: String },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Simulated analysis time before a grocery list is produced
    pub processing_delay_ms: u64,
    /// Pause between producing a list and revealing its rows
    pub reveal_delay_ms: u64,
    /// Extra delay per row when rows are revealed
    pub stagger_ms: u64,
    /// Downward drag, in points, that dismisses the detail view
    pub dismiss_threshold: f32,
    /// Upward swipe, in points, that reveals the first onboarding page
    pub reveal_swipe_threshold: f32,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            processing_delay_ms: 2800,
            reveal_delay_ms: 150,
            stagger_ms: 70,
            dismiss_threshold: 100.0,
            reveal_swipe_threshold: 180.0,
        }
    }
}

impl Settings {
    /// Parses settings overrides. Missing keys keep their defaults and an
    /// empty document yields [`Settings::default`].
    pub fn from_yaml_str(yaml: &str) -> Result<Self, SettingsError> {
        if yaml.trim().is_empty() {
            return Ok(Settings::default());
        }

        let settings: Settings = serde_yaml::from_str(yaml)?;
        settings.validate()?;
        Ok(settings)
    }

    fn validate(&self) -> Result<(), SettingsError> {
        if !(self.dismiss_threshold.is_finite() && self.dismiss_threshold > 0.0) {
            return Err(SettingsError::InvalidValue {
                key: "dismiss_threshold",
                message: format!("must be a positive number, got {}", self.dismiss_threshold),
            });
        }
        if !(self.reveal_swipe_threshold.is_finite() && self.reveal_swipe_threshold > 0.0) {
            return Err(SettingsError::InvalidValue {
                key: "reveal_swipe_threshold",
                message: format!(
                    "must be a positive number, got {}",
                    self.reveal_swipe_threshold
                ),
            });
        }
        Ok(())
    }

    pub fn processing_delay(&self) -> Duration {
        Duration::from_millis(self.processing_delay_ms)
    }

    pub fn reveal_delay(&self) -> Duration {
        Duration::from_millis(self.reveal_delay_ms)
    }

    /// Appearance delay of the row at `index` once the list is revealed.
    pub fn stagger_delay(&self, index: usize) -> Duration {
        Duration::from_millis(self.stagger_ms.saturating_mul(index as u64))
    }
}
