//! Application configuration.
//!
//! Read once at startup from `<config dir>/twinview/config.json`. Every field
//! is optional in the file; missing fields take their defaults.

use crate::error::{Result, TwinViewError};
use crate::time::PlaybackRate;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

/// What a relative seek does while a clip's duration is still unknown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UnknownDurationPolicy {
    /// Hold the offset and apply it once metadata has loaded.
    #[default]
    Defer,
    /// Treat the unknown duration as zero, pinning the clip to the start.
    ClampToZero,
}

/// User-tunable settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Interval between position / pause-state samples.
    pub poll_interval_ms: u64,
    /// Two marks closer than this (seconds) are the same mark.
    pub mark_tolerance: f64,
    /// Nudge step sizes in seconds, largest first.
    pub nudge_steps: Vec<f64>,
    /// Rates offered by the rate selector.
    pub rate_presets: Vec<f64>,
    /// Rate applied at startup.
    pub default_rate: f64,
    pub unknown_duration: UnknownDurationPolicy,
    /// Fallback log filter when `RUST_LOG` is not set.
    pub log_level: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            poll_interval_ms: crate::defaults::POLL_INTERVAL_MS,
            mark_tolerance: crate::defaults::MARK_TOLERANCE,
            nudge_steps: crate::defaults::NUDGE_STEPS.to_vec(),
            rate_presets: PlaybackRate::PRESETS.to_vec(),
            default_rate: PlaybackRate::NORMAL.value(),
            unknown_duration: UnknownDurationPolicy::default(),
            log_level: "info".to_string(),
        }
    }
}

impl AppConfig {
    /// Location of the config file, if the platform has a config directory.
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("twinview").join("config.json"))
    }

    /// Load from the default location, falling back to defaults when there
    /// is no config directory or no file.
    pub fn load() -> Result<Self> {
        match Self::default_path() {
            Some(path) => Self::load_from(&path),
            None => Ok(Self::default()),
        }
    }

    /// Load and validate a config file. A missing file yields defaults.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "No config file, using defaults");
            return Ok(Self::default());
        }

        let data = std::fs::read(path)?;
        let config: Self = serde_json::from_slice(&data).map_err(|e| {
            TwinViewError::Config(format!("Invalid config file {}: {}", path.display(), e))
        })?;
        config.validate()?;
        tracing::info!(path = %path.display(), "Loaded config");
        Ok(config)
    }

    /// Check value ranges.
    pub fn validate(&self) -> Result<()> {
        if self.poll_interval_ms == 0 {
            return Err(TwinViewError::Config(
                "poll_interval_ms must be greater than zero".to_string(),
            ));
        }
        if !(self.mark_tolerance.is_finite() && self.mark_tolerance > 0.0) {
            return Err(TwinViewError::Config(format!(
                "mark_tolerance must be positive, got {}",
                self.mark_tolerance
            )));
        }
        if self.nudge_steps.is_empty()
            || self
                .nudge_steps
                .iter()
                .any(|s| !(s.is_finite() && *s > 0.0))
        {
            return Err(TwinViewError::Config(
                "nudge_steps must be a non-empty list of positive numbers".to_string(),
            ));
        }
        if self.rate_presets.is_empty() {
            return Err(TwinViewError::Config(
                "rate_presets must not be empty".to_string(),
            ));
        }
        for preset in &self.rate_presets {
            PlaybackRate::new(*preset).map_err(|e| TwinViewError::Config(e.to_string()))?;
        }
        PlaybackRate::new(self.default_rate).map_err(|e| TwinViewError::Config(e.to_string()))?;
        Ok(())
    }

    pub fn poll_interval(&self) -> Duration {
        Duration::from_millis(self.poll_interval_ms)
    }

    /// The startup rate, or normal speed if the stored value is invalid.
    pub fn default_rate(&self) -> PlaybackRate {
        PlaybackRate::new(self.default_rate).unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let config = AppConfig::default();
        config.validate().unwrap();
        assert_eq!(config.poll_interval(), Duration::from_millis(100));
        assert_eq!(config.mark_tolerance, 0.01);
        assert_eq!(config.nudge_steps, vec![1.0, 0.1, 0.01]);
        assert_eq!(config.unknown_duration, UnknownDurationPolicy::Defer);
    }

    #[test]
    fn test_missing_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = AppConfig::load_from(&dir.path().join("config.json")).unwrap();
        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(
            &path,
            r#"{ "poll_interval_ms": 50, "unknown_duration": "clamp_to_zero" }"#,
        )
        .unwrap();

        let config = AppConfig::load_from(&path).unwrap();
        assert_eq!(config.poll_interval_ms, 50);
        assert_eq!(config.unknown_duration, UnknownDurationPolicy::ClampToZero);
        assert_eq!(config.rate_presets, PlaybackRate::PRESETS.to_vec());
    }

    #[test]
    fn test_invalid_json_is_config_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(&path, "{ not json").unwrap();

        let err = AppConfig::load_from(&path).unwrap_err();
        assert!(matches!(err, TwinViewError::Config(_)));
    }

    #[test]
    fn test_validate_rejects_bad_values() {
        let mut config = AppConfig {
            poll_interval_ms: 0,
            ..AppConfig::default()
        };
        assert!(config.validate().is_err());

        config = AppConfig {
            mark_tolerance: 0.0,
            ..AppConfig::default()
        };
        assert!(config.validate().is_err());

        config = AppConfig {
            nudge_steps: vec![1.0, -0.1],
            ..AppConfig::default()
        };
        assert!(config.validate().is_err());

        config = AppConfig {
            rate_presets: vec![],
            ..AppConfig::default()
        };
        assert!(config.validate().is_err());

        config = AppConfig {
            default_rate: 0.0,
            ..AppConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_default_rate_falls_back() {
        let config = AppConfig {
            default_rate: -3.0,
            ..AppConfig::default()
        };
        assert_eq!(config.default_rate(), PlaybackRate::NORMAL);
    }
}
