//! TOML-based application configuration.
//!
//! Stores user preferences including:
//! - Planner defaults (day start, session and break durations)
//! - Notification preferences
//!
//! Configuration is stored at `~/.config/studyflow/config.toml`.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use super::data_dir;
use crate::error::ConfigError;
use crate::scheduler::PlannerConfig;

/// Planner-specific configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlannerSection {
    #[serde(default = "default_day_start")]
    pub day_start: String,
    #[serde(default = "default_hard_minutes")]
    pub hard_minutes: u64,
    #[serde(default = "default_medium_minutes")]
    pub medium_minutes: u64,
    #[serde(default = "default_easy_minutes")]
    pub easy_minutes: u64,
    #[serde(default = "default_short_break")]
    pub short_break_minutes: u64,
    #[serde(default = "default_tired_break")]
    pub tired_break_minutes: u64,
    #[serde(default = "default_tired_scale_pct")]
    pub tired_scale_pct: u64,
}

/// Notification configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NotificationsConfig {
    #[serde(default = "default_true")]
    pub enabled: bool,
    #[serde(default = "default_50")]
    pub volume: u32,
    /// Play the ascending chime when a block finishes.
    #[serde(default = "default_true")]
    pub chime: bool,
}

/// Application configuration.
///
/// Serialized to/from TOML at `~/.config/studyflow/config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub planner: PlannerSection,
    #[serde(default)]
    pub notifications: NotificationsConfig,
}

// Default functions
fn default_day_start() -> String {
    "09:00".into()
}
fn default_hard_minutes() -> u64 {
    90
}
fn default_medium_minutes() -> u64 {
    45
}
fn default_easy_minutes() -> u64 {
    30
}
fn default_short_break() -> u64 {
    15
}
fn default_tired_break() -> u64 {
    20
}
fn default_tired_scale_pct() -> u64 {
    70
}
fn default_true() -> bool {
    true
}
fn default_50() -> u32 {
    50
}

impl Default for PlannerSection {
    fn default() -> Self {
        Self {
            day_start: default_day_start(),
            hard_minutes: default_hard_minutes(),
            medium_minutes: default_medium_minutes(),
            easy_minutes: default_easy_minutes(),
            short_break_minutes: default_short_break(),
            tired_break_minutes: default_tired_break(),
            tired_scale_pct: default_tired_scale_pct(),
        }
    }
}

impl Default for NotificationsConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            volume: 50,
            chime: true,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            planner: PlannerSection::default(),
            notifications: NotificationsConfig::default(),
        }
    }
}

impl Config {
    fn path() -> Result<PathBuf, std::io::Error> {
        Ok(data_dir()?.join("config.toml"))
    }

    /// Load from disk or return default, writing the default back.
    ///
    /// # Errors
    ///
    /// Returns an error if the config file exists but cannot be parsed,
    /// or if the default config cannot be written to disk.
    pub fn load() -> Result<Self, ConfigError> {
        let path = Self::path().map_err(|e| ConfigError::LoadFailed {
            path: PathBuf::from("config.toml"),
            message: e.to_string(),
        })?;
        Self::load_from(&path)
    }

    /// Persist to disk.
    ///
    /// # Errors
    ///
    /// Returns an error if the config cannot be serialized or written.
    pub fn save(&self) -> Result<(), ConfigError> {
        let path = Self::path().map_err(|e| ConfigError::SaveFailed {
            path: PathBuf::from("config.toml"),
            message: e.to_string(),
        })?;
        self.save_to(&path)
    }

    /// Load from an explicit path, seeding it with defaults when absent.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        match std::fs::read_to_string(path) {
            Ok(content) => toml::from_str(&content).map_err(|e| ConfigError::LoadFailed {
                path: path.to_path_buf(),
                message: e.to_string(),
            }),
            Err(_) => {
                let cfg = Self::default();
                cfg.save_to(path)?;
                Ok(cfg)
            }
        }
    }

    /// Persist to an explicit path.
    pub fn save_to(&self, path: &Path) -> Result<(), ConfigError> {
        let content = toml::to_string_pretty(self).map_err(|e| ConfigError::SaveFailed {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        std::fs::write(path, content).map_err(|e| ConfigError::SaveFailed {
            path: path.to_path_buf(),
            message: e.to_string(),
        })
    }

    /// Load from disk, returning default on error.
    /// This is a convenience method that never fails.
    pub fn load_or_default() -> Self {
        Self::load().unwrap_or_default()
    }

    /// Materialize the planner configuration from this config.
    pub fn planner(&self) -> PlannerConfig {
        PlannerConfig {
            day_start: self.planner.day_start.clone(),
            hard_minutes: self.planner.hard_minutes,
            medium_minutes: self.planner.medium_minutes,
            easy_minutes: self.planner.easy_minutes,
            short_break_minutes: self.planner.short_break_minutes,
            tired_break_minutes: self.planner.tired_break_minutes,
            tired_scale_pct: self.planner.tired_scale_pct,
        }
    }
}
