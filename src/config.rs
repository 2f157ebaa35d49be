use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::core::encounter::EncounterOptions;

/// Top-level application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub tui: TuiConfig,
    pub encounter: EncounterConfig,
    pub data: DataConfig,
}

/// Colour scheme selector, also the argument of the `mode` command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    #[default]
    Dark,
    Light,
}

/// TUI-specific configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TuiConfig {
    /// Redraws per second.
    pub frame_rate: u32,
    /// Starting colour scheme.
    pub theme: ThemeMode,
}

/// Encounter rules configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct EncounterConfig {
    /// Drop a participant's conditions when the participant is removed.
    pub cascade_remove_conditions: bool,
    /// Number of sides on the initiative die.
    pub initiative_die: u32,
}

/// Data directory configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct DataConfig {
    /// Override the default log directory.
    pub log_dir: Option<PathBuf>,
}

impl Default for TuiConfig {
    fn default() -> Self {
        Self {
            frame_rate: 60,
            theme: ThemeMode::Dark,
        }
    }
}

impl Default for EncounterConfig {
    fn default() -> Self {
        let options = EncounterOptions::default();
        Self {
            cascade_remove_conditions: options.cascade_remove_conditions,
            initiative_die: options.initiative_die,
        }
    }
}

impl TuiConfig {
    /// Interval between redraws, with the frame rate clamped to 1..=240.
    pub fn frame_interval(&self) -> Duration {
        let fps = self.frame_rate.clamp(1, 240);
        Duration::from_micros(1_000_000 / u64::from(fps))
    }
}

impl EncounterConfig {
    pub fn options(&self) -> EncounterOptions {
        EncounterOptions {
            cascade_remove_conditions: self.cascade_remove_conditions,
            initiative_die: self.initiative_die.max(1),
        }
    }
}

/// How the configuration was obtained. Returned by the loaders so the
/// outcome can be logged once a subscriber is installed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigSource {
    File(PathBuf),
    Missing(PathBuf),
    Invalid { path: PathBuf, error: String },
}

impl ConfigSource {
    pub fn log(&self) {
        match self {
            Self::File(path) => log::info!("Loaded config from {}", path.display()),
            Self::Missing(path) => {
                log::debug!("No config file at {}, using defaults", path.display())
            }
            Self::Invalid { path, error } => log::warn!(
                "Failed to parse config at {}: {error}, using defaults",
                path.display()
            ),
        }
    }
}

impl AppConfig {
    /// Load configuration from `~/.config/encounter-tracker/config.toml`.
    /// Falls back to `Default` if the file is missing or unparseable.
    pub fn load() -> (Self, ConfigSource) {
        Self::load_from(&Self::config_path())
    }

    pub fn load_from(config_path: &Path) -> (Self, ConfigSource) {
        let path = config_path.to_path_buf();
        match std::fs::read_to_string(config_path) {
            Ok(contents) => match toml::from_str(&contents) {
                Ok(config) => (config, ConfigSource::File(path)),
                Err(e) => (
                    Self::default(),
                    ConfigSource::Invalid {
                        path,
                        error: e.to_string(),
                    },
                ),
            },
            Err(_) => (Self::default(), ConfigSource::Missing(path)),
        }
    }

    /// Resolved log directory (override or XDG default).
    pub fn log_dir(&self) -> PathBuf {
        self.data.log_dir.clone().unwrap_or_else(|| {
            dirs::data_dir()
                .map(|d| d.join("encounter-tracker").join("logs"))
                .unwrap_or_else(|| PathBuf::from("logs"))
        })
    }

    fn config_path() -> PathBuf {
        dirs::config_dir()
            .map(|d| d.join("encounter-tracker").join("config.toml"))
            .unwrap_or_else(|| PathBuf::from("config.toml"))
    }
}
