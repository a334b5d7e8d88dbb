//! Configuration loading and validation.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::models::{WeekRange, SEASON_WEEKS};

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    ReadError(#[from] std::io::Error),

    #[error("Failed to parse config: {0}")]
    ParseError(#[from] toml::de::Error),

    #[error("Invalid configuration: {0}")]
    ValidationError(String),
}

/// League settings: season shape and week locking.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LeagueConfig {
    /// Number of weeks in the season
    #[serde(default = "default_season_weeks")]
    pub season_weeks: u32,

    /// Last week that counts toward standings (None = whole season)
    #[serde(default)]
    pub current_week: Option<u32>,

    /// Weeks whose lineups can no longer be changed
    #[serde(default)]
    pub locked_weeks: Vec<u32>,

    /// Reject malformed league data instead of warning about it
    #[serde(default = "default_strict_validation")]
    pub strict_validation: bool,
}

fn default_season_weeks() -> u32 {
    SEASON_WEEKS
}

fn default_strict_validation() -> bool {
    true
}

impl Default for LeagueConfig {
    fn default() -> Self {
        Self {
            season_weeks: default_season_weeks(),
            current_week: None,
            locked_weeks: Vec::new(),
            strict_validation: default_strict_validation(),
        }
    }
}

impl LeagueConfig {
    /// The weeks the standings engine may count.
    pub fn week_range(&self) -> WeekRange {
        match self.current_week {
            Some(week) => WeekRange::through_week(self.season_weeks, week),
            None => WeekRange::full_season(self.season_weeks),
        }
    }

    pub fn is_week_locked(&self, week: u32) -> bool {
        self.locked_weeks.contains(&week)
    }
}

/// Main application configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default = "default_data_dir")]
    pub data_dir: PathBuf,

    #[serde(default = "default_log_level")]
    pub log_level: String,

    #[serde(default)]
    pub league: LeagueConfig,
}

fn default_data_dir() -> PathBuf {
    PathBuf::from("./data")
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
            log_level: default_log_level(),
            league: LeagueConfig::default(),
        }
    }
}

impl AppConfig {
    /// Load configuration from a TOML file.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        let config: AppConfig = toml::from_str(&contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Load from `path` if it exists, otherwise fall back to defaults.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::from_file(path)
        } else {
            Ok(Self::default())
        }
    }

    /// Validate the configuration.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let league = &self.league;

        if league.season_weeks == 0 {
            return Err(ConfigError::ValidationError(
                "Season must have at least one week".to_string(),
            ));
        }

        if let Some(week) = league.current_week {
            if week == 0 || week > league.season_weeks {
                return Err(ConfigError::ValidationError(format!(
                    "current_week {} is outside the {}-week season",
                    week, league.season_weeks
                )));
            }
        }

        if let Some(week) = league
            .locked_weeks
            .iter()
            .find(|&&w| w == 0 || w > league.season_weeks)
        {
            return Err(ConfigError::ValidationError(format!(
                "Locked week {} is outside the {}-week season",
                week, league.season_weeks
            )));
        }

        Ok(())
    }
}
