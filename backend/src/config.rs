//! Configuration file support.
//!
//! Settings are read from a TOML file; every section and key is optional.
//!
//! ```toml
//! [layout]
//! minutes_per_row = 30
//! weekdays = ["M", "T", "W", "R", "F"]
//! strict_weekdays = false
//!
//! [render]
//! title = "Weekly Schedule"
//! stylesheet_name = "style.css"
//! html_name = "schedule.html"
//! base_stylesheet = "/home/me/school/schedule_gen/base_style.css"
//! palette = ["red", "lime", "blue"]
//!
//! [paths]
//! school_dir = "/home/me/school"
//! ```

use log::debug;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{ScheduleError, ScheduleResult};
use crate::models::{Weekday, WeekdayPolicy};
use crate::services::colors::BASE_COLORS;
use crate::services::layout::{LayoutConfig, DEFAULT_MINUTES_PER_ROW};

pub const ENV_SCHOOL_DIR: &str = "SCHEDULE_GEN_SCHOOL_DIR";
pub const ENV_MINUTES_PER_ROW: &str = "SCHEDULE_GEN_MINUTES_PER_ROW";

/// Top-level configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleConfig {
    #[serde(default)]
    pub layout: LayoutSettings,
    #[serde(default)]
    pub render: RenderSettings,
    #[serde(default)]
    pub paths: PathSettings,
}

/// Calendar grid settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LayoutSettings {
    #[serde(default = "default_minutes_per_row")]
    pub minutes_per_row: u32,
    #[serde(default = "default_weekdays")]
    pub weekdays: Vec<Weekday>,
    #[serde(default)]
    pub strict_weekdays: bool,
}

/// Output document settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenderSettings {
    #[serde(default = "default_title")]
    pub title: String,
    #[serde(default = "default_stylesheet_name")]
    pub stylesheet_name: String,
    #[serde(default = "default_html_name")]
    pub html_name: String,
    #[serde(default)]
    pub base_stylesheet: Option<PathBuf>,
    #[serde(default = "default_palette")]
    pub palette: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PathSettings {
    #[serde(default)]
    pub school_dir: Option<PathBuf>,
}

fn default_minutes_per_row() -> u32 {
    DEFAULT_MINUTES_PER_ROW
}

fn default_weekdays() -> Vec<Weekday> {
    Weekday::ALL.to_vec()
}

fn default_title() -> String {
    "Weekly Schedule".to_string()
}

fn default_stylesheet_name() -> String {
    "style.css".to_string()
}

fn default_html_name() -> String {
    "schedule.html".to_string()
}

fn default_palette() -> Vec<String> {
    BASE_COLORS.iter().map(|c| c.to_string()).collect()
}

impl Default for LayoutSettings {
    fn default() -> Self {
        Self {
            minutes_per_row: default_minutes_per_row(),
            weekdays: default_weekdays(),
            strict_weekdays: false,
        }
    }
}

impl Default for RenderSettings {
    fn default() -> Self {
        Self {
            title: default_title(),
            stylesheet_name: default_stylesheet_name(),
            html_name: default_html_name(),
            base_stylesheet: None,
            palette: default_palette(),
        }
    }
}

impl ScheduleConfig {
    /// Load configuration from a TOML file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> ScheduleResult<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| ScheduleError::io(path, e))?;
        let config: ScheduleConfig = toml::from_str(&content)?;
        debug!("Loaded configuration from {}", path.display());
        Ok(config)
    }

    /// Load configuration from the default location.
    ///
    /// Searches for `schedule_gen.toml` in:
    /// 1. Current directory
    /// 2. `backend/` directory
    /// 3. Parent directory
    ///
    /// Returns `Ok(None)` when no file exists.
    pub fn from_default_location() -> ScheduleResult<Option<Self>> {
        let search_paths = [
            PathBuf::from("schedule_gen.toml"),
            PathBuf::from("backend/schedule_gen.toml"),
            PathBuf::from("../schedule_gen.toml"),
        ];

        for path in search_paths {
            if path.exists() {
                return Self::from_file(&path).map(Some);
            }
        }
        Ok(None)
    }

    /// Explicit file if given, else the default location, else built-in defaults.
    /// Environment overrides are applied last, then the result is validated.
    pub fn load(path: Option<&Path>) -> ScheduleResult<Self> {
        let mut config = match path {
            Some(path) => Self::from_file(path)?,
            None => Self::from_default_location()?.unwrap_or_default(),
        };
        config.apply_env_overrides()?;
        config.validate()?;
        Ok(config)
    }

    /// Apply overrides from the environment.
    ///
    /// # Environment Variables
    /// - `SCHEDULE_GEN_SCHOOL_DIR`: root directory holding term directories
    /// - `SCHEDULE_GEN_MINUTES_PER_ROW`: row granularity in minutes
    pub fn apply_env_overrides(&mut self) -> ScheduleResult<()> {
        if let Ok(dir) = env::var(ENV_SCHOOL_DIR) {
            self.paths.school_dir = Some(PathBuf::from(dir));
        }
        if let Ok(value) = env::var(ENV_MINUTES_PER_ROW) {
            self.layout.minutes_per_row = value.trim().parse().map_err(|_| {
                ScheduleError::InvalidConfig(format!(
                    "{} must be a positive integer, got '{}'",
                    ENV_MINUTES_PER_ROW, value
                ))
            })?;
        }
        Ok(())
    }

    pub fn validate(&self) -> ScheduleResult<()> {
        self.layout_config().map(|_| ())?;
        if self.render.stylesheet_name.trim().is_empty()
            || self.render.html_name.trim().is_empty()
        {
            return Err(ScheduleError::InvalidConfig(
                "output file names must not be empty".to_string(),
            ));
        }
        Ok(())
    }

    pub fn layout_config(&self) -> ScheduleResult<LayoutConfig> {
        LayoutConfig::new(
            self.layout.minutes_per_row,
            self.layout.weekdays.clone(),
            self.render.palette.clone(),
        )
    }

    pub fn weekday_policy(&self) -> WeekdayPolicy {
        if self.layout.strict_weekdays {
            WeekdayPolicy::Strict
        } else {
            WeekdayPolicy::Lenient
        }
    }

    /// Base stylesheet text: the configured file, or the bundled default.
    pub fn base_stylesheet(&self) -> ScheduleResult<String> {
        match &self.render.base_stylesheet {
            Some(path) => fs::read_to_string(path).map_err(|e| ScheduleError::io(path, e)),
            None => Ok(crate::render::DEFAULT_BASE_STYLESHEET.to_string()),
        }
    }
}
