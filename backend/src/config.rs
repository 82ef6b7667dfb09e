//! Pipeline and server configuration.
//!
//! `PipelineConfig` is read from a TOML file (`timeline.toml`); every field is
//! optional and falls back to the defaults below. `ServerConfig` is read from
//! environment variables.
//!
//! ```toml
//! [pipeline]
//! include_stage_split = true
//! date_adjust_days = 3
//! season_start = "2025-01-01"
//! season_end = "2025-12-31"
//! missing_date_policy = "retain"
//! ```

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{ErrorContext, TimelineError, TimelineResult};
use crate::models::SeasonWindow;

/// Largest accepted direct-sow offset, roughly a century.
pub const MAX_DATE_ADJUST_DAYS: i64 = 36_500;

/// What to do with rows whose start or end date is blank or unparseable.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MissingDatePolicy {
    /// Keep the row with `None` dates.
    #[default]
    Retain,
    /// Drop the row after direct-sow adjustment if either date is still `None`.
    Drop,
}

/// Knobs for the transform pipeline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PipelineConfig {
    /// Emit long-form stage events (one per non-null date) alongside the records.
    #[serde(default)]
    pub include_stage_split: bool,
    /// Days subtracted from the sow date to form a direct-sow start date.
    #[serde(default = "default_date_adjust_days")]
    pub date_adjust_days: i64,
    #[serde(default = "default_season_start")]
    pub season_start: NaiveDate,
    #[serde(default = "default_season_end")]
    pub season_end: NaiveDate,
    #[serde(default)]
    pub missing_date_policy: MissingDatePolicy,
}

fn default_date_adjust_days() -> i64 {
    3
}

fn default_season_start() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 1, 1).unwrap_or_default()
}

fn default_season_end() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 12, 31).unwrap_or_default()
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            include_stage_split: false,
            date_adjust_days: default_date_adjust_days(),
            season_start: default_season_start(),
            season_end: default_season_end(),
            missing_date_policy: MissingDatePolicy::default(),
        }
    }
}

/// On-disk layout of `timeline.toml`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
struct ConfigFile {
    #[serde(default)]
    pipeline: PipelineConfig,
}

impl PipelineConfig {
    /// Load the pipeline configuration from a TOML file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> TimelineResult<Self> {
        let path = path.as_ref();
        let context = || ErrorContext::new("load_config").with_path(path);

        let content = fs::read_to_string(path).map_err(|e| {
            TimelineError::configuration_with_context(
                format!("Failed to read config file: {}", e),
                context(),
            )
        })?;

        Self::from_toml_str(&content).map_err(|e| match e {
            TimelineError::ConfigurationError { message, .. } => {
                TimelineError::configuration_with_context(message, context())
            }
            other => other,
        })
    }

    /// Parse and validate a configuration from TOML text.
    pub fn from_toml_str(content: &str) -> TimelineResult<Self> {
        let file: ConfigFile = toml::from_str(content).map_err(|e| {
            TimelineError::configuration(format!("Failed to parse config file: {}", e))
        })?;
        file.pipeline.validate()?;
        Ok(file.pipeline)
    }

    /// Load configuration from the default location, or defaults if none exists.
    ///
    /// Searches for `timeline.toml` in:
    /// 1. Current directory
    /// 2. `backend/` directory
    /// 3. Parent directory
    pub fn from_default_location() -> TimelineResult<Self> {
        let search_paths = [
            PathBuf::from("timeline.toml"),
            PathBuf::from("backend/timeline.toml"),
            PathBuf::from("../timeline.toml"),
        ];

        for path in search_paths {
            if path.exists() {
                return Self::from_file(&path);
            }
        }

        log::debug!("No timeline.toml found, using default pipeline configuration");
        Ok(Self::default())
    }

    pub fn validate(&self) -> TimelineResult<()> {
        if self.date_adjust_days < 0 {
            return Err(TimelineError::configuration(format!(
                "date_adjust_days must be non-negative, got {}",
                self.date_adjust_days
            )));
        }
        if self.date_adjust_days > MAX_DATE_ADJUST_DAYS {
            return Err(TimelineError::configuration(format!(
                "date_adjust_days must be at most {}, got {}",
                MAX_DATE_ADJUST_DAYS, self.date_adjust_days
            )));
        }
        if self.season_start > self.season_end {
            return Err(TimelineError::configuration(format!(
                "season_start {} is after season_end {}",
                self.season_start, self.season_end
            )));
        }
        Ok(())
    }

    pub fn season_window(&self) -> SeasonWindow {
        SeasonWindow::new(self.season_start, self.season_end)
    }
}

/// Server settings loaded from environment variables.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// Planting schedule file re-read on every request
    pub csv_path: PathBuf,
    /// Explicit pipeline config file; `None` searches the default locations
    pub config_path: Option<PathBuf>,
}

impl ServerConfig {
    /// Create a server configuration from environment variables.
    ///
    /// # Environment Variables
    /// - `HOST` (optional, default: 0.0.0.0)
    /// - `PORT` (optional, default: 8080)
    /// - `SEED_CSV_PATH` (optional, default: 2025-seeds.csv)
    /// - `TIMELINE_CONFIG` (optional): path to a `timeline.toml`
    ///
    /// # Errors
    /// Returns an error if `PORT` is not a valid port number.
    pub fn from_env() -> TimelineResult<Self> {
        let host = env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
        let port = match env::var("PORT") {
            Ok(raw) => raw.parse().map_err(|_| {
                TimelineError::configuration(format!("PORT must be a valid port number, got '{}'", raw))
            })?,
            Err(_) => 8080,
        };
        let csv_path = env::var("SEED_CSV_PATH")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("2025-seeds.csv"));
        let config_path = env::var("TIMELINE_CONFIG").ok().map(PathBuf::from);

        Ok(Self {
            host,
            port,
            csv_path,
            config_path,
        })
    }

    /// Resolve the pipeline configuration this server should use.
    pub fn pipeline_config(&self) -> TimelineResult<PipelineConfig> {
        match &self.config_path {
            Some(path) => PipelineConfig::from_file(path),
            None => PipelineConfig::from_default_location(),
        }
    }
}
