use crate::core::weekend::{WeekendMode, WeekendPolicy};
use crate::errors::{AppError, AppResult};
use crate::export::ChartFormat;
use crate::ingest::text::{ParsePolicy, SplitFallback};
use chrono::Weekday;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// User configuration, stored as YAML.
///
/// Every field has a default so that a partial (or missing) file still loads.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Config {
    /// Number of columns a well-formed export is expected to have.
    pub expected_columns: usize,
    /// Treat runs of two or more spaces in pasted text as a column delimiter.
    pub collapse_space_runs: bool,
    /// Re-split strategy for a header line with too few tab-separated fields.
    pub header_fallback: SplitFallback,
    /// Re-split strategy for a data row with fewer fields than the header.
    pub row_fallback: SplitFallback,
    pub weekend_mode: WeekendMode,
    /// Weekday names used when `weekend_mode` is `days`.
    pub weekend_days: Vec<String>,
    /// Worksheet name used by the XLSX export.
    pub sheet_name: String,
    pub chart_format: ChartFormat,
    pub chart_width: u32,
    pub chart_height: u32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            expected_columns: 8,
            collapse_space_runs: true,
            header_fallback: SplitFallback::WhitespaceRun,
            row_fallback: SplitFallback::Disabled,
            weekend_mode: WeekendMode::Rolling,
            weekend_days: vec![
                "Friday".to_string(),
                "Saturday".to_string(),
                "Sunday".to_string(),
            ],
            sheet_name: "FilteredData".to_string(),
            chart_format: ChartFormat::Png,
            chart_width: 1024,
            chart_height: 640,
        }
    }
}

impl Config {
    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        if cfg!(target_os = "windows") {
            dirs::config_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join("change-analyzer")
        } else {
            dirs::home_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join(".change-analyzer")
        }
    }

    /// Return the full path of the default config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("change-analyzer.conf")
    }

    /// Load configuration from `path` (or the default location).
    ///
    /// A missing file yields the defaults; a malformed one is an error.
    pub fn load(path: Option<&Path>) -> AppResult<Self> {
        let path = path.map(Path::to_path_buf).unwrap_or_else(Self::config_file);

        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&path)?;
        if content.trim().is_empty() {
            return Ok(Self::default());
        }

        let cfg: Config = serde_yaml::from_str(&content)
            .map_err(|e| AppError::Config(format!("{}: {e}", path.display())))?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Write the default configuration to `path` (or the default location).
    /// Returns the path actually written.
    pub fn init(path: Option<&Path>) -> AppResult<PathBuf> {
        let path = path.map(Path::to_path_buf).unwrap_or_else(Self::config_file);

        if let Some(dir) = path.parent() {
            if !dir.as_os_str().is_empty() {
                fs::create_dir_all(dir)?;
            }
        }

        fs::write(&path, Self::default().to_yaml()?)?;
        Ok(path)
    }

    pub fn to_yaml(&self) -> AppResult<String> {
        serde_yaml::to_string(self).map_err(|e| AppError::Config(e.to_string()))
    }

    fn validate(&self) -> AppResult<()> {
        if self.expected_columns == 0 {
            return Err(AppError::Config(
                "expected_columns must be at least 1".to_string(),
            ));
        }
        if self.sheet_name.trim().is_empty() || self.sheet_name.chars().count() > 31 {
            return Err(AppError::Config(format!(
                "invalid sheet_name '{}' (1 to 31 characters)",
                self.sheet_name
            )));
        }
        if self.chart_width == 0 || self.chart_height == 0 {
            return Err(AppError::Config(
                "chart_width and chart_height must be positive".to_string(),
            ));
        }
        self.weekend_weekdays().map(|_| ())
    }

    fn weekend_weekdays(&self) -> AppResult<Vec<Weekday>> {
        self.weekend_days
            .iter()
            .map(|d| {
                d.trim()
                    .parse::<Weekday>()
                    .map_err(|_| AppError::Config(format!("invalid weekday in weekend_days: {d}")))
            })
            .collect()
    }

    pub fn parse_policy(&self) -> ParsePolicy {
        ParsePolicy {
            expected_columns: self.expected_columns,
            collapse_space_runs: self.collapse_space_runs,
            header_fallback: self.header_fallback,
            row_fallback: self.row_fallback,
        }
    }

    /// Build the weekend policy, optionally overriding the configured mode.
    pub fn weekend_policy(&self, mode: Option<WeekendMode>) -> AppResult<WeekendPolicy> {
        match mode.unwrap_or(self.weekend_mode) {
            WeekendMode::Rolling => Ok(WeekendPolicy::Rolling),
            WeekendMode::Days => Ok(WeekendPolicy::Days(self.weekend_weekdays()?)),
        }
    }
}
