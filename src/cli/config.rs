//! Configuration management for agentquiz
//!
//! Provides TOML-based configuration with defaults and validation.
//! Location: ~/.agentquiz/config.toml

use crate::cli::args::Verbosity;
use crate::errors::{QuizError, Result};
use crate::quiz::{LABYRINTH_RESULT_FILE, MBTI_RESULT_FILE};
use crate::report::ReportOptions;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Complete configuration for agentquiz
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub data: DataConfig,
    #[serde(default)]
    pub output: OutputConfig,
    #[serde(default)]
    pub report: ReportConfig,
    #[serde(default)]
    pub display: DisplayConfig,
}

/// Question data overrides
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DataConfig {
    pub mbti_path: Option<String>,
    pub labyrinth_path: Option<String>,
}

/// Report file settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub directory: String,
    pub mbti_file: String,
    pub labyrinth_file: String,
    pub save: bool,
}

/// Report layout
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ReportConfig {
    pub bar_max: u32,
    pub bar_width: usize,
}

/// Terminal display settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    pub color_output: bool,
    pub default_verbosity: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            directory: ".".to_string(),
            mbti_file: MBTI_RESULT_FILE.to_string(),
            labyrinth_file: LABYRINTH_RESULT_FILE.to_string(),
            save: true,
        }
    }
}

impl Default for ReportConfig {
    fn default() -> Self {
        let options = ReportOptions::default();
        Self {
            bar_max: options.bar_max,
            bar_width: options.bar_width,
        }
    }
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            color_output: true,
            default_verbosity: "normal".to_string(),
        }
    }
}

impl Config {
    /// Load configuration from file or use defaults
    pub fn load(path: Option<&Path>) -> Result<Self> {
        if let Some(config_path) = path {
            Self::load_from_file(config_path)
        } else {
            Self::load_default()
        }
    }

    /// Load configuration from specific file
    pub fn load_from_file(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| QuizError::ConfigError(format!("Failed to read config: {}", e)))?;

        let config: Config = toml::from_str(&contents)
            .map_err(|e| QuizError::ConfigError(format!("Failed to parse config: {}", e)))?;

        config.validate()?;
        tracing::debug!("Loaded configuration from {}", path.display());
        Ok(config)
    }

    /// Load default configuration from standard location or use built-in defaults
    pub fn load_default() -> Result<Self> {
        if let Some(config_path) = Self::default_path() {
            if config_path.exists() {
                return Self::load_from_file(&config_path);
            }
        }

        Ok(Config::default())
    }

    /// Standard config location
    pub fn default_path() -> Option<PathBuf> {
        dirs::home_dir().map(|home| home.join(".agentquiz").join("config.toml"))
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        if self.report.bar_max == 0 {
            return Err(QuizError::ConfigError(
                "bar_max must be greater than 0".to_string(),
            ));
        }

        if self.report.bar_width == 0 {
            return Err(QuizError::ConfigError(
                "bar_width must be greater than 0".to_string(),
            ));
        }

        if self.output.mbti_file.trim().is_empty() || self.output.labyrinth_file.trim().is_empty() {
            return Err(QuizError::ConfigError(
                "report file names must not be empty".to_string(),
            ));
        }

        if Verbosity::from_name(&self.display.default_verbosity).is_none() {
            return Err(QuizError::ConfigError(format!(
                "Invalid verbosity level: {}",
                self.display.default_verbosity
            )));
        }

        Ok(())
    }

    /// Pretty TOML rendering
    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self)
            .map_err(|e| QuizError::ConfigError(format!("Failed to serialize config: {}", e)))
    }

    /// Expand tilde in paths
    pub fn expand_path(path: &str) -> PathBuf {
        if let Some(rest) = path.strip_prefix("~/") {
            if let Some(home) = dirs::home_dir() {
                return home.join(rest);
            }
        }
        PathBuf::from(path)
    }

    /// Report layout options
    pub fn report_options(&self) -> ReportOptions {
        ReportOptions {
            bar_max: self.report.bar_max,
            bar_width: self.report.bar_width,
        }
    }

    /// Directory reports are written to
    pub fn output_dir(&self) -> PathBuf {
        Self::expand_path(&self.output.directory)
    }

    pub fn mbti_data_path(&self) -> Option<PathBuf> {
        self.data.mbti_path.as_deref().map(Self::expand_path)
    }

    pub fn labyrinth_data_path(&self) -> Option<PathBuf> {
        self.data.labyrinth_path.as_deref().map(Self::expand_path)
    }

    /// Configured default verbosity; validation guarantees it parses
    pub fn default_verbosity(&self) -> Verbosity {
        Verbosity::from_name(&self.display.default_verbosity).unwrap_or(Verbosity::Normal)
    }
}
