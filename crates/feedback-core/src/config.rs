// Rust guideline compliant 2026-02-06

//! Configuration management for the feedback dashboard.

use crate::view::DEFAULT_PAGE_STEP;
use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Output format for command results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum OutputFormat {
    /// JSON output format.
    Json,
    /// Human-readable table format.
    #[default]
    Table,
    /// Plain text format.
    Plain,
}

/// Configuration for dashboard behavior.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Records per page, and records added by each "load more".
    #[serde(default = "default_page_size")]
    pub page_size: usize,

    /// Default output format for commands.
    #[serde(default)]
    pub output_format: OutputFormat,

    /// Whether to show absolute UTC times instead of relative ages.
    #[serde(default)]
    pub absolute_time: bool,
}

fn default_page_size() -> usize {
    DEFAULT_PAGE_STEP
}

impl Default for Config {
    fn default() -> Self {
        Self {
            page_size: default_page_size(),
            output_format: OutputFormat::default(),
            absolute_time: false,
        }
    }
}

impl Config {
    /// Loads configuration from file and environment variables.
    ///
    /// Configuration is loaded in the following order (later overrides earlier):
    /// 1. Default values
    /// 2. Configuration file at `.feedback/config.toml`
    /// 3. Environment variables with `FEEDBACK_` prefix
    ///
    /// # Arguments
    ///
    /// * `feedback_dir` - Path to the `.feedback` directory
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - Configuration file exists but cannot be read
    /// - Configuration file contains invalid TOML
    /// - Configuration values fail validation
    pub fn load(feedback_dir: &Path) -> Result<Self> {
        Self::load_with(feedback_dir, |key| std::env::var(key).ok())
    }

    /// Loads configuration, resolving overrides through `lookup`.
    ///
    /// `lookup` receives an environment variable name and returns its value.
    ///
    /// # Errors
    ///
    /// Same as [`Config::load`].
    pub fn load_with<F>(feedback_dir: &Path, lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        let config_path = feedback_dir.join("config.toml");
        if config_path.exists() {
            let content = std::fs::read_to_string(&config_path)?;
            config = toml::from_str(&content)
                .map_err(|e| Error::InvalidConfig(format!("Invalid config file: {}", e)))?;
        }

        config.apply_overrides(lookup)?;
        config.validate()?;

        Ok(config)
    }

    /// Applies overrides to the configuration.
    ///
    /// Supported variables:
    /// - `FEEDBACK_PAGE_SIZE` - Records per page (positive integer)
    /// - `FEEDBACK_OUTPUT_FORMAT` - Output format (json/table/plain)
    /// - `FEEDBACK_ABSOLUTE_TIME` - Absolute timestamps (true/false)
    fn apply_overrides<F>(&mut self, lookup: F) -> Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(val) = lookup("FEEDBACK_PAGE_SIZE") {
            self.page_size = val.parse().map_err(|_| {
                Error::InvalidConfig("FEEDBACK_PAGE_SIZE must be a positive number".to_string())
            })?;
        }

        if let Some(val) = lookup("FEEDBACK_OUTPUT_FORMAT") {
            self.output_format = match val.as_str() {
                "json" => OutputFormat::Json,
                "table" => OutputFormat::Table,
                "plain" => OutputFormat::Plain,
                _ => {
                    return Err(Error::InvalidConfig(
                        "FEEDBACK_OUTPUT_FORMAT must be json, table, or plain".to_string(),
                    ))
                }
            };
        }

        if let Some(val) = lookup("FEEDBACK_ABSOLUTE_TIME") {
            self.absolute_time = val.parse().map_err(|_| {
                Error::InvalidConfig("FEEDBACK_ABSOLUTE_TIME must be true or false".to_string())
            })?;
        }

        Ok(())
    }

    fn validate(&self) -> Result<()> {
        if self.page_size == 0 {
            return Err(Error::InvalidConfig(
                "page_size must be greater than 0".to_string(),
            ));
        }

        Ok(())
    }

    /// Saves the configuration to `config.toml` in `feedback_dir`.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails or the file cannot be written.
    pub fn save(&self, feedback_dir: &Path) -> Result<()> {
        let config_path = feedback_dir.join("config.toml");
        let content = toml::to_string_pretty(self)
            .map_err(|e| Error::InvalidConfig(format!("Failed to serialize config: {}", e)))?;
        std::fs::write(&config_path, content)?;
        Ok(())
    }
}
