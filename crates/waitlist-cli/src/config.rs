//! Configuration management for the CLI
//!
//! This module handles loading configuration from:
//! - Default values
//! - Configuration files (YAML/JSON)
//! - Command-line arguments (applied by the handlers on top)

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;
use waitlist_core::form::{ControllerSettings, DEFAULT_REDIRECT};
use waitlist_core::submit::DEFAULT_SIMULATED_DELAY;

/// Main configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Submission settings
    pub submission: SubmissionConfig,

    /// Output settings
    pub output: OutputConfig,

    /// Logging settings
    pub logging: LoggingConfig,
}

/// Where and how forms are submitted
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SubmissionConfig {
    /// HTTP endpoint; the simulated backend is used when unset
    pub endpoint: Option<String>,

    /// Latency of the simulated backend in milliseconds
    pub delay_ms: u64,

    /// Bound on the submission call in seconds; unbounded when unset
    pub timeout_secs: Option<u64>,

    /// Page to redirect to after a successful submission
    pub redirect: String,

    /// Emit the analytics event after a successful submission
    pub analytics: bool,
}

/// Output configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Use colored output by default
    pub color: bool,

    /// Show progress indicators
    pub progress: bool,
}

/// Logging configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error)
    pub level: Option<String>,

    /// Log format (compact, full, json)
    pub format: Option<String>,

    /// Log file path
    pub file: Option<PathBuf>,
}

impl Default for SubmissionConfig {
    fn default() -> Self {
        Self {
            endpoint: None,
            delay_ms: DEFAULT_SIMULATED_DELAY.as_millis() as u64,
            timeout_secs: None,
            redirect: DEFAULT_REDIRECT.to_string(),
            analytics: true,
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            color: true,
            progress: true,
        }
    }
}

impl SubmissionConfig {
    /// Controller settings derived from this section
    pub fn controller_settings(&self) -> ControllerSettings {
        ControllerSettings {
            redirect_target: self.redirect.clone(),
            timeout: self.timeout_secs.map(Duration::from_secs),
            ..ControllerSettings::default()
        }
    }
}

impl Config {
    /// Load configuration from a file
    pub fn from_file(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(Error::FileNotFound {
                path: path.to_path_buf(),
            });
        }

        let content = std::fs::read_to_string(path)?;

        let config = if is_yaml(path) {
            serde_yaml::from_str(&content)?
        } else {
            serde_json::from_str(&content)?
        };

        Ok(config)
    }

    /// Load configuration from default locations
    pub fn load() -> Result<Self> {
        for path in &Self::default_config_paths() {
            if path.exists() {
                match Self::from_file(path) {
                    Ok(config) => {
                        tracing::debug!(path = %path.display(), "Loaded configuration");
                        return Ok(config);
                    }
                    Err(e) => {
                        tracing::warn!(path = %path.display(), error = %e, "Failed to load config");
                    }
                }
            }
        }

        // Return default config if no config file found
        Ok(Self::default())
    }

    /// Load configuration from a specific file or default locations
    pub fn load_with_file(file: Option<&Path>) -> Result<Self> {
        if let Some(path) = file {
            Self::from_file(path)
        } else {
            Self::load()
        }
    }

    /// Get default configuration file paths to check
    fn default_config_paths() -> Vec<PathBuf> {
        let mut paths = vec![
            // Current directory
            PathBuf::from(".waitlist.yaml"),
            PathBuf::from(".waitlist.json"),
        ];

        // User config directory
        if let Some(config_dir) = dirs::config_dir() {
            let waitlist_dir = config_dir.join("waitlist");
            paths.push(waitlist_dir.join("config.yaml"));
            paths.push(waitlist_dir.join("config.json"));
        }

        // Home directory
        if let Some(home_dir) = dirs::home_dir() {
            paths.push(home_dir.join(".waitlist.yaml"));
            paths.push(home_dir.join(".waitlist.json"));
        }

        paths
    }
}

/// Whether a path names a YAML file
pub fn is_yaml(path: &Path) -> bool {
    path.extension()
        .and_then(|s| s.to_str())
        .map(|s| s == "yaml" || s == "yml")
        .unwrap_or(false)
}
