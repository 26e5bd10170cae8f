//! Configuration System
//!
//! Handles loading configuration from files and environment variables.
//! Supports TOML config files and environment variable overrides.

use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Main configuration structure
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub dataset: DatasetConfig,

    #[serde(default)]
    pub analysis: AnalysisConfig,

    #[serde(default)]
    pub report: ReportConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Dataset source configuration
#[derive(Debug, Clone, Default, Deserialize)]
pub struct DatasetConfig {
    /// Path to a CSV or JSON dataset; the embedded sample is used when
    /// absent
    pub path: Option<String>,
}

/// Analysis tuning
#[derive(Debug, Clone, Deserialize)]
pub struct AnalysisConfig {
    #[serde(default = "default_window_days")]
    pub window_days: usize,

    #[serde(default = "default_top_n")]
    pub top_n: usize,
}

fn default_window_days() -> usize {
    7
}

fn default_top_n() -> usize {
    10
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            window_days: default_window_days(),
            top_n: default_top_n(),
        }
    }
}

/// Report export configuration
#[derive(Debug, Clone, Deserialize)]
pub struct ReportConfig {
    #[serde(default = "default_output_dir")]
    pub output_dir: String,
}

fn default_output_dir() -> String {
    dirs::document_dir()
        .map(|p| p.join("casefile").to_string_lossy().to_string())
        .unwrap_or_else(|| ".".to_string())
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            output_dir: default_output_dir(),
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,

    #[serde(default = "default_log_format")]
    pub format: String,

    pub file: Option<String>,
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "pretty".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
            file: None,
        }
    }
}

impl Config {
    /// Load configuration from a file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            error: e.to_string(),
        })?;

        let config: Config = toml::from_str(&content).map_err(|e| ConfigError::Parse {
            path: path.to_path_buf(),
            error: e.to_string(),
        })?;

        Ok(config)
    }

    /// Load configuration from environment variables only
    pub fn from_env() -> Self {
        let mut config = Config::default();
        config.apply_env_overrides();
        config
    }

    /// Load configuration with environment variable overrides
    pub fn load_with_env(path: &Path) -> Result<Self, ConfigError> {
        let mut config = Self::load(path)?;
        config.apply_env_overrides();
        Ok(config)
    }

    /// Load from default locations or environment
    pub fn load_default() -> Self {
        let config_paths = [
            dirs::config_dir().map(|p| p.join("casefile").join("config.toml")),
            Some(PathBuf::from("/etc/casefile/config.toml")),
            Some(PathBuf::from("./config.toml")),
        ];

        for path_opt in config_paths.iter().flatten() {
            if path_opt.exists() {
                match Self::load_with_env(path_opt) {
                    Ok(config) => {
                        tracing::info!("Loaded config from {:?}", path_opt);
                        return config;
                    }
                    Err(e) => {
                        tracing::warn!("Failed to load config from {:?}: {}", path_opt, e);
                    }
                }
            }
        }

        tracing::info!("Using default config with environment overrides");
        Self::from_env()
    }

    /// Apply environment variable overrides to an existing config
    fn apply_env_overrides(&mut self) {
        if let Ok(path) = std::env::var("CASEFILE_DATASET") {
            self.dataset.path = Some(path);
        }

        if let Ok(window) = std::env::var("CASEFILE_WINDOW_DAYS") {
            if let Ok(w) = window.parse() {
                self.analysis.window_days = w;
            }
        }
        if let Ok(top_n) = std::env::var("CASEFILE_TOP_N") {
            if let Ok(n) = top_n.parse() {
                self.analysis.top_n = n;
            }
        }

        if let Ok(dir) = std::env::var("CASEFILE_REPORT_DIR") {
            self.report.output_dir = dir;
        }

        if let Ok(level) = std::env::var("CASEFILE_LOG_LEVEL") {
            self.logging.level = level;
        }
        if let Ok(format) = std::env::var("CASEFILE_LOG_FORMAT") {
            self.logging.format = format;
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            dataset: DatasetConfig::default(),
            analysis: AnalysisConfig::default(),
            report: ReportConfig::default(),
            logging: LoggingConfig::default(),
        }
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path:?}: {error}")]
    Io { path: PathBuf, error: String },

    #[error("Failed to parse config file {path:?}: {error}")]
    Parse { path: PathBuf, error: String },
}

/// Generate a default config file content
pub fn generate_default_config() -> String {
    r#"# Casefile Configuration
#
# Environment variables override these settings:
# - CASEFILE_DATASET
# - CASEFILE_WINDOW_DAYS
# - CASEFILE_TOP_N
# - CASEFILE_REPORT_DIR
# - CASEFILE_LOG_LEVEL
# - CASEFILE_LOG_FORMAT

[dataset]
# Path to a CSV or JSON dataset; the embedded sample is used when unset
# path = "incidents.csv"

[analysis]
# Sliding window size for cluster detection, in active dates
window_days = 7

# How many entries to show in ranked listings
top_n = 10

[report]
# Directory for exported report files
output_dir = "~/Documents/casefile"

[logging]
# Log level: trace, debug, info, warn, error
level = "info"

# Log format: pretty (for development) or json (for production)
format = "pretty"

# Optional log file path
# file = "/var/log/casefile/casefile.log"
"#
    .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.dataset.path, None);
        assert_eq!(config.analysis.window_days, 7);
        assert_eq!(config.analysis.top_n, 10);
        assert_eq!(config.logging.level, "info");
    }

    #[test]
    fn test_load_partial_file_fills_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            "[analysis]\nwindow_days = 14\n\n[dataset]\npath = \"data.csv\""
        )
        .unwrap();

        let config = Config::load(file.path()).unwrap();
        assert_eq!(config.analysis.window_days, 14);
        assert_eq!(config.analysis.top_n, 10);
        assert_eq!(config.dataset.path.as_deref(), Some("data.csv"));
    }

    #[test]
    fn test_malformed_file_is_a_parse_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[analysis\nwindow_days = ").unwrap();

        assert!(matches!(
            Config::load(file.path()).unwrap_err(),
            ConfigError::Parse { .. }
        ));
    }

    #[test]
    fn test_generated_default_parses() {
        let config: Config = toml::from_str(&generate_default_config()).unwrap();
        assert_eq!(config.analysis.window_days, 7);
    }
}
