use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use wxstat_core::ReportKind;

/// Environment variable naming the config file
pub const CONFIG_ENV: &str = "WXSTAT_CONFIG";
pub const DEFAULT_CONFIG_PATH: &str = "wxstat.toml";
pub const DEFAULT_LOG_FILTER: &str = "warn,wxstat=info";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReportFormat {
    #[default]
    Text,
    Json,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InputConfig {
    pub path: Option<PathBuf>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportConfig {
    pub kind: Option<ReportKind>,
    pub format: Option<ReportFormat>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    pub filter: Option<String>,
    pub json: Option<bool>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct AppConfig {
    pub input: Option<InputConfig>,
    pub report: Option<ReportConfig>,
    pub logging: Option<LoggingConfig>,
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid TOML: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl AppConfig {
    /// Load configuration from WXSTAT_CONFIG path (TOML) if present, with reasonable defaults
    pub fn load() -> Result<Self, ConfigError> {
        let path = std::env::var(CONFIG_ENV).unwrap_or_else(|_| DEFAULT_CONFIG_PATH.to_string());
        Self::load_from(path)
    }

    /// Load from an explicit path; a missing file yields the defaults
    pub fn load_from(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        if !path.exists() {
            return Ok(AppConfig::default());
        }
        let s = fs::read_to_string(path)?;
        Self::from_toml_str(&s)
    }

    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str::<AppConfig>(s)?)
    }

    /// CSV file to read when none is given on the command line
    pub fn input_path(&self) -> Option<PathBuf> {
        self.input.as_ref().and_then(|i| i.path.clone())
    }

    /// Reports to produce (default: all)
    pub fn report_kind(&self) -> ReportKind {
        self.report
            .as_ref()
            .and_then(|r| r.kind)
            .unwrap_or_default()
    }

    /// Output format (default: text)
    pub fn report_format(&self) -> ReportFormat {
        self.report
            .as_ref()
            .and_then(|r| r.format)
            .unwrap_or_default()
    }

    pub fn log_filter(&self) -> String {
        self.logging
            .as_ref()
            .and_then(|l| l.filter.clone())
            .unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string())
    }

    pub fn log_json(&self) -> bool {
        self.logging.as_ref().and_then(|l| l.json).unwrap_or(false)
    }
}
