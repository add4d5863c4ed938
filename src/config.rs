use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub output: OutputConfig,
    #[serde(default)]
    pub report: ReportConfig,
    /// Source model alias (`opus`, `sonnet`, ...) to provider model id.
    #[serde(default = "default_models")]
    pub models: BTreeMap<String, String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Output directory for generated mode files (default: "./kilo-modes")
    #[serde(default = "default_output_dir")]
    pub dir: PathBuf,

    /// File name used when all modes go into one file (default: "custom_modes.yaml")
    #[serde(default = "default_combined_file")]
    pub combined_file: String,

    /// Value of each mode's `source` field (default: "project")
    #[serde(default = "default_source")]
    pub source: String,

    /// Write one YAML file per mode in directory runs (default: false)
    #[serde(default)]
    pub single_files: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportConfig {
    /// Write a diagnostic report after directory runs (default: true)
    #[serde(default = "default_true")]
    pub enabled: bool,

    /// Report file name, created inside the input directory
    #[serde(default = "default_report_file")]
    pub file_name: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            dir: default_output_dir(),
            combined_file: default_combined_file(),
            source: default_source(),
            single_files: false,
        }
    }
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            file_name: default_report_file(),
        }
    }
}

fn default_output_dir() -> PathBuf {
    PathBuf::from("./kilo-modes")
}

fn default_combined_file() -> String {
    "custom_modes.yaml".to_string()
}

fn default_source() -> String {
    "project".to_string()
}

fn default_report_file() -> String {
    "conversion-diagnostic-report.md".to_string()
}

fn default_true() -> bool {
    true
}

fn default_models() -> BTreeMap<String, String> {
    [
        ("opus", "anthropic/claude-opus-3"),
        ("sonnet", "anthropic/claude-sonnet-3.5"),
        ("haiku", "anthropic/claude-haiku-3"),
    ]
    .into_iter()
    .map(|(k, v)| (k.to_string(), v.to_string()))
    .collect()
}

impl Config {
    pub fn load() -> Result<Self> {
        Self::load_with_path(None)
    }

    /// Load configuration from a specific path, or use default search paths
    pub fn load_with_path(path: Option<String>) -> Result<Self> {
        // An explicit path must exist and parse
        if let Some(config_path) = path {
            debug!("Loading config from explicit path: {}", config_path);
            return Self::load_from_path(&config_path)
                .with_context(|| format!("failed to load config from {}", config_path));
        }

        if let Ok(config) = Self::load_from_path("kilomode.toml") {
            debug!("Loaded config from ./kilomode.toml");
            return Ok(config);
        }

        if let Some(config_dir) = dirs::config_dir() {
            let config_path = config_dir.join("kilomode").join("config.toml");
            if let Ok(config) = Self::load_from_path(&config_path) {
                debug!("Loaded config from {:?}", config_path);
                return Ok(config);
            }
        }

        debug!("Using default config");
        Ok(Self::default())
    }

    fn load_from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }

    /// Provider model id for a source alias, if one is mapped.
    pub fn map_model(&self, alias: &str) -> Option<&str> {
        self.models
            .get(&alias.to_lowercase())
            .map(String::as_str)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            output: OutputConfig::default(),
            report: ReportConfig::default(),
            models: default_models(),
        }
    }
}
