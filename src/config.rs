use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    #[serde(default)]
    pub content: ContentConfig,
    #[serde(default)]
    pub export: ExportConfig,
    #[serde(default)]
    pub analytics: AnalyticsConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ContentConfig {
    /// Public root holding `myCV.json`, `Websites/`, and `Apps/`.
    #[serde(default = "default_root")]
    pub root: PathBuf,
}

impl Default for ContentConfig {
    fn default() -> Self {
        Self {
            root: default_root(),
        }
    }
}

fn default_root() -> PathBuf {
    PathBuf::from("./public")
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct ExportConfig {
    /// Default destination for `folio export`; stdout when unset.
    #[serde(default)]
    pub output: Option<PathBuf>,
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct AnalyticsConfig {
    #[serde(default)]
    pub enabled: bool,
    #[serde(default)]
    pub domain: Option<String>,
}

impl Config {
    /// Defaults used when no config file exists.
    pub fn minimal() -> Self {
        Self {
            content: ContentConfig::default(),
            export: ExportConfig::default(),
            analytics: AnalyticsConfig::default(),
        }
    }
}

pub fn parse_config(content: &str) -> Result<Config> {
    let config: Config = toml::from_str(content).with_context(|| "Failed to parse config file")?;

    if config.content.root.as_os_str().is_empty() {
        anyhow::bail!("content.root must not be empty");
    }

    if config.analytics.enabled {
        match config.analytics.domain.as_deref() {
            Some(domain) if !domain.trim().is_empty() => {}
            _ => anyhow::bail!("analytics.domain must be set when analytics.enabled = true"),
        }
    }

    Ok(config)
}

pub fn load_config(path: &Path) -> Result<Config> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {}", path.display()))?;
    parse_config(&content)
}
