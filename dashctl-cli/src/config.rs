use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use dashctl_dashlist::DashListOption;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Environment variable overriding the config file location
pub const CONFIG_ENV: &str = "DASHCTL_CONFIG";

/// User configuration, read from ~/.dashctl/config.toml
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DashctlConfig {
    pub output: OutputConfig,
    pub defaults: DefaultsConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// JSON indent width; 0 prints compact JSON
    pub indent: usize,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self { indent: 2 }
    }
}

/// Options applied to every panel ahead of the ones in its definition
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DefaultsConfig {
    pub options: Vec<DashListOption>,
}

impl DashctlConfig {
    /// Config file path: $DASHCTL_CONFIG or ~/.dashctl/config.toml
    pub fn config_path() -> PathBuf {
        if let Ok(path) = env::var(CONFIG_ENV) {
            return PathBuf::from(path);
        }
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".dashctl/config.toml")
    }

    /// Load from the default location. A missing file yields the defaults.
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path())
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            debug!("no config at {:?}, using defaults", path);
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)
            .context(format!("Failed to read config file: {:?}", path))?;

        let config: Self =
            toml::from_str(&content).context("Failed to parse config file (invalid TOML)")?;

        debug!(
            default_options = config.defaults.options.len(),
            indent = config.output.indent,
            "loaded config from {:?}",
            path
        );
        Ok(config)
    }
}
