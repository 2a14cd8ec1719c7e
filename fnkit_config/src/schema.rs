use std::path::{Path, PathBuf};

use anyhow::Context;
use fnkit_core::Counter;
use fnkit_query::{Location, QueryDecoder};
use serde::{Deserialize, Serialize};
use tracing::info;

const CONFIG_FILE: &str = "config.json";

const CONFIG_TEMPLATE: &str = r#"{
  "host": {
    "location": "about:blank"
  },
  "counter": {
    "min": 0,
    "max": 9
  }
}
"#;

#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq, Eq)]
pub struct Config {
    #[serde(default)]
    pub host: HostConfig,
    #[serde(default)]
    pub counter: CounterConfig,
}

/// The hosting environment the helpers run in.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
pub struct HostConfig {
    #[serde(default = "HostConfig::default_location")]
    pub location: String,
}

impl Default for HostConfig {
    fn default() -> Self {
        Self {
            location: Self::default_location(),
        }
    }
}

impl HostConfig {
    fn default_location() -> String {
        "about:blank".to_string()
    }
}

impl Location for HostConfig {
    fn href(&self) -> String {
        self.location.clone()
    }
}

#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq, Eq)]
pub struct CounterConfig {
    #[serde(default)]
    pub min: i64,
    #[serde(default = "CounterConfig::default_max")]
    pub max: i64,
}

impl Default for CounterConfig {
    fn default() -> Self {
        Self {
            min: 0,
            max: Self::default_max(),
        }
    }
}

impl CounterConfig {
    const fn default_max() -> i64 {
        9
    }
}

impl From<CounterConfig> for Counter {
    fn from(config: CounterConfig) -> Self {
        Self::new(config.max).with_min(config.min)
    }
}

impl Config {
    pub fn config_dir() -> anyhow::Result<PathBuf> {
        Ok(dirs::home_dir()
            .ok_or_else(|| anyhow::anyhow!("Cannot find home directory"))?
            .join("fnkit"))
    }

    pub fn load() -> anyhow::Result<Self> {
        Self::load_from(&Self::config_dir()?.join(CONFIG_FILE))
    }

    pub fn load_from(config_path: &Path) -> anyhow::Result<Self> {
        if !config_path.exists() {
            anyhow::bail!(
                "Config file not found at: {}. Call Config::create_config() to create one.",
                config_path.display()
            );
        }

        let content = std::fs::read_to_string(config_path)
            .with_context(|| format!("reading {}", config_path.display()))?;
        let config: Self = serde_json::from_str(&content)
            .with_context(|| format!("parsing {}", config_path.display()))?;

        info!("Loaded config from {}", config_path.display());
        Ok(config)
    }

    pub fn ensure_config_dir() -> anyhow::Result<PathBuf> {
        let config_dir = Self::config_dir()?;
        std::fs::create_dir_all(&config_dir)?;
        Ok(config_dir)
    }

    pub fn create_config() -> anyhow::Result<PathBuf> {
        Self::create_config_in(&Self::ensure_config_dir()?)
    }

    /// Write the template config into `config_dir`, refusing to overwrite.
    pub fn create_config_in(config_dir: &Path) -> anyhow::Result<PathBuf> {
        let config_path = config_dir.join(CONFIG_FILE);

        if config_path.exists() {
            anyhow::bail!(
                "Config file already exists at: {}. Please edit it directly.",
                config_path.display()
            );
        }

        std::fs::write(&config_path, CONFIG_TEMPLATE)?;
        info!("Created config file at: {}", config_path.display());
        Ok(config_path)
    }

    /// Decoder over the configured host location.
    #[must_use]
    pub fn query_decoder(&self) -> QueryDecoder {
        QueryDecoder::new(self.host.clone())
    }

    #[must_use]
    pub fn counter(&self) -> Counter {
        self.counter.into()
    }
}
