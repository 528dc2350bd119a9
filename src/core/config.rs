//! Configuration management with layered hierarchy

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors reading configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Could not read config file {}: {source}", path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Invalid config file {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        source: serde_yml::Error,
    },

    #[error("Invalid value for {var}: '{value}'")]
    InvalidEnv { var: &'static str, value: String },
}

/// Console configuration with layered hierarchy
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Default output format (tsv, json, yaml, csv, md, id)
    pub default_format: Option<String>,

    /// Start with the sample records
    pub seed: Option<bool>,

    /// Default row limit for list output
    pub page_size: Option<usize>,
}

impl Config {
    /// Load configuration from all sources, merging in priority order
    ///
    /// A broken global file is skipped; a broken file named with
    /// `--config` is an error.
    pub fn load(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        Self::load_layers(
            Self::global_config_path().as_deref(),
            explicit,
            |var| std::env::var(var).ok(),
        )
    }

    fn load_layers(
        global: Option<&Path>,
        explicit: Option<&Path>,
        env: impl Fn(&str) -> Option<String>,
    ) -> Result<Self, ConfigError> {
        // 1. Built-in defaults (already in Default impl)
        let mut config = Config::default();

        // 2. Global user config (~/.config/upkeep/config.yaml)
        if let Some(global_path) = global {
            if global_path.exists() {
                match Self::read(global_path) {
                    Ok(global) => config.merge(global),
                    Err(e) => tracing::warn!("Ignoring global config: {}", e),
                }
            }
        }

        // 3. Config file given on the command line
        if let Some(path) = explicit {
            config.merge(Self::read(path)?);
        }

        // 4. Environment variables
        if let Some(format) = env("UPKEEP_FORMAT") {
            config.default_format = Some(format);
        }
        if let Some(seed) = env("UPKEEP_SEED") {
            config.seed = Some(parse_bool(&seed).ok_or(ConfigError::InvalidEnv {
                var: "UPKEEP_SEED",
                value: seed.clone(),
            })?);
        }

        Ok(config)
    }

    fn read(path: &Path) -> Result<Config, ConfigError> {
        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        if contents.trim().is_empty() {
            return Ok(Config::default());
        }
        serde_yml::from_str(&contents).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Get the path to the global config file
    pub fn global_config_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("", "", "upkeep")
            .map(|dirs| dirs.config_dir().join("config.yaml"))
    }

    /// Merge another config into this one (other takes precedence)
    fn merge(&mut self, other: Config) {
        if other.default_format.is_some() {
            self.default_format = other.default_format;
        }
        if other.seed.is_some() {
            self.seed = other.seed;
        }
        if other.page_size.is_some() {
            self.page_size = other.page_size;
        }
    }

    /// Whether collections start with sample records
    pub fn seed(&self) -> bool {
        self.seed.unwrap_or(true)
    }
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
