// src/config/app.rs
use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

use super::defaults::{default_cli, default_config, default_policy};
use crate::charset::CharsetPolicy;
use crate::error::CoreError;

pub const CONFIG_ENV_VAR: &str = "DPG_CONFIG";
pub const DEFAULT_CONFIG_FILE: &str = "dpg.toml";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid TOML in config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("config policy rejected: {0}")]
    InvalidPolicy(#[from] CoreError),
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Config {
    #[serde(default = "default_policy")]
    pub policy: CharsetPolicy,
    #[serde(default = "default_cli")]
    pub cli: CliSettings,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct CliSettings {
    pub show_strength: bool,
    pub min_master_secret_len: usize,
}

impl Default for CliSettings {
    fn default() -> Self {
        default_cli()
    }
}

impl Default for Config {
    fn default() -> Self {
        default_config()
    }
}

impl Config {
    /// Parse and validate a TOML document
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let conf: Config = toml::from_str(content)?;
        conf.policy.validate()?;
        Ok(conf)
    }
}

/// Load the config named by `DPG_CONFIG`, falling back to `dpg.toml`
///
/// A missing file means built-in defaults. A file that exists but cannot be
/// read or parsed is an error.
pub fn load() -> Result<Config, ConfigError> {
    let config_path =
        std::env::var(CONFIG_ENV_VAR).unwrap_or_else(|_| DEFAULT_CONFIG_FILE.to_string());
    let config_path = Path::new(&config_path);

    if !config_path.exists() {
        return Ok(Config::default());
    }
    load_from(config_path)
}

pub fn load_from(path: impl AsRef<Path>) -> Result<Config, ConfigError> {
    let path = path.as_ref();
    let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    Config::from_toml_str(&content)
}
