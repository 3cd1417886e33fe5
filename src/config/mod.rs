// src/config/mod.rs
//! Configuration system for the `dpg` front end
//!
//! TOML file (path from `DPG_CONFIG`, else `dpg.toml`) with built-in
//! defaults. Only collaborator-side settings live here; the KDF parameter set
//! is fixed and cannot be configured.

pub use app::{
    load, load_from, CliSettings, Config, ConfigError, CONFIG_ENV_VAR, DEFAULT_CONFIG_FILE,
};

mod app;
mod defaults;
