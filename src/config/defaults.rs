// src/config/defaults.rs
use crate::charset::CharsetPolicy;
use crate::config::app::{CliSettings, Config};

/// Usability floor for the master secret, enforced by the CLI only
pub const DEFAULT_MIN_MASTER_SECRET_LEN: usize = 8;

pub fn default_policy() -> CharsetPolicy {
    CharsetPolicy::default()
}

pub fn default_cli() -> CliSettings {
    CliSettings {
        show_strength: true,
        min_master_secret_len: DEFAULT_MIN_MASTER_SECRET_LEN,
    }
}

pub fn default_config() -> Config {
    Config {
        policy: default_policy(),
        cli: default_cli(),
    }
}
