// src/error.rs
//! Public error type for the entire crate
//!
//! Variants never carry input data. A derivation error must not be able to
//! leak a secret into a log line or an error dialog.

use thiserror::Error;

use crate::consts::{MAX_PASSWORD_LENGTH, MIN_PASSWORD_LENGTH};

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum CoreError {
    #[error("at least one character class must be enabled")]
    EmptyCharsetPolicy,

    #[error(
        "password length must be between {} and {}",
        MIN_PASSWORD_LENGTH,
        MAX_PASSWORD_LENGTH
    )]
    InvalidLength,

    #[error("key derivation is unavailable")]
    DerivationUnavailable,
}

pub type Result<T> = std::result::Result<T, CoreError>;
