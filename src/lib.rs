// src/lib.rs
//! deterministic-password-gen — regenerate site passwords instead of storing them
//!
//! Features:
//! - Identifier normalization to a stable domain key
//! - PBKDF2-HMAC-SHA256 (100 000 rounds) key stretching
//! - Charset mapping with per-class inclusion guarantees
//! - Coarse strength classification
//! - secure-gate wrappers that zeroize every secret on drop
//!
//! The core keeps no state between calls, persists nothing and never logs.

pub mod aliases;
pub mod charset;
pub mod config;
pub mod consts;
pub mod derive;
pub mod enums;
pub mod error;
pub mod kdf;
pub mod mapper;
pub mod normalize;
pub mod strength;

// Re-export everything users need at the crate root
pub use aliases::{DerivedBlock32, DerivedPassword, KdfInput, MasterSecret, SecretKey};
pub use charset::{Alphabet, CharsetPolicy};
pub use config::load as load_config;
pub use derive::{
    derive_deterministic_password, derive_password, derive_password_async,
    derive_password_async_with, derive_password_with, DerivationSequencer, SecretMaterial,
    Sequenced,
};
pub use enums::{CharClass, Strength};
pub use error::{CoreError, Result};
pub use kdf::{KeyStretcher, Pbkdf2Sha256};
pub use mapper::map_password;
pub use normalize::normalize_identifier;
pub use strength::classify_strength;
