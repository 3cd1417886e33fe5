// src/consts.rs
//! Shared constants — algorithm parameters and canonical alphabets
//!
//! Every value in here is part of the output contract. Changing any of them
//! changes every password ever derived and must ship as a new version.

/// Name of the fixed KDF parameter set below
pub const KDF_VERSION: &str = "pbkdf2-sha256-100k-v1";

/// PBKDF2-HMAC-SHA256 rounds
pub const PBKDF2_ITERATIONS: u32 = 100_000;

/// Size of the derived keystream block in bytes
pub const DERIVED_BLOCK_LEN: usize = 32;

/// Salt used when the identifier normalizes to the empty string
pub const FALLBACK_SALT: &str = "DeterministicPasswordGenSalt";

/// Smallest password length the orchestrator accepts
pub const MIN_PASSWORD_LENGTH: usize = 8;

/// Largest password length the orchestrator accepts
pub const MAX_PASSWORD_LENGTH: usize = 128;

/// Length used when nothing else is configured
pub const DEFAULT_PASSWORD_LENGTH: usize = 16;

pub const UPPERCASE_ALPHABET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ";
pub const LOWERCASE_ALPHABET: &[u8] = b"abcdefghijklmnopqrstuvwxyz";
pub const DIGIT_ALPHABET: &[u8] = b"0123456789";

/// Special characters used for the base mapping pass
pub const SPECIAL_ALPHABET: &[u8] = b"!@#$%^&*()_+-=[]{}|;:,.<>?";

/// Special characters used when forcing a guaranteed special slot.
// Narrower than SPECIAL_ALPHABET. Existing passwords depend on the difference.
pub const SPECIAL_GUARANTEE_ALPHABET: &[u8] = b"!@#$%^&*";
