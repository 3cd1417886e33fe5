// src/kdf.rs
//! Key stretching — the only expensive step in the pipeline
//!
//! The parameter set (HMAC-SHA256, 100 000 rounds, 32-byte output) is the
//! algorithm version. It is deliberately not configurable.

use hmac::Hmac;
use pbkdf2::pbkdf2;
use sha2::Sha256;
use zeroize::Zeroize;

use crate::aliases::{DerivedBlock32, KdfInput, MasterSecret, SecretKey};
use crate::consts::{DERIVED_BLOCK_LEN, FALLBACK_SALT, PBKDF2_ITERATIONS};
use crate::error::{CoreError, Result};

/// Stretches secret material into a fixed-size pseudorandom block
///
/// The orchestrator only ever talks to this trait, which keeps the KDF
/// swappable in tests (e.g. to count invocations).
pub trait KeyStretcher {
    fn stretch(&self, input: &KdfInput, salt: &[u8]) -> Result<DerivedBlock32>;
}

/// PBKDF2-HMAC-SHA256 with the fixed v1 parameters
#[derive(Debug, Clone, Copy, Default)]
pub struct Pbkdf2Sha256;

impl KeyStretcher for Pbkdf2Sha256 {
    fn stretch(&self, input: &KdfInput, salt: &[u8]) -> Result<DerivedBlock32> {
        derive_block(input, salt)
    }
}

/// Concatenate the secret material in contract order, with no separators
///
/// `master + domain + secret_key + username`. Inserting a delimiter or
/// reordering changes every derived password.
pub fn assemble_input(
    master_secret: &MasterSecret,
    domain: &str,
    secret_key: &SecretKey,
    username: &str,
) -> KdfInput {
    let master = master_secret.expose_secret();
    let key = secret_key.expose_secret();

    let mut joined =
        String::with_capacity(master.len() + domain.len() + key.len() + username.len());
    joined.push_str(master);
    joined.push_str(domain);
    joined.push_str(key);
    joined.push_str(username);
    KdfInput::new(joined)
}

/// Salt for a normalized domain
#[inline]
pub fn salt_for(domain: &str) -> &str {
    if domain.is_empty() {
        FALLBACK_SALT
    } else {
        domain
    }
}

/// Run PBKDF2-HMAC-SHA256 over `input` and return the 32-byte block
pub fn derive_block(input: &KdfInput, salt: &[u8]) -> Result<DerivedBlock32> {
    let mut out = [0u8; DERIVED_BLOCK_LEN];
    let outcome = pbkdf2::<Hmac<Sha256>>(
        input.expose_secret().as_bytes(),
        salt,
        PBKDF2_ITERATIONS,
        &mut out,
    );
    if outcome.is_err() {
        out.zeroize();
        return Err(CoreError::DerivationUnavailable);
    }

    let block = DerivedBlock32::new(out);
    out.zeroize();
    Ok(block)
}
