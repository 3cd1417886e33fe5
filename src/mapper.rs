// src/mapper.rs
//! Password mapping — derived block + policy → password
//!
//! Pure and deterministic. The block is used as a cyclic keystream: position
//! `i` reads byte `i mod 32`, so passwords longer than the block reuse bytes
//! instead of re-deriving.

use zeroize::Zeroize;

use crate::aliases::{DerivedBlock32, DerivedPassword};
use crate::charset::{self, CharsetPolicy};
use crate::error::Result;

/// Map a derived block onto `policy`
///
/// 1. Every position picks `full[block[i mod 32] mod |full|]`.
/// 2. Enabled classes, in canonical order, then overwrite their rank slot
///    (0, 1, 2, …) with `class[block[rank] mod |class|]`. Special uses its
///    narrow guarantee alphabet here.
///
/// When `policy.length` is shorter than the number of enabled classes, the
/// lowest-ranked classes get no slot and may be absent from the result.
pub fn map_password(block: &DerivedBlock32, policy: &CharsetPolicy) -> Result<DerivedPassword> {
    let alphabet = charset::build(policy)?;
    let bytes = block.expose_secret();
    let full = alphabet.full();

    let mut out: Vec<u8> = (0..policy.length)
        .map(|i| full[usize::from(bytes[i % bytes.len()]) % full.len()])
        .collect();

    for (rank, class) in alphabet.classes().iter().enumerate() {
        if rank >= out.len() {
            break;
        }
        let class_alphabet = class.guarantee_alphabet();
        out[rank] = class_alphabet[usize::from(bytes[rank]) % class_alphabet.len()];
    }

    let password: String = out.iter().copied().map(char::from).collect();
    out.zeroize();
    Ok(DerivedPassword::new(password))
}
