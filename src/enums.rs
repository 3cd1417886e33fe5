// src/enums.rs
//! Public enum types used throughout the crate
//!
//! Central location for the enums that represent user-visible choices:
//! character classes and strength labels.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::consts::{
    DIGIT_ALPHABET, LOWERCASE_ALPHABET, SPECIAL_ALPHABET, SPECIAL_GUARANTEE_ALPHABET,
    UPPERCASE_ALPHABET,
};

/// A character class the user may opt into
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CharClass {
    Uppercase,
    Lowercase,
    Digit,
    Special,
}

impl CharClass {
    /// Canonical order. Alphabet concatenation and guarantee slots follow it.
    pub const ORDER: [CharClass; 4] = [
        CharClass::Uppercase,
        CharClass::Lowercase,
        CharClass::Digit,
        CharClass::Special,
    ];

    /// Characters contributed to the base (full) alphabet
    pub const fn base_alphabet(self) -> &'static [u8] {
        match self {
            CharClass::Uppercase => UPPERCASE_ALPHABET,
            CharClass::Lowercase => LOWERCASE_ALPHABET,
            CharClass::Digit => DIGIT_ALPHABET,
            CharClass::Special => SPECIAL_ALPHABET,
        }
    }

    /// Characters used when this class overwrites its guarantee slot
    pub const fn guarantee_alphabet(self) -> &'static [u8] {
        match self {
            CharClass::Special => SPECIAL_GUARANTEE_ALPHABET,
            other => other.base_alphabet(),
        }
    }

    /// Whether `c` belongs to this class's base alphabet
    pub fn contains(self, c: char) -> bool {
        c.is_ascii() && self.base_alphabet().contains(&(c as u8))
    }
}

/// Coarse strength label for a finished password
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Strength {
    Weak,
    Moderate,
    Strong,
}

impl fmt::Display for Strength {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Strength::Weak => "Weak",
            Strength::Moderate => "Moderate",
            Strength::Strong => "Strong",
        };
        f.write_str(label)
    }
}
