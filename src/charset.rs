// src/charset.rs
//! Charset policy — which classes are enabled and what alphabet they build
//!
//! The policy is plain data the collaborator fills in (or the config file
//! provides). `build` turns it into the alphabets the mapper draws from.

use serde::{Deserialize, Serialize};

use crate::consts::{DEFAULT_PASSWORD_LENGTH, MAX_PASSWORD_LENGTH, MIN_PASSWORD_LENGTH};
use crate::enums::CharClass;
use crate::error::{CoreError, Result};

/// Target length plus enabled character classes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CharsetPolicy {
    pub length: usize,
    pub include_uppercase: bool,
    pub include_lowercase: bool,
    pub include_numbers: bool,
    pub include_special: bool,
}

impl Default for CharsetPolicy {
    fn default() -> Self {
        Self {
            length: DEFAULT_PASSWORD_LENGTH,
            include_uppercase: true,
            include_lowercase: true,
            include_numbers: true,
            include_special: true,
        }
    }
}

impl CharsetPolicy {
    /// Policy of `length` with every class enabled
    pub fn new(length: usize) -> Self {
        Self {
            length,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_class(mut self, class: CharClass, enabled: bool) -> Self {
        match class {
            CharClass::Uppercase => self.include_uppercase = enabled,
            CharClass::Lowercase => self.include_lowercase = enabled,
            CharClass::Digit => self.include_numbers = enabled,
            CharClass::Special => self.include_special = enabled,
        }
        self
    }

    pub fn is_enabled(&self, class: CharClass) -> bool {
        match class {
            CharClass::Uppercase => self.include_uppercase,
            CharClass::Lowercase => self.include_lowercase,
            CharClass::Digit => self.include_numbers,
            CharClass::Special => self.include_special,
        }
    }

    /// Enabled classes in canonical order; index == guarantee slot rank
    pub fn enabled_classes(&self) -> Vec<CharClass> {
        CharClass::ORDER
            .into_iter()
            .filter(|class| self.is_enabled(*class))
            .collect()
    }

    /// Shape checks run before any cryptographic work
    ///
    /// An empty class set is reported ahead of a bad length.
    pub fn validate(&self) -> Result<()> {
        if self.enabled_classes().is_empty() {
            return Err(CoreError::EmptyCharsetPolicy);
        }
        if !(MIN_PASSWORD_LENGTH..=MAX_PASSWORD_LENGTH).contains(&self.length) {
            return Err(CoreError::InvalidLength);
        }
        Ok(())
    }
}

/// Alphabets built from a policy
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alphabet {
    full: Vec<u8>,
    classes: Vec<CharClass>,
}

impl Alphabet {
    /// Union of the enabled base alphabets, concatenated in canonical order
    pub fn full(&self) -> &[u8] {
        &self.full
    }

    /// Enabled classes in rank order
    pub fn classes(&self) -> &[CharClass] {
        &self.classes
    }

    /// Guarantee alphabet for `class`, if it is enabled
    pub fn class(&self, class: CharClass) -> Option<&'static [u8]> {
        self.classes
            .contains(&class)
            .then(|| class.guarantee_alphabet())
    }

    /// Whether every character of `password` is drawn from `full`
    pub fn contains_all(&self, password: &str) -> bool {
        password
            .chars()
            .all(|c| c.is_ascii() && self.full.contains(&(c as u8)))
    }
}

/// Build the selectable alphabets for `policy`
///
/// Only the class set is checked here. Length bounds belong to the
/// orchestrator, so the mapper can still be driven at any length.
pub fn build(policy: &CharsetPolicy) -> Result<Alphabet> {
    let classes = policy.enabled_classes();
    if classes.is_empty() {
        return Err(CoreError::EmptyCharsetPolicy);
    }

    let full = classes
        .iter()
        .flat_map(|class| class.base_alphabet().iter().copied())
        .collect();

    Ok(Alphabet { full, classes })
}
