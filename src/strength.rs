// src/strength.rs
//! Coarse strength heuristic for display
//!
//! Not an entropy estimate. It looks only at the finished password: its
//! length and how many of four character predicates it satisfies.

use crate::enums::Strength;

const WEAK_BELOW: usize = 8;
const STRONG_FROM: usize = 12;

/// Classify a finished password
pub fn classify_strength(password: &str) -> Strength {
    let length = password.chars().count();
    if length < WEAK_BELOW {
        return Strength::Weak;
    }

    let score = diversity_score(password);
    if length >= STRONG_FROM && score >= 3 {
        Strength::Strong
    } else if score >= 2 {
        Strength::Moderate
    } else {
        Strength::Weak
    }
}

/// Number of satisfied predicates among lower, upper, digit, non-alphanumeric
pub fn diversity_score(password: &str) -> usize {
    let predicates: [fn(&char) -> bool; 4] = [
        char::is_ascii_lowercase,
        char::is_ascii_uppercase,
        char::is_ascii_digit,
        |c| !c.is_ascii_alphanumeric(),
    ];

    predicates
        .iter()
        .filter(|predicate| password.chars().any(|c| predicate(&c)))
        .count()
}
