// src/normalize.rs
//! Site identifier normalization
//!
//! Turns whatever the user typed into the site field (a full URL, a bare host,
//! mixed case, a trailing path) into the stable domain key that feeds both the
//! KDF input and its salt. Normalization never fails.
//!
//! The "registrable domain" is approximated by keeping the last two labels.
//! No public-suffix list is consulted, so `shop.example.co.uk` collapses to
//! `co.uk`. Changing that would change derived passwords.
//!
//! Whitespace is not trimmed here; that belongs to whoever collects the input.

const SCHEMES: [&str; 2] = ["https://", "http://"];

/// Canonicalize a free-form site identifier into a domain key
///
/// `normalize_identifier(normalize_identifier(x)) == normalize_identifier(x)`
/// holds for every input. An identifier with no host (`"https://"`,
/// `"/login"`, `"?x=1"`) normalizes to the empty string, which the KDF
/// replaces with its fallback salt.
pub fn normalize_identifier(raw: &str) -> String {
    let mut current = normalize_once(raw);
    // Every pass yields a substring of its input, so this settles quickly
    loop {
        let next = normalize_once(&current);
        if next == current {
            return current;
        }
        current = next;
    }
}

fn normalize_once(raw: &str) -> String {
    let lowered = raw.to_lowercase();

    let without_scheme = SCHEMES
        .iter()
        .find_map(|scheme| lowered.strip_prefix(scheme))
        .unwrap_or(&lowered);

    let mut host = match without_scheme.find(['/', '?', '#']) {
        Some(end) => &without_scheme[..end],
        None => without_scheme,
    };
    while let Some(rest) = host.strip_prefix("www.") {
        host = rest;
    }

    let labels: Vec<&str> = host.split('.').collect();
    labels[labels.len().saturating_sub(2)..].join(".")
}
