// src/aliases.rs
//! Re-exports secure-gate's ergonomic secret types
//!
//! These are the canonical secret wrappers used throughout the derivation
//! pipeline. Every one of them zeroizes its contents on drop.

pub use secure_gate::{dynamic_alias, fixed_alias};

// Fixed-size secrets
fixed_alias!(DerivedBlock32, 32); // PBKDF2 output, consumed once by the mapper

// Dynamic secrets
dynamic_alias!(MasterSecret, String); // the one thing the user memorizes
dynamic_alias!(SecretKey, String); // per-user second secret
dynamic_alias!(KdfInput, String); // master + domain + key + username, no separators
dynamic_alias!(DerivedPassword, String); // final output handed to the collaborator
