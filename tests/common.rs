// tests/common.rs
//! Shared test utilities — logging setup and KDF stand-ins

#![allow(dead_code)] // each test binary uses a different subset

use std::sync::atomic::{AtomicUsize, Ordering};

use deterministic_password_gen::{CoreError, DerivedBlock32, KdfInput, KeyStretcher, Result};

#[cfg(feature = "logging")]
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Initialize test-friendly logging
/// Call once at the start of any test that needs logs
pub fn setup() {
    #[cfg(feature = "logging")]
    tracing_subscriber::registry()
        .with(fmt::layer().with_test_writer()) // works in `cargo test`
        .with(EnvFilter::from_default_env()) // respects RUST_LOG=
        .try_init()
        .ok(); // idempotent — safe to call multiple times

    #[cfg(not(feature = "logging"))]
    { /* no-op */ }
}

/// Block whose byte `i` is `i`
pub fn counting_block() -> DerivedBlock32 {
    DerivedBlock32::new(std::array::from_fn(|i| i as u8))
}

/// Stretcher that returns a fixed block and counts how often it was asked
#[derive(Debug, Default)]
pub struct CountingStretcher {
    calls: AtomicUsize,
}

impl CountingStretcher {
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl KeyStretcher for CountingStretcher {
    fn stretch(&self, _input: &KdfInput, _salt: &[u8]) -> Result<DerivedBlock32> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(counting_block())
    }
}

/// Stretcher standing in for a host whose crypto primitive is missing
#[derive(Debug, Default)]
pub struct UnavailableStretcher;

impl KeyStretcher for UnavailableStretcher {
    fn stretch(&self, _input: &KdfInput, _salt: &[u8]) -> Result<DerivedBlock32> {
        Err(CoreError::DerivationUnavailable)
    }
}

/// Stretcher that records the exact input and salt it was handed
#[derive(Debug, Default)]
pub struct RecordingStretcher {
    seen: std::sync::Mutex<Vec<(String, Vec<u8>)>>,
}

impl RecordingStretcher {
    pub fn seen(&self) -> Vec<(String, Vec<u8>)> {
        self.seen.lock().unwrap().clone()
    }
}

impl KeyStretcher for RecordingStretcher {
    fn stretch(&self, input: &KdfInput, salt: &[u8]) -> Result<DerivedBlock32> {
        self.seen
            .lock()
            .unwrap()
            .push((input.expose_secret().clone(), salt.to_vec()));
        Ok(counting_block())
    }
}
