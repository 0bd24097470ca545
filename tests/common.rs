// tests/common.rs
//! Shared test utilities

use cookie_key_rotor::enums::HashPrimitive;
use cookie_key_rotor::kdf::DerivationParams;

#[cfg(feature = "logging")]
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Initialize test-friendly logging
/// Call once at the start of any test that needs logs
#[allow(dead_code)]
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

#[allow(dead_code)]
pub fn sha1_params(salt: &str, key_len: usize) -> DerivationParams {
    DerivationParams::new(salt.as_bytes().to_vec(), 1000, HashPrimitive::Sha1, key_len)
}

#[allow(dead_code)]
pub fn sha256_params(salt: &str, key_len: usize) -> DerivationParams {
    DerivationParams::new(salt.as_bytes().to_vec(), 1000, HashPrimitive::Sha256, key_len)
}
