// src/error.rs
//! Public error types for the entire crate

use thiserror::Error;

/// Fatal configuration problems — detected at startup, never at call time
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("KDF iterations must be at least 1 (got {0})")]
    BadIterations(u32),

    #[error("derived key length must be greater than zero")]
    ZeroKeyLength,

    #[error("rotation list must contain at least one key")]
    EmptyRotation,

    #[error("encrypted mode requires a {expected}-byte key (got {got})")]
    BadSealKeyLength { expected: usize, got: usize },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid config: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Token could not be opened — recoverable, treat as an invalid session.
///
/// Per-key failures (bad MAC, bad auth tag, malformed structure) are never
/// distinguished; only the exhausted outcome is visible to callers.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum VerifyError {
    #[error("token could not be verified or decrypted by any configured key")]
    AllKeysExhausted,
}
