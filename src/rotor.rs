// src/rotor.rs
//! Rotating verifier/decryptor — try each key newest-first until one opens
//!
//! Stateless aside from the immutable rotation lists: every call is
//! independent, synchronous, and reentrant.

use crate::config::Config;
use crate::enums::TokenMode;
use crate::error::{ConfigError, VerifyError};
use crate::keys::RotationList;
use crate::token;

/// A successfully opened token
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Opened {
    pub payload: Vec<u8>,
    /// Index into the rotation list of the key that succeeded (0 = current)
    pub key_index: usize,
}

impl Opened {
    /// True when a fallback key opened the token — the caller should re-seal
    /// the payload under the current key so the token upgrades on next write.
    /// This crate never rewrites tokens itself.
    pub fn needs_reissue(&self) -> bool {
        self.key_index > 0
    }
}

/// Open `token` with the first key in `keys` that succeeds
///
/// Keys are tried in strict order, current first. Success with one key is
/// conclusive; remaining keys are never tried. Exhausting the list means the
/// token is invalid, tampered with, or from a key no longer configured.
pub fn open(token: &[u8], keys: &RotationList, mode: TokenMode) -> Result<Opened, VerifyError> {
    for (key_index, key) in keys.iter().enumerate() {
        let attempt = match mode {
            TokenMode::Signed => token::open_signed(token, key),
            TokenMode::Encrypted => token::open_encrypted(token, key),
        };
        if let Some(payload) = attempt {
            return Ok(Opened { payload, key_index });
        }
    }
    Err(VerifyError::AllKeysExhausted)
}

/// Seal `payload` with the current key (`keys[0]`) — fallbacks never sign
pub fn seal(payload: &[u8], keys: &RotationList, mode: TokenMode) -> Result<Vec<u8>, ConfigError> {
    match mode {
        TokenMode::Signed => Ok(token::seal_signed(payload, keys.current())),
        TokenMode::Encrypted => token::seal_encrypted(payload, keys.current()),
    }
}

/// Both rotation lists of an application, built once at startup
///
/// The explicit, immutable replacement for a framework-global rotations
/// registry: construct it from config, then share it read-only across
/// request handlers.
#[derive(Debug, Clone)]
pub struct Rotor {
    signed: RotationList,
    encrypted: RotationList,
}

impl Rotor {
    pub fn new(signed: RotationList, encrypted: RotationList) -> Self {
        Self { signed, encrypted }
    }

    /// Derive both lists from loaded configuration — fatal on bad params
    pub fn from_config(config: &Config) -> Result<Self, ConfigError> {
        Ok(Self {
            signed: config.signed_keys()?,
            encrypted: config.encrypted_keys()?,
        })
    }

    pub fn keys(&self, mode: TokenMode) -> &RotationList {
        match mode {
            TokenMode::Signed => &self.signed,
            TokenMode::Encrypted => &self.encrypted,
        }
    }

    pub fn open(&self, token: &[u8], mode: TokenMode) -> Result<Opened, VerifyError> {
        open(token, self.keys(mode), mode)
    }

    pub fn seal(&self, payload: &[u8], mode: TokenMode) -> Result<Vec<u8>, ConfigError> {
        seal(payload, self.keys(mode), mode)
    }
}
