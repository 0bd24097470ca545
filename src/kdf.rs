// src/kdf.rs
//! PBKDF2 key derivation — pure, deterministic, no I/O
//!
//! Every parameter is explicit. The legacy scheme and the current scheme
//! derive from the same master secret with independent parameter sets, so
//! nothing here assumes a shared default: a one-byte salt mismatch or a
//! different iteration count yields a completely different, unrecoverable key.

use pbkdf2::pbkdf2_hmac;
use sha1::Sha1;
use sha2::{Sha256, Sha384, Sha512};

use crate::enums::HashPrimitive;
use crate::error::ConfigError;
use crate::keys::DerivedKey;

/// Fully determines a derived key given a master secret
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DerivationParams {
    /// May be empty for legacy compatibility, but must match the original
    /// configuration exactly
    pub salt: Vec<u8>,
    pub iterations: u32,
    pub hash: HashPrimitive,
    /// Output length in bytes — explicit per derivation, never defaulted
    pub key_len: usize,
}

impl DerivationParams {
    pub fn new(
        salt: impl Into<Vec<u8>>,
        iterations: u32,
        hash: HashPrimitive,
        key_len: usize,
    ) -> Self {
        Self {
            salt: salt.into(),
            iterations,
            hash,
            key_len,
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.iterations < 1 {
            return Err(ConfigError::BadIterations(self.iterations));
        }
        if self.key_len == 0 {
            return Err(ConfigError::ZeroKeyLength);
        }
        Ok(())
    }
}

/// Derive a key from `secret` under `params`
///
/// Deterministic: identical inputs always produce identical output, which is
/// what keeps existing cookies decryptable across process restarts.
pub fn derive(secret: &[u8], params: &DerivationParams) -> Result<DerivedKey, ConfigError> {
    params.validate()?;

    let mut out = vec![0u8; params.key_len];
    match params.hash {
        HashPrimitive::Sha1 => pbkdf2_hmac::<Sha1>(secret, &params.salt, params.iterations, &mut out),
        HashPrimitive::Sha256 => {
            pbkdf2_hmac::<Sha256>(secret, &params.salt, params.iterations, &mut out)
        }
        HashPrimitive::Sha384 => {
            pbkdf2_hmac::<Sha384>(secret, &params.salt, params.iterations, &mut out)
        }
        HashPrimitive::Sha512 => {
            pbkdf2_hmac::<Sha512>(secret, &params.salt, params.iterations, &mut out)
        }
    }
    Ok(DerivedKey::new(out))
}
