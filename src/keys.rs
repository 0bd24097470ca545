// src/keys.rs
//! Key material types — zeroized on drop, never printed, never persisted

use std::fmt;

use subtle::ConstantTimeEq;
use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::error::ConfigError;
use crate::kdf::{self, DerivationParams};

/// A symmetric key derived from the master secret
///
/// Recomputed at startup; the bytes are wiped when the value is dropped.
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct DerivedKey(Vec<u8>);

impl DerivedKey {
    pub fn new(bytes: Vec<u8>) -> Self {
        Self(bytes)
    }

    pub fn expose(&self) -> &[u8] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl PartialEq for DerivedKey {
    fn eq(&self, other: &Self) -> bool {
        self.0.ct_eq(&other.0).into()
    }
}

impl Eq for DerivedKey {}

impl fmt::Debug for DerivedKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "DerivedKey(<{} bytes>)", self.0.len())
    }
}

/// Ordered fallback list of derived keys, newest first
///
/// Built once at startup, append-only while configuring, read-only afterwards.
/// Safe to share across threads without locking.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RotationList(Vec<DerivedKey>);

impl RotationList {
    /// `keys[0]` is the current key; the rest are fallbacks, newest first
    pub fn new(keys: Vec<DerivedKey>) -> Result<Self, ConfigError> {
        if keys.is_empty() {
            return Err(ConfigError::EmptyRotation);
        }
        Ok(Self(keys))
    }

    /// Derive the whole list from one master secret, one scheme per entry
    pub fn derive_from(secret: &[u8], schemes: &[DerivationParams]) -> Result<Self, ConfigError> {
        let keys = schemes
            .iter()
            .map(|p| kdf::derive(secret, p))
            .collect::<Result<Vec<_>, _>>()?;
        Self::new(keys)
    }

    /// Append an older key as the last-resort fallback
    pub fn push_fallback(&mut self, key: DerivedKey) {
        self.0.push(key);
    }

    /// The current (newest) key — the one all new tokens are sealed with
    pub fn current(&self) -> &DerivedKey {
        &self.0[0]
    }

    pub fn get(&self, index: usize) -> Option<&DerivedKey> {
        self.0.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, DerivedKey> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Always false — construction rejects empty lists
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}
