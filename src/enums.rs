// src/enums.rs
//! Public enum types used throughout the crate
//!
//! Central location for all #[derive(...)] enums that represent
//! user-visible choices: hash primitives, token modes, etc.

use serde::{Deserialize, Serialize};

/// Hash primitive underlying PBKDF2-HMAC derivation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "UPPERCASE")]
#[non_exhaustive]
pub enum HashPrimitive {
    Sha1,
    #[default]
    Sha256,
    Sha384,
    Sha512,
}

/// Cryptographic mode a token was produced under
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
#[non_exhaustive]
pub enum TokenMode {
    /// Integrity only — HMAC-SHA256 over the encoded payload
    #[default]
    Signed,
    /// Confidentiality + integrity — AES-256-GCM
    Encrypted,
}
