// src/lib.rs
//! cookie-key-rotor — legacy-compatible key derivation and token rotation
//!
//! Features:
//! - PBKDF2 key derivation with explicit salt/iterations/hash/length
//! - Ordered newest-first rotation lists for transparent key migration
//! - Signed (HMAC-SHA256) and Encrypted (AES-256-GCM) token modes
//! - Zeroized key material, constant-time comparisons

pub mod config;
pub mod consts;
pub mod enums;
pub mod error;
pub mod kdf;
pub mod keys;
pub mod rotor;
pub mod token;

// Re-export everything users need at the crate root
pub use config::{load as load_config, Config, Scheme};
pub use enums::{HashPrimitive, TokenMode};
pub use error::{ConfigError, VerifyError};
pub use kdf::{derive, DerivationParams};
pub use keys::{DerivedKey, RotationList};
pub use rotor::{open, seal, Opened, Rotor};
