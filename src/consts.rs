// src/consts.rs
//! Shared constants — security parameters and wire-format sizes

/// KDF iterations used by the legacy scheme being migrated away from
// Matches the framework default the old cookies were derived with —
// changing it makes every existing cookie underivable
pub const LEGACY_KDF_ITERATIONS: u32 = 1000;

/// AES-256-GCM key size in bytes
pub const AES_256_KEY_LEN: usize = 32;

/// AES-GCM nonce size in bytes (96-bit, the GCM standard)
pub const GCM_NONCE_LEN: usize = 12;

/// AES-GCM authentication tag size in bytes
pub const GCM_TAG_LEN: usize = 16;

/// Separator between the base64/hex segments of a token
pub const TOKEN_SEPARATOR: &str = "--";

/// Default derived length for signed-mode keys (HMAC takes any length)
pub const DEFAULT_SIGNED_KEY_LEN: usize = 64;

/// Default derived length for encrypted-mode keys (must fit AES-256)
pub const DEFAULT_ENCRYPTED_KEY_LEN: usize = AES_256_KEY_LEN;
