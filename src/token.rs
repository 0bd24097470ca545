// src/token.rs
//! Per-key token codec — no rotation logic, works on in-memory buffers
//!
//! Wire formats match the legacy framework so migrated tokens keep their
//! shape across the upgrade:
//! - Signed:    `base64(payload)--hex(hmac_sha256)`
//! - Encrypted: `base64(ciphertext)--base64(nonce)--base64(tag)`
//!
//! Opening with a single key never reports *why* it failed — a malformed
//! token, a bad MAC, and a bad auth tag all come back as `None`, which the
//! rotation loop folds into its try-the-next-key behavior.

use aes_gcm::aead::{Aead, KeyInit};
use aes_gcm::{Aes256Gcm, Nonce};
use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use hmac::{Hmac, Mac};
use rand::RngCore;
use sha2::Sha256;

use crate::consts::{AES_256_KEY_LEN, GCM_NONCE_LEN, GCM_TAG_LEN, TOKEN_SEPARATOR};
use crate::error::ConfigError;
use crate::keys::DerivedKey;

type HmacSha256 = Hmac<Sha256>;

fn hmac_hexdigest(data: &[u8], key: &DerivedKey) -> String {
    let mut mac = <HmacSha256 as Mac>::new_from_slice(key.expose())
        .expect("HMAC accepts any key length");
    mac.update(data);
    hex::encode(mac.finalize().into_bytes())
}

/// Sign `payload` with `key` → `base64(payload)--hexdigest`
pub fn seal_signed(payload: &[u8], key: &DerivedKey) -> Vec<u8> {
    let data = STANDARD.encode(payload);
    let digest = hmac_hexdigest(data.as_bytes(), key);
    format!("{data}{TOKEN_SEPARATOR}{digest}").into_bytes()
}

/// Verify `token` with `key`, returning the payload if the MAC matches
pub fn open_signed(token: &[u8], key: &DerivedKey) -> Option<Vec<u8>> {
    let token = std::str::from_utf8(token).ok()?;
    let (data, digest) = token.rsplit_once(TOKEN_SEPARATOR)?;
    let digest = hex::decode(digest).ok()?;

    let mut mac = <HmacSha256 as Mac>::new_from_slice(key.expose())
        .expect("HMAC accepts any key length");
    mac.update(data.as_bytes());
    mac.verify_slice(&digest).ok()?; // constant-time

    STANDARD.decode(data).ok()
}

/// Encrypt `payload` with `key` → `base64(ct)--base64(nonce)--base64(tag)`
///
/// The key must be exactly 32 bytes; anything else is a configuration
/// mistake and refuses to seal rather than silently producing garbage.
pub fn seal_encrypted(payload: &[u8], key: &DerivedKey) -> Result<Vec<u8>, ConfigError> {
    if key.len() != AES_256_KEY_LEN {
        return Err(ConfigError::BadSealKeyLength {
            expected: AES_256_KEY_LEN,
            got: key.len(),
        });
    }
    let cipher = Aes256Gcm::new_from_slice(key.expose()).expect("key length checked above");

    let mut nonce_bytes = [0u8; GCM_NONCE_LEN];
    rand::rng().fill_bytes(&mut nonce_bytes);

    let sealed = cipher
        .encrypt(Nonce::from_slice(&nonce_bytes), payload)
        .expect("in-memory AES-GCM encryption cannot fail");
    let (ct, tag) = sealed.split_at(sealed.len() - GCM_TAG_LEN);

    Ok(format!(
        "{}{sep}{}{sep}{}",
        STANDARD.encode(ct),
        STANDARD.encode(nonce_bytes),
        STANDARD.encode(tag),
        sep = TOKEN_SEPARATOR,
    )
    .into_bytes())
}

/// Decrypt `token` with `key`, returning the payload if authentication passes
pub fn open_encrypted(token: &[u8], key: &DerivedKey) -> Option<Vec<u8>> {
    if key.len() != AES_256_KEY_LEN {
        return None;
    }
    let token = std::str::from_utf8(token).ok()?;

    let mut parts = token.split(TOKEN_SEPARATOR);
    let (ct, nonce, tag) = (parts.next()?, parts.next()?, parts.next()?);
    if parts.next().is_some() {
        return None;
    }

    let mut combined = STANDARD.decode(ct).ok()?;
    let nonce = STANDARD.decode(nonce).ok()?;
    let tag = STANDARD.decode(tag).ok()?;
    if nonce.len() != GCM_NONCE_LEN || tag.len() != GCM_TAG_LEN {
        return None;
    }
    combined.extend_from_slice(&tag);

    let cipher = Aes256Gcm::new_from_slice(key.expose()).ok()?;
    cipher
        .decrypt(Nonce::from_slice(&nonce), combined.as_slice())
        .ok()
}
