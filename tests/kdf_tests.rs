// tests/kdf_tests.rs
mod common;
use common::{sha1_params, sha256_params};

use cookie_key_rotor::enums::HashPrimitive;
use cookie_key_rotor::error::ConfigError;
use cookie_key_rotor::kdf::{derive, DerivationParams};

#[test]
fn test_derive_is_deterministic() {
    common::setup();
    let params = sha256_params("saltB", 32);

    let a = derive(b"s3cr3t", &params).unwrap();
    let b = derive(b"s3cr3t", &params).unwrap();

    assert_eq!(a, b);
    assert_eq!(a.len(), 32);
}

#[test]
fn test_rfc6070_pbkdf2_sha1_vectors() {
    let one = DerivationParams::new(b"salt".to_vec(), 1, HashPrimitive::Sha1, 20);
    let key = derive(b"password", &one).unwrap();
    assert_eq!(
        hex::encode(key.expose()),
        "0c60c80f961f0e71f3a9b524af6012062fe037a6"
    );

    let two = DerivationParams::new(b"salt".to_vec(), 2, HashPrimitive::Sha1, 20);
    let key = derive(b"password", &two).unwrap();
    assert_eq!(
        hex::encode(key.expose()),
        "ea6c014dc72d6f8ccd1ed92ace1d41f0d8de8957"
    );
}

#[test]
fn test_pbkdf2_sha256_vector() {
    let params = DerivationParams::new(b"salt".to_vec(), 1, HashPrimitive::Sha256, 32);
    let key = derive(b"password", &params).unwrap();
    assert_eq!(
        hex::encode(key.expose()),
        "120fb6cffcf8b32c43e7225256c4f837a86548c92ccc35480805987cb70be17b"
    );
}

#[test]
fn test_different_salt_yields_unrelated_key() {
    let a = derive(b"s3cr3t", &sha256_params("saltA", 32)).unwrap();
    let b = derive(b"s3cr3t", &sha256_params("saltB", 32)).unwrap();
    assert_ne!(a, b);
}

#[test]
fn test_different_hash_yields_unrelated_key() {
    let a = derive(b"s3cr3t", &sha1_params("saltA", 32)).unwrap();
    let b = derive(b"s3cr3t", &sha256_params("saltA", 32)).unwrap();
    assert_ne!(a, b);
}

#[test]
fn test_shorter_output_is_prefix_of_longer() {
    // PBKDF2 truncates the block stream, so a 16-byte key is the prefix
    // of the 32-byte key derived under otherwise identical params
    let short = derive(b"s3cr3t", &sha256_params("saltA", 16)).unwrap();
    let long = derive(b"s3cr3t", &sha256_params("saltA", 32)).unwrap();
    assert_eq!(short.expose(), &long.expose()[..16]);
}

#[test]
fn test_empty_salt_is_allowed_for_legacy_compat() {
    let params = DerivationParams::new(Vec::new(), 1000, HashPrimitive::Sha1, 32);
    let key = derive(b"s3cr3t", &params).unwrap();
    assert_eq!(key.len(), 32);
}

#[test]
fn test_zero_iterations_is_a_config_error() {
    let params = DerivationParams::new(b"salt".to_vec(), 0, HashPrimitive::Sha256, 32);
    let err = derive(b"s3cr3t", &params);
    assert!(matches!(err, Err(ConfigError::BadIterations(0))));
}

#[test]
fn test_zero_key_len_is_a_config_error() {
    let params = DerivationParams::new(b"salt".to_vec(), 1000, HashPrimitive::Sha256, 0);
    let err = derive(b"s3cr3t", &params);
    assert!(matches!(err, Err(ConfigError::ZeroKeyLength)));
}

#[test]
fn test_derived_key_debug_never_prints_bytes() {
    let key = derive(b"s3cr3t", &sha256_params("saltA", 32)).unwrap();
    let debug = format!("{key:?}");
    assert_eq!(debug, "DerivedKey(<32 bytes>)");
    assert!(!debug.contains(&hex::encode(key.expose())));
}
