// src/config.rs
//! Configuration — master secret plus one derivation scheme set per mode
//!
//! Loaded once at startup, TOML with an env-var path override. Schemes are
//! listed newest first; the first entry of each list is the current scheme,
//! the rest are legacy fallbacks kept only so old tokens stay readable.

use once_cell::sync::OnceCell;
use serde::Deserialize;

use crate::consts::{DEFAULT_ENCRYPTED_KEY_LEN, DEFAULT_SIGNED_KEY_LEN, LEGACY_KDF_ITERATIONS};
use crate::enums::HashPrimitive;
use crate::error::ConfigError;
use crate::kdf::DerivationParams;
use crate::keys::RotationList;

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub secret: Secret,
    /// Signed-mode schemes, newest first
    pub signed: Vec<Scheme>,
    /// Encrypted-mode schemes, newest first
    pub encrypted: Vec<Scheme>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Secret {
    pub master: String,
}

/// One derivation scheme — deserializable mirror of [`DerivationParams`]
#[derive(Debug, Clone, Deserialize)]
pub struct Scheme {
    pub salt: String,
    pub iterations: u32,
    pub hash: HashPrimitive,
    /// Explicit per scheme — signed and encrypted lengths are configured
    /// independently, never shared
    pub key_len: usize,
}

impl Scheme {
    pub fn params(&self) -> DerivationParams {
        DerivationParams::new(
            self.salt.as_bytes().to_vec(),
            self.iterations,
            self.hash,
            self.key_len,
        )
    }
}

impl Config {
    /// Read and parse a config file — I/O and TOML failures surface as
    /// [`ConfigError`], fatal at startup
    pub fn from_path(path: impl AsRef<std::path::Path>) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Ok(toml::from_str(&content)?)
    }

    fn derive_list(&self, schemes: &[Scheme]) -> Result<RotationList, ConfigError> {
        let params: Vec<DerivationParams> = schemes.iter().map(Scheme::params).collect();
        RotationList::derive_from(self.secret.master.as_bytes(), &params)
    }

    /// Rotation list for signed tokens, current key first
    pub fn signed_keys(&self) -> Result<RotationList, ConfigError> {
        self.derive_list(&self.signed)
    }

    /// Rotation list for encrypted tokens, current key first
    pub fn encrypted_keys(&self) -> Result<RotationList, ConfigError> {
        self.derive_list(&self.encrypted)
    }
}

static CONFIG: OnceCell<Config> = OnceCell::new();

/// Load config at runtime — falls back to dev defaults if missing
pub fn load() -> &'static Config {
    CONFIG.get_or_init(|| {
        let config_path =
            std::env::var("ROTOR_CONFIG").unwrap_or_else(|_| "rotor-config.toml".to_string());

        if std::path::Path::new(&config_path).exists() {
            Config::from_path(&config_path).expect("Invalid rotor config")
        } else {
            eprintln!("Warning: {config_path} not found — using built-in dev defaults");
            dev_defaults()
        }
    })
}

/// Built-in dev configuration: current SHA256 schemes with a SHA1 legacy
/// fallback, mirroring a typical digest-upgrade migration
fn dev_defaults() -> Config {
    Config {
        secret: Secret {
            master: "dev-master-secret-2025".into(),
        },
        signed: vec![
            Scheme {
                salt: "signed cookie".into(),
                iterations: LEGACY_KDF_ITERATIONS,
                hash: HashPrimitive::Sha256,
                key_len: DEFAULT_SIGNED_KEY_LEN,
            },
            Scheme {
                salt: "signed cookie".into(),
                iterations: LEGACY_KDF_ITERATIONS,
                hash: HashPrimitive::Sha1,
                key_len: DEFAULT_SIGNED_KEY_LEN,
            },
        ],
        encrypted: vec![
            Scheme {
                salt: "authenticated encrypted cookie".into(),
                iterations: LEGACY_KDF_ITERATIONS,
                hash: HashPrimitive::Sha256,
                key_len: DEFAULT_ENCRYPTED_KEY_LEN,
            },
            Scheme {
                salt: "authenticated encrypted cookie".into(),
                iterations: LEGACY_KDF_ITERATIONS,
                hash: HashPrimitive::Sha1,
                key_len: DEFAULT_ENCRYPTED_KEY_LEN,
            },
        ],
    }
}
