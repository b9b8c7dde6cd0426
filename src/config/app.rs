// src/config/app.rs
use std::path::Path;

use once_cell::sync::OnceCell;
use serde::Deserialize;

use super::defaults::*;
use crate::consts::{BITS_ENV, CONFIG_PATH_ENV, DEFAULT_CONFIG_PATH, IV_ENV};
use crate::crypt::PassCrypt;
use crate::enums::KeySpec;
use crate::error::{ConfigError, Result};

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Config {
    #[serde(default = "default_cipher")]
    pub cipher: CipherSettings,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CipherSettings {
    /// Written as a bit count; anything but 64, 128, 192 or 256 fails to parse
    #[serde(default = "default_bits")]
    pub bits: KeySpec,
    #[serde(default)]
    pub iv: Option<String>,
}

impl Default for CipherSettings {
    fn default() -> Self {
        default_cipher()
    }
}

impl Config {
    pub fn from_toml_str(content: &str) -> Result<Self> {
        Ok(toml::from_str(content).map_err(ConfigError::from)?)
    }

    /// Parse one file as-is, without environment overrides
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(ConfigError::from)?;
        Self::from_toml_str(&content)
    }

    /// Read `path` if given. Otherwise read the file named by
    /// `PASSCRYPT_CONFIG` (or `passcrypt.toml`) when it exists, falling back
    /// to built-in defaults. `PASSCRYPT_BITS` / `PASSCRYPT_IV` are applied
    /// last in every case.
    pub fn resolve(path: Option<&Path>) -> Result<Self> {
        let mut conf = match path {
            Some(path) => Self::from_path(path)?,
            None => {
                let config_path = std::env::var(CONFIG_PATH_ENV)
                    .unwrap_or_else(|_| DEFAULT_CONFIG_PATH.to_string());
                if Path::new(&config_path).exists() {
                    Self::from_path(&config_path)?
                } else {
                    Self::default()
                }
            }
        };
        conf.apply_env_overrides()?;
        Ok(conf)
    }

    pub fn from_env() -> Result<Self> {
        Self::resolve(None)
    }

    pub fn apply_env_overrides(&mut self) -> Result<()> {
        if let Ok(value) = std::env::var(BITS_ENV) {
            self.cipher.bits = value
                .trim()
                .parse()
                .ok()
                .and_then(|bits| KeySpec::from_bits(bits).ok())
                .ok_or(ConfigError::InvalidEnv {
                    var: BITS_ENV,
                    value,
                })?;
        }
        if let Ok(iv) = std::env::var(IV_ENV) {
            self.cipher.iv = Some(iv);
        }
        Ok(())
    }

    pub fn key_spec(&self) -> KeySpec {
        self.cipher.bits
    }

    pub fn build(&self, passphrase: &str) -> PassCrypt {
        PassCrypt::new(passphrase, self.cipher.bits, self.cipher.iv.as_deref())
    }
}

static CONFIG: OnceCell<Config> = OnceCell::new();

/// Process-wide config, read from the environment on first use.
///
/// A failed read is not cached; the next call tries again.
pub fn load() -> Result<&'static Config> {
    CONFIG.get_or_try_init(Config::from_env)
}
