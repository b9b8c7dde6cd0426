// src/crypt.rs
//! `PassCrypt`: the cipher context callers hold
//!
//! Key material is derived once in the constructor and reused for every call.
//! Each call builds a fresh CBC instance, so a context can be shared across
//! threads without locking.

use base64::engine::general_purpose::STANDARD;
use base64::Engine;

use crate::core::{decrypt_bytes, derive, encrypt_bytes, DerivedMaterial};
use crate::enums::{CipherAlgorithm, KeySpec};
use crate::error::{Malformed, Result};

#[derive(Debug, Clone)]
pub struct PassCrypt {
    material: DerivedMaterial,
}

impl PassCrypt {
    /// Build a context for `spec`. An empty or absent `iv` selects the zero IV.
    pub fn new(passphrase: &str, spec: KeySpec, iv: Option<&str>) -> Self {
        #[cfg(feature = "logging")]
        tracing::debug!(%spec, cipher = %spec.cipher(), "deriving cipher context");

        Self {
            material: derive(passphrase, iv, spec),
        }
    }

    /// Like [`PassCrypt::new`] but takes a raw bit count, rejecting anything
    /// other than 64, 128, 192 or 256.
    pub fn from_bits(passphrase: &str, bits: u16, iv: Option<&str>) -> Result<Self> {
        Ok(Self::new(passphrase, KeySpec::from_bits(bits)?, iv))
    }

    /// 128-bit AES, zero IV.
    pub fn with_defaults(passphrase: &str) -> Self {
        Self::new(passphrase, KeySpec::default(), None)
    }

    pub fn key_spec(&self) -> KeySpec {
        self.material.spec()
    }

    pub fn cipher_algorithm(&self) -> CipherAlgorithm {
        self.material.spec().cipher()
    }

    /// UTF-8 text → base64 ciphertext
    pub fn encrypt_str_to_base64(&self, plaintext: &str) -> Result<String> {
        self.encrypt_bytes_to_base64(plaintext.as_bytes())
    }

    pub fn encrypt_bytes_to_base64(&self, plaintext: &[u8]) -> Result<String> {
        Ok(STANDARD.encode(self.encrypt_to_bytes(plaintext)?))
    }

    /// Raw ciphertext, PKCS#7 padded to the block size.
    ///
    /// Fails only if the cipher rejects the key/IV widths, which `KeySpec`
    /// fixes ahead of time.
    pub fn encrypt_to_bytes(&self, plaintext: &[u8]) -> Result<Vec<u8>> {
        encrypt_bytes(&self.material, plaintext)
    }

    /// base64 ciphertext → UTF-8 text
    pub fn decrypt_base64_to_string(&self, ciphertext: &str) -> Result<String> {
        let bytes = self.decrypt_base64_to_bytes(ciphertext)?;
        Ok(String::from_utf8(bytes).map_err(Malformed::Utf8)?)
    }

    pub fn decrypt_base64_to_bytes(&self, ciphertext: &str) -> Result<Vec<u8>> {
        let raw = STANDARD.decode(ciphertext)?;
        self.decrypt_bytes_to_bytes(&raw)
    }

    pub fn decrypt_bytes_to_bytes(&self, ciphertext: &[u8]) -> Result<Vec<u8>> {
        let result = decrypt_bytes(&self.material, ciphertext);

        #[cfg(feature = "logging")]
        if let Err(err) = &result {
            tracing::debug!(spec = %self.key_spec(), error = %err, "decryption failed");
        }

        result
    }
}
