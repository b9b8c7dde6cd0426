// src/enums.rs
//! Public enum types used throughout the crate
//!
//! `KeySpec` is the single place that knows how a key size maps onto a
//! derivation function, buffer widths and a block cipher. Everything else
//! asks it instead of matching on raw bit counts.

use serde::{Deserialize, Serialize};

use crate::consts::{AES_BLOCK_SIZE, DES_BLOCK_SIZE};
use crate::error::{CryptError, Result};

/// Declared key strength of a cipher context
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(try_from = "u16", into = "u16")]
pub enum KeySpec {
    /// CRC-64 key, DES-CBC. Legacy only.
    Bits64,
    #[default]
    Bits128,
    Bits192,
    Bits256,
}

/// Function that turns a passphrase into key bytes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DigestAlgorithm {
    Crc64,
    Md5,
    /// Tiger-192 in the "tiger192,3" byte order
    Tiger192,
    Sha256,
}

/// Block cipher handed the derived key, always in CBC mode with PKCS#7 padding
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CipherAlgorithm {
    DesCbc,
    Aes128Cbc,
    Aes192Cbc,
    Aes256Cbc,
}

/// Everything a [`KeySpec`] binds to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeySpecParams {
    pub digest: DigestAlgorithm,
    pub key_len: usize,
    pub iv_len: usize,
    pub cipher: CipherAlgorithm,
}

impl KeySpec {
    pub const ALL: [KeySpec; 4] = [
        KeySpec::Bits64,
        KeySpec::Bits128,
        KeySpec::Bits192,
        KeySpec::Bits256,
    ];

    /// Map a bit count onto a spec; anything but 64/128/192/256 is rejected.
    pub fn from_bits(bits: u16) -> Result<Self> {
        match bits {
            64 => Ok(KeySpec::Bits64),
            128 => Ok(KeySpec::Bits128),
            192 => Ok(KeySpec::Bits192),
            256 => Ok(KeySpec::Bits256),
            other => Err(CryptError::InvalidKeySize(other)),
        }
    }

    pub const fn bits(self) -> u16 {
        match self {
            KeySpec::Bits64 => 64,
            KeySpec::Bits128 => 128,
            KeySpec::Bits192 => 192,
            KeySpec::Bits256 => 256,
        }
    }

    pub const fn params(self) -> KeySpecParams {
        match self {
            KeySpec::Bits64 => KeySpecParams {
                digest: DigestAlgorithm::Crc64,
                key_len: 8,
                iv_len: DES_BLOCK_SIZE,
                cipher: CipherAlgorithm::DesCbc,
            },
            KeySpec::Bits128 => KeySpecParams {
                digest: DigestAlgorithm::Md5,
                key_len: 16,
                iv_len: AES_BLOCK_SIZE,
                cipher: CipherAlgorithm::Aes128Cbc,
            },
            KeySpec::Bits192 => KeySpecParams {
                digest: DigestAlgorithm::Tiger192,
                key_len: 24,
                iv_len: AES_BLOCK_SIZE,
                cipher: CipherAlgorithm::Aes192Cbc,
            },
            KeySpec::Bits256 => KeySpecParams {
                digest: DigestAlgorithm::Sha256,
                key_len: 32,
                iv_len: AES_BLOCK_SIZE,
                cipher: CipherAlgorithm::Aes256Cbc,
            },
        }
    }

    #[inline]
    pub const fn key_len(self) -> usize {
        self.params().key_len
    }

    #[inline]
    pub const fn iv_len(self) -> usize {
        self.params().iv_len
    }

    #[inline]
    pub const fn digest(self) -> DigestAlgorithm {
        self.params().digest
    }

    #[inline]
    pub const fn cipher(self) -> CipherAlgorithm {
        self.params().cipher
    }
}

impl TryFrom<u16> for KeySpec {
    type Error = CryptError;

    fn try_from(bits: u16) -> Result<Self> {
        KeySpec::from_bits(bits)
    }
}

impl From<KeySpec> for u16 {
    fn from(spec: KeySpec) -> Self {
        spec.bits()
    }
}

impl std::fmt::Display for KeySpec {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}-bit", self.bits())
    }
}

impl CipherAlgorithm {
    /// Block width of the cipher, which is also the required IV width
    pub const fn block_size(self) -> usize {
        match self {
            CipherAlgorithm::DesCbc => DES_BLOCK_SIZE,
            _ => AES_BLOCK_SIZE,
        }
    }

    /// OpenSSL-style name, e.g. `aes-256-cbc`
    pub const fn name(self) -> &'static str {
        match self {
            CipherAlgorithm::DesCbc => "des-cbc",
            CipherAlgorithm::Aes128Cbc => "aes-128-cbc",
            CipherAlgorithm::Aes192Cbc => "aes-192-cbc",
            CipherAlgorithm::Aes256Cbc => "aes-256-cbc",
        }
    }
}

impl std::fmt::Display for CipherAlgorithm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
