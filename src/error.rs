// src/error.rs
//! Public error type for the entire crate

use std::string::FromUtf8Error;

use thiserror::Error;

/// Every failure `passcrypt` can report
#[derive(Error, Debug)]
pub enum CryptError {
    #[error("unsupported key size: {0} bits (expected 64, 128, 192 or 256)")]
    InvalidKeySize(u16),

    #[error("malformed ciphertext: {0}")]
    MalformedCiphertext(#[from] Malformed),

    #[error("digest or cipher provider rejected its input: {0}")]
    DigestProvider(#[from] cbc::cipher::InvalidLength),

    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),
}

/// Why a ciphertext could not be turned back into plaintext
#[derive(Error, Debug)]
pub enum Malformed {
    #[error("invalid base64: {0}")]
    Base64(#[from] base64::DecodeError),

    #[error("length {len} is not a positive multiple of the {block}-byte block size")]
    BlockLength { len: usize, block: usize },

    #[error("invalid PKCS#7 padding")]
    Padding,

    #[error("plaintext is not valid UTF-8: {0}")]
    Utf8(#[from] FromUtf8Error),
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid TOML: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("invalid value {value:?} for environment variable {var}")]
    InvalidEnv { var: &'static str, value: String },
}

impl From<base64::DecodeError> for CryptError {
    fn from(err: base64::DecodeError) -> Self {
        CryptError::MalformedCiphertext(Malformed::Base64(err))
    }
}

pub type Result<T> = std::result::Result<T, CryptError>;
