// src/lib.rs
//! passcrypt: passphrase-keyed DES/AES-CBC string encryption
//!
//! Features:
//! - 64/128/192/256-bit keys derived from any passphrase
//!   (CRC-64, MD5, Tiger-192, SHA-256)
//! - Optional IV derived from a second string
//! - base64 ciphertext, PKCS#7 padding
//! - Key material wiped on drop (`zeroize`)
//!
//! ```
//! use passcrypt::{KeySpec, PassCrypt};
//!
//! let mc = PassCrypt::new("magickey", KeySpec::Bits256, None);
//! let encrypted = mc.encrypt_str_to_base64("http://magiclen.org").unwrap();
//! assert_eq!(encrypted, "DS/2U8royDnJDiNY2ps3f6ZoTbpZo8ZtUGYLGEjwLDQ=");
//! assert_eq!(
//!     mc.decrypt_base64_to_string(&encrypted).unwrap(),
//!     "http://magiclen.org"
//! );
//! ```

pub mod aliases;
pub mod config;
pub mod consts;
pub mod core;
pub mod crypt;
pub mod enums;
pub mod error;

// Re-export everything users need at the crate root
pub use config::load as load_config;
pub use crate::core::{crc64, derive, DerivedMaterial};
pub use crypt::PassCrypt;
pub use enums::{CipherAlgorithm, DigestAlgorithm, KeySpec};
pub use error::{CryptError, Malformed, Result};
