// src/consts.rs
//! Shared constants: algorithm parameters and defaults

/// Reflected generator polynomial of the right-shift CRC-64 table (ECMA-182, bit-reversed)
pub const CRC64_POLY_REFLECTED: u64 = 0xC96C_5795_D787_0F42;

/// DES block (and IV) width in bytes
pub const DES_BLOCK_SIZE: usize = 8;

/// AES block (and IV) width in bytes, for every AES key size
pub const AES_BLOCK_SIZE: usize = 16;

/// Environment variable naming the TOML config file
pub const CONFIG_PATH_ENV: &str = "PASSCRYPT_CONFIG";

/// Config file read when `PASSCRYPT_CONFIG` is unset
pub const DEFAULT_CONFIG_PATH: &str = "passcrypt.toml";

/// Overrides `cipher.bits` from the config file
pub const BITS_ENV: &str = "PASSCRYPT_BITS";

/// Overrides `cipher.iv` from the config file
pub const IV_ENV: &str = "PASSCRYPT_IV";

/// Passphrase source for the CLI
pub const PASSPHRASE_ENV: &str = "PASSCRYPT_KEY";
