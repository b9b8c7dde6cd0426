// src/aliases.rs
//! Secret buffer types for derived key material
//!
//! Key and IV widths depend on the [`KeySpec`](crate::enums::KeySpec), so both
//! are heap buffers. `Zeroizing` wipes them in its `Drop`.

use zeroize::Zeroizing;

/// Any value that is wiped when dropped
pub type Secret<T> = Zeroizing<T>;

pub type CipherKey = Secret<Vec<u8>>; // 8, 16, 24 or 32 bytes
pub type CipherIv = Secret<Vec<u8>>; // 8 or 16 bytes
