// src/core/digest.rs
//! Raw digest helpers used by key derivation
//!
//! Outputs are raw bytes. Nothing here hex-encodes.

use md5::Md5;
use sha2::{Digest, Sha256};
use tiger::Tiger;

pub fn md5(data: &[u8]) -> [u8; 16] {
    Md5::digest(data).into()
}

pub fn sha256(data: &[u8]) -> [u8; 32] {
    Sha256::digest(data).into()
}

/// Tiger-192 in the "tiger192,3" byte order.
///
/// Older Tiger front-ends emit each of the three 64-bit state words
/// big-endian; "tiger192,3" is the same digest with every word
/// byte-reversed. The `tiger` crate already produces the reversed order, so
/// this equals [`swap_word_order`] applied to the legacy output.
pub fn tiger192_3(data: &[u8]) -> [u8; 24] {
    Tiger::digest(data).into()
}

/// Reverse the bytes inside each 8-byte word, leaving word order intact.
///
/// Converts between the legacy "tiger192" ordering and "tiger192,3". The
/// permutation is its own inverse.
pub fn swap_word_order(digest: [u8; 24]) -> [u8; 24] {
    let mut out = [0u8; 24];
    for (src, dst) in digest.chunks_exact(8).zip(out.chunks_exact_mut(8)) {
        for (j, byte) in src.iter().rev().enumerate() {
            dst[j] = *byte;
        }
    }
    out
}
