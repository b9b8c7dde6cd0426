// src/core/crc64.rs
//! CRC-64 used as the 64-bit key derivation function
//!
//! Reflected ECMA-182 polynomial in right-shift table form, accumulator
//! seeded with zero and no final complement. This is *not* CRC-64/XZ: a
//! library CRC-64 produces different bytes and therefore incompatible keys.

use once_cell::sync::Lazy;

use crate::consts::CRC64_POLY_REFLECTED;

static TABLE: Lazy<[u64; 256]> = Lazy::new(build_table);

fn build_table() -> [u64; 256] {
    let mut table = [0u64; 256];
    for (i, slot) in table.iter_mut().enumerate() {
        let mut v = i as u64;
        for _ in 0..8 {
            v = if v & 1 == 1 {
                (v >> 1) ^ CRC64_POLY_REFLECTED
            } else {
                v >> 1
            };
        }
        *slot = v;
    }
    table
}

/// Checksum as a plain integer
pub fn crc64_u64(data: &[u8]) -> u64 {
    let table = &*TABLE;
    data.iter().fold(0u64, |acc, &byte| {
        (acc >> 8) ^ table[((acc ^ u64::from(byte)) & 0xFF) as usize]
    })
}

/// 8-byte digest, most significant byte first
#[inline]
pub fn crc64(data: &[u8]) -> [u8; 8] {
    crc64_u64(data).to_be_bytes()
}
