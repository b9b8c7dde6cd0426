// src/core/mod.rs
//! Key derivation and the raw CBC layer: no I/O, no encoding
pub mod cipher;
pub mod crc64;
pub mod derive;
pub mod digest;

pub use cipher::{decrypt_bytes, encrypt_bytes};
pub use crc64::{crc64, crc64_u64};
pub use derive::{derive, DerivedMaterial};
