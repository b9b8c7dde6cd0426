// src/core/derive.rs
//! Passphrase → (key, IV) derivation
//!
//! A pure function of `(passphrase, iv_source, spec)`. Digests are used as raw
//! bytes; the key width always equals `spec.bits() / 8`. Digests are written
//! directly into the wiped-on-drop buffers, never into plain temporaries.

use std::fmt;

use md5::Md5;
use sha2::digest::generic_array::GenericArray;
use sha2::{Digest, Sha256};
use tiger::Tiger;
use zeroize::Zeroize;

use crate::aliases::{CipherIv, CipherKey};
use crate::core::crc64::crc64_u64;
use crate::enums::{DigestAlgorithm, KeySpec};

/// Key and IV produced once per cipher context
#[derive(Clone)]
pub struct DerivedMaterial {
    spec: KeySpec,
    key: CipherKey,
    iv: CipherIv,
}

impl DerivedMaterial {
    pub fn spec(&self) -> KeySpec {
        self.spec
    }

    pub fn key(&self) -> &[u8] {
        &self.key
    }

    pub fn iv(&self) -> &[u8] {
        &self.iv
    }
}

impl fmt::Debug for DerivedMaterial {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DerivedMaterial")
            .field("spec", &self.spec)
            .field("key", &"[REDACTED]")
            .field("iv", &"[REDACTED]")
            .finish()
    }
}

/// Derive key material for `spec`.
///
/// `None` and `Some("")` both select an all-zero IV. That is deterministic
/// across contexts sharing a key, so equal plaintext prefixes produce equal
/// ciphertext prefixes; pass an IV source whenever possible.
pub fn derive(passphrase: &str, iv_source: Option<&str>, spec: KeySpec) -> DerivedMaterial {
    let mut key = CipherKey::new(vec![0u8; spec.key_len()]);
    digest_into(spec.digest(), passphrase.as_bytes(), &mut key);

    let mut iv = CipherIv::new(vec![0u8; spec.iv_len()]);
    match iv_source.filter(|s| !s.is_empty()) {
        Some(src) => {
            let algorithm = match spec {
                KeySpec::Bits64 => DigestAlgorithm::Crc64,
                _ => DigestAlgorithm::Md5,
            };
            digest_into(algorithm, src.as_bytes(), &mut iv);
        }
        None => {
            #[cfg(feature = "logging")]
            tracing::warn!(%spec, "no IV source given, using an all-zero IV");
        }
    }

    DerivedMaterial { spec, key, iv }
}

/// Write the digest straight into `out`, whose length must match the algorithm.
fn digest_into(algorithm: DigestAlgorithm, data: &[u8], out: &mut [u8]) {
    match algorithm {
        DigestAlgorithm::Crc64 => {
            let mut sum = crc64_u64(data);
            for (i, byte) in out.iter_mut().enumerate() {
                *byte = (sum >> (56 - 8 * i)) as u8;
            }
            sum.zeroize();
        }
        DigestAlgorithm::Md5 => finalize_into::<Md5>(data, out),
        DigestAlgorithm::Tiger192 => finalize_into::<Tiger>(data, out),
        DigestAlgorithm::Sha256 => finalize_into::<Sha256>(data, out),
    }
}

fn finalize_into<D: Digest>(data: &[u8], out: &mut [u8]) {
    D::new_with_prefix(data).finalize_into(GenericArray::from_mut_slice(out));
}
