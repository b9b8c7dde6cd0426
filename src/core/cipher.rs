// src/core/cipher.rs
//! CBC encryption over DES / AES with PKCS#7 padding
//!
//! Padding is left to `cbc`'s `Pkcs7`; this module only picks the block cipher
//! and turns library failures into [`CryptError`]s.

use aes::{Aes128, Aes192, Aes256};
use cbc::cipher::block_padding::Pkcs7;
use cbc::cipher::{BlockCipher, BlockDecryptMut, BlockEncryptMut, KeyInit, KeyIvInit};
use des::Des;

use crate::core::derive::DerivedMaterial;
use crate::enums::CipherAlgorithm;
use crate::error::{CryptError, Malformed, Result};

/// Encrypt raw bytes under `material`.
pub fn encrypt_bytes(material: &DerivedMaterial, plaintext: &[u8]) -> Result<Vec<u8>> {
    let (key, iv) = (material.key(), material.iv());
    match material.spec().cipher() {
        CipherAlgorithm::DesCbc => encrypt_with::<Des>(key, iv, plaintext),
        CipherAlgorithm::Aes128Cbc => encrypt_with::<Aes128>(key, iv, plaintext),
        CipherAlgorithm::Aes192Cbc => encrypt_with::<Aes192>(key, iv, plaintext),
        CipherAlgorithm::Aes256Cbc => encrypt_with::<Aes256>(key, iv, plaintext),
    }
}

/// Decrypt raw bytes under `material` and strip the padding.
///
/// Empty input, input that is not a whole number of blocks, and bad padding
/// are all [`CryptError::MalformedCiphertext`].
pub fn decrypt_bytes(material: &DerivedMaterial, ciphertext: &[u8]) -> Result<Vec<u8>> {
    let cipher = material.spec().cipher();
    let block = cipher.block_size();
    if ciphertext.is_empty() || ciphertext.len() % block != 0 {
        return Err(Malformed::BlockLength {
            len: ciphertext.len(),
            block,
        }
        .into());
    }

    let (key, iv) = (material.key(), material.iv());
    match cipher {
        CipherAlgorithm::DesCbc => decrypt_with::<Des>(key, iv, ciphertext),
        CipherAlgorithm::Aes128Cbc => decrypt_with::<Aes128>(key, iv, ciphertext),
        CipherAlgorithm::Aes192Cbc => decrypt_with::<Aes192>(key, iv, ciphertext),
        CipherAlgorithm::Aes256Cbc => decrypt_with::<Aes256>(key, iv, ciphertext),
    }
}

fn encrypt_with<C>(key: &[u8], iv: &[u8], plaintext: &[u8]) -> Result<Vec<u8>>
where
    C: BlockEncryptMut + BlockCipher + KeyInit,
{
    let encryptor = cbc::Encryptor::<C>::new_from_slices(key, iv)?;
    Ok(encryptor.encrypt_padded_vec_mut::<Pkcs7>(plaintext))
}

fn decrypt_with<C>(key: &[u8], iv: &[u8], ciphertext: &[u8]) -> Result<Vec<u8>>
where
    C: BlockDecryptMut + BlockCipher + KeyInit,
{
    let decryptor = cbc::Decryptor::<C>::new_from_slices(key, iv)?;
    decryptor
        .decrypt_padded_vec_mut::<Pkcs7>(ciphertext)
        .map_err(|_| CryptError::MalformedCiphertext(Malformed::Padding))
}
