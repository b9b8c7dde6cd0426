// tests/core/derive.rs
use passcrypt::core::crc64::crc64;
use passcrypt::core::derive::derive;
use passcrypt::core::digest::{md5, sha256, tiger192_3};
use passcrypt::KeySpec;

#[test]
fn key_length_is_bits_over_eight() {
    for spec in KeySpec::ALL {
        for passphrase in ["", "x", "a longer passphrase"] {
            let material = derive(passphrase, None, spec);
            assert_eq!(material.key().len(), usize::from(spec.bits()) / 8);
            assert_eq!(material.iv().len(), spec.iv_len());
        }
    }
}

#[test]
fn derivation_is_deterministic() {
    for spec in KeySpec::ALL {
        let a = derive("same", Some("iv"), spec);
        let b = derive("same", Some("iv"), spec);
        assert_eq!(a.key(), b.key());
        assert_eq!(a.iv(), b.iv());
    }
}

#[test]
fn keys_are_raw_digests() {
    assert_eq!(derive("p", None, KeySpec::Bits64).key(), crc64(b"p"));
    assert_eq!(derive("p", None, KeySpec::Bits128).key(), md5(b"p"));
    assert_eq!(derive("p", None, KeySpec::Bits192).key(), tiger192_3(b"p"));
    assert_eq!(derive("p", None, KeySpec::Bits256).key(), sha256(b"p"));
}

#[test]
fn test_passphrase_128_fixture() {
    let material = derive("test", Some(""), KeySpec::Bits128);
    assert_eq!(
        hex::encode(material.key()),
        "098f6bcd4621d373cade4e832627b4f6"
    );
    assert_eq!(material.iv(), [0u8; 16]);
}

#[test]
fn absent_iv_is_zero_filled() {
    assert_eq!(derive("k", None, KeySpec::Bits64).iv(), [0u8; 8]);
    for spec in [KeySpec::Bits128, KeySpec::Bits192, KeySpec::Bits256] {
        assert_eq!(derive("k", None, spec).iv(), [0u8; 16]);
    }
}

#[test]
fn iv_is_crc64_for_64_and_md5_otherwise() {
    assert_eq!(derive("k", Some("iv"), KeySpec::Bits64).iv(), crc64(b"iv"));
    for spec in [KeySpec::Bits128, KeySpec::Bits192, KeySpec::Bits256] {
        // 16 bytes regardless of key width
        assert_eq!(derive("k", Some("iv"), spec).iv(), md5(b"iv"));
    }
}

#[test]
fn derived_material_debug_is_redacted() {
    let material = derive("secret", Some("iv"), KeySpec::Bits256);
    let dbg = format!("{material:?}");
    assert!(dbg.contains("Bits256"));
    assert!(!dbg.contains(&hex::encode(material.key())));
    assert!(dbg.contains("[REDACTED]"));
}
