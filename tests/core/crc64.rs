// tests/core/crc64.rs
use passcrypt::core::crc64::{crc64, crc64_u64};

#[test]
fn empty_input_is_all_zero() {
    // zero seed, no final complement
    assert_eq!(crc64(b""), [0u8; 8]);
    assert_eq!(crc64_u64(b""), 0);
}

#[test]
fn pinned_values() {
    let cases: &[(&[u8], &str)] = &[
        (b"a", "2caf25044a02145c"),
        (b"b", "6b055fede1e5eb68"),
        (b"123456789", "2b9c7ee4e2780c8a"),
        (b"test", "0eb07b92df17eaee"),
        (b"magickey", "1918d925371e013c"),
    ];
    for (input, expected) in cases {
        assert_eq!(hex::encode(crc64(input)), *expected, "{input:?}");
    }
}

#[test]
fn differs_from_crc64_xz() {
    // CRC-64/XZ check value for "123456789"
    assert_ne!(crc64_u64(b"123456789"), 0x995D_C9BB_DF19_39FA);
}

#[test]
fn distinguishes_short_inputs() {
    assert_ne!(crc64(b"a"), crc64(b"b"));
    assert_ne!(crc64(b"ab"), crc64(b"ba"));
    assert_ne!(crc64(b"a"), crc64(b"a\0"));
}

#[test]
fn digest_is_big_endian_accumulator() {
    for input in [&b"x"[..], b"hello world", b"\x00\xff\x10"] {
        assert_eq!(crc64(input), crc64_u64(input).to_be_bytes());
    }
}

#[test]
fn deterministic_across_calls_and_threads() {
    let expected = crc64(b"shared table");
    let handles: Vec<_> = (0..8)
        .map(|_| std::thread::spawn(|| crc64(b"shared table")))
        .collect();
    for h in handles {
        assert_eq!(h.join().unwrap(), expected);
    }
}
