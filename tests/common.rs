// tests/common.rs
//! Shared test utilities: logging setup

#![allow(dead_code)]

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Route crate logs through the test writer (only emits with `--features logging`).
/// Idempotent, call from any test that wants output.
pub fn setup() {
    tracing_subscriber::registry()
        .with(fmt::layer().with_test_writer())
        .with(EnvFilter::from_default_env()) // respects RUST_LOG=
        .try_init()
        .ok();
}

pub const PASSPHRASES: &[&str] = &["", "test", "magickey", "pässwörd 🔑", "a much longer passphrase with spaces"];

pub const PLAINTEXTS: &[&str] = &[
    "",
    "Hello",
    "exactly16bytes!!",
    "http://magiclen.org",
    "多字節 UTF-8 文本 ✓",
];
