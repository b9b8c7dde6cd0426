// src/config/defaults.rs
use crate::config::app::CipherSettings;
use crate::enums::KeySpec;

pub fn default_bits() -> KeySpec {
    KeySpec::default()
}

pub fn default_cipher() -> CipherSettings {
    CipherSettings {
        bits: default_bits(),
        iv: None,
    }
}
