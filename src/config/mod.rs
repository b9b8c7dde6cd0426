// src/config/mod.rs
//! Configuration for passcrypt contexts
//!
//! Lazy-loaded global config with TOML + env overrides.

pub use app::{load, CipherSettings, Config};

mod app;
mod defaults;
