// tests/core/mod.rs

#[cfg(test)]
mod crc64;
#[cfg(test)]
mod derive;
#[cfg(test)]
mod digest;
