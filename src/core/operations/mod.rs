//! Cryptographic operations.
//!
//! - [`encoder`] - Public key derivation and SubjectPublicKeyInfo encoding
//! - [`kdf`] - ANSI X9.63 key derivation (SHA-256)
//! - [`ecies`] - P-256 ECIES seal/open

pub mod ecies;
pub mod encoder;
pub mod kdf;
