//! Core key, encoding and encryption types and operations.
//!
//! This module provides the fundamental building blocks:
//!
//! - [`algorithm`] - Curve, algorithm, usage and accessibility descriptors
//! - [`error`] - Error types for all operations
//! - [`types`] - Key handles, public keys, SPKI encodings, ciphertexts
//! - [`operations`] - Public key derivation/encoding, X9.63 KDF, ECIES
//! - [`codec`] - The capability-checked ECIES encrypt/decrypt entry point

pub mod algorithm;
pub mod codec;
pub mod error;
pub mod operations;
pub mod types;

// Re-export commonly used items
pub use algorithm::{Accessibility, Algorithm, Curve, KeyUsage, Operation};
pub use codec::EciesCodec;
pub use error::{EciesError, EciesResult};
