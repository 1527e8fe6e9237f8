//! Error types for key store, encoding and ECIES operations.
//!
//! This module provides a single closed error type for every operation in the
//! crate. Each variant carries the low-level cause as context, except
//! [`EciesError::Decryption`], which is intentionally opaque so callers
//! cannot tell a bad tag from a malformed blob.

use thiserror::Error;

use crate::core::algorithm::{Algorithm, Operation};

/// Errors that can occur when creating keys or encrypting/decrypting.
#[derive(Debug, Error)]
pub enum EciesError {
    /// Key creation failed (backend unavailable, bad attributes, policy rejected).
    #[error("Key generation failed: {0}")]
    KeyGeneration(String),

    /// A key already exists under the requested tag.
    #[error("A key with tag {0:?} already exists")]
    DuplicateTag(String),

    /// No key is stored under the requested tag.
    #[error("No key found for tag {0:?}")]
    KeyNotFound(String),

    /// The public key could not be derived from the private key handle.
    #[error("Public key derivation failed: {0}")]
    Derivation(String),

    /// The key does not support the requested algorithm for this operation.
    #[error("Algorithm {algorithm} is not supported for {operation} with this key")]
    UnsupportedAlgorithm {
        /// The operation that was attempted.
        operation: Operation,
        /// The algorithm that was requested.
        algorithm: Algorithm,
    },

    /// Encryption failed.
    #[error("Encryption failed: {0}")]
    Encryption(String),

    /// Decryption failed (malformed ciphertext, wrong key, tampered data).
    /// Intentionally vague for security.
    #[error("Decryption failed")]
    Decryption,

    /// Decrypted bytes are not valid UTF-8 text.
    #[error("Decrypted plaintext is not valid UTF-8: {0}")]
    Encoding(#[from] std::str::Utf8Error),

    /// A serialized key or ciphertext could not be parsed.
    #[error("Invalid encoding: {0}")]
    InvalidEncoding(String),
}

/// Result type alias for this crate's operations.
pub type EciesResult<T> = Result<T, EciesError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = EciesError::KeyGeneration("backend offline".to_string());
        assert_eq!(err.to_string(), "Key generation failed: backend offline");

        let err = EciesError::DuplicateTag("app.key".to_string());
        assert_eq!(err.to_string(), "A key with tag \"app.key\" already exists");

        let err = EciesError::KeyNotFound("app.key".to_string());
        assert_eq!(err.to_string(), "No key found for tag \"app.key\"");

        let err = EciesError::Decryption;
        assert_eq!(err.to_string(), "Decryption failed");

        let err = EciesError::UnsupportedAlgorithm {
            operation: Operation::Decrypt,
            algorithm: Algorithm::EciesCofactorVariableIvX963Sha256AesGcm,
        };
        assert_eq!(
            err.to_string(),
            "Algorithm eciesEncryptionCofactorVariableIVX963SHA256AESGCM is not supported for decrypt with this key"
        );
    }

    #[test]
    fn test_encoding_error_from_utf8() {
        let bytes = [0xffu8, 0xfe];
        let err: EciesError = std::str::from_utf8(&bytes).unwrap_err().into();
        assert!(matches!(err, EciesError::Encoding(_)));
    }

    #[test]
    fn test_error_debug() {
        let err = EciesError::Decryption;
        let debug_str = format!("{err:?}");
        assert!(debug_str.contains("Decryption"));
    }
}
