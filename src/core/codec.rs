//! `EciesCodec` - encrypt to a public key, decrypt with a key handle.
//!
//! Both directions check the key's capability for the configured algorithm
//! before any cryptographic work and fail with
//! [`EciesError::UnsupportedAlgorithm`] if it is missing.

use crate::core::algorithm::{Algorithm, Operation};
use crate::core::error::{EciesError, EciesResult};
use crate::core::operations::ecies::{open_p256, seal_p256};
use crate::core::types::{Ciphertext, PrivateKeyHandle, PublicKey};

/// ECIES encryptor/decryptor for one algorithm.
///
/// # Example
///
/// ```rust
/// use secure_ecies::core::codec::EciesCodec;
/// use secure_ecies::core::types::KeyAttributes;
/// use secure_ecies::keystore::{InMemoryKeyStore, KeyStore};
///
/// let store = InMemoryKeyStore::new();
/// let handle = store
///     .create_private_key(&KeyAttributes::new("codec.example").expect("valid attributes"))
///     .expect("key created");
/// let public_key = handle.public_key().expect("public key");
///
/// let codec = EciesCodec::default();
/// let ciphertext = codec.encrypt(b"hello", &public_key).expect("encrypt");
/// let plaintext = codec.decrypt(&ciphertext, &handle).expect("decrypt");
/// assert_eq!(plaintext, "hello");
/// ```
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct EciesCodec {
    algorithm: Algorithm,
}

impl EciesCodec {
    /// Creates a codec for `algorithm`.
    #[must_use]
    pub const fn new(algorithm: Algorithm) -> Self {
        Self { algorithm }
    }

    /// The configured algorithm.
    #[must_use]
    pub const fn algorithm(&self) -> Algorithm {
        self.algorithm
    }

    /// Encrypts `plaintext` for the holder of `public_key`'s private key.
    ///
    /// # Errors
    ///
    /// - `EciesError::UnsupportedAlgorithm` if the key cannot encrypt with
    ///   this algorithm
    /// - `EciesError::Encryption` if any cryptographic step fails
    pub fn encrypt(&self, plaintext: &[u8], public_key: &PublicKey) -> EciesResult<Ciphertext> {
        self.check(
            Operation::Encrypt,
            public_key.is_algorithm_supported(Operation::Encrypt, self.algorithm),
        )?;

        let recipient = public_key
            .to_p256()
            .map_err(|e| EciesError::Encryption(e.to_string()))?;
        let sealed = seal_p256(plaintext, &recipient, self.algorithm)?;
        Ok(Ciphertext::from(sealed))
    }

    /// Decrypts `ciphertext` and returns the raw plaintext bytes.
    ///
    /// # Errors
    ///
    /// - `EciesError::UnsupportedAlgorithm` if the key cannot decrypt with
    ///   this algorithm
    /// - `EciesError::Decryption` for any other failure
    pub fn decrypt_bytes(
        &self,
        ciphertext: impl AsRef<[u8]>,
        private_key: &PrivateKeyHandle,
    ) -> EciesResult<Vec<u8>> {
        self.check(
            Operation::Decrypt,
            private_key.is_algorithm_supported(Operation::Decrypt, self.algorithm),
        )?;

        open_p256(ciphertext.as_ref(), private_key.secret_key(), self.algorithm)
    }

    /// Decrypts `ciphertext` into UTF-8 text.
    ///
    /// # Errors
    ///
    /// As [`EciesCodec::decrypt_bytes`], plus `EciesError::Encoding` if the
    /// plaintext is not valid UTF-8.
    pub fn decrypt(
        &self,
        ciphertext: impl AsRef<[u8]>,
        private_key: &PrivateKeyHandle,
    ) -> EciesResult<String> {
        let bytes = self.decrypt_bytes(ciphertext, private_key)?;
        String::from_utf8(bytes).map_err(|e| EciesError::Encoding(e.utf8_error()))
    }

    fn check(&self, operation: Operation, supported: bool) -> EciesResult<()> {
        if supported {
            Ok(())
        } else {
            Err(EciesError::UnsupportedAlgorithm {
                operation,
                algorithm: self.algorithm,
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::algorithm::KeyUsage;
    use crate::core::types::KeyAttributes;

    fn handle(usage: KeyUsage) -> EciesResult<PrivateKeyHandle> {
        let attributes = KeyAttributes::builder("codec.test").usage(usage).build()?;
        Ok(PrivateKeyHandle::generate(attributes))
    }

    #[test]
    fn test_roundtrip() -> EciesResult<()> {
        let key = handle(KeyUsage::PRIVATE_DEFAULT)?;
        let public_key = key.public_key()?;
        let codec = EciesCodec::default();

        let ciphertext = codec.encrypt("Bu gizli bir mesajdır!".as_bytes(), &public_key)?;
        assert_eq!(codec.decrypt(&ciphertext, &key)?, "Bu gizli bir mesajdır!");
        Ok(())
    }

    #[test]
    fn test_encrypt_requires_encrypt_usage() -> EciesResult<()> {
        let public_key = handle(KeyUsage::SIGN)?.public_key()?;
        let result = EciesCodec::default().encrypt(b"x", &public_key);
        assert!(matches!(
            result,
            Err(EciesError::UnsupportedAlgorithm {
                operation: Operation::Encrypt,
                ..
            })
        ));
        Ok(())
    }

    #[test]
    fn test_decrypt_requires_decrypt_usage() -> EciesResult<()> {
        // Key agreement alone lets the public side encrypt but not decrypt
        let key = handle(KeyUsage::KEY_AGREEMENT)?;
        let codec = EciesCodec::default();
        let ciphertext = codec.encrypt(b"x", &key.public_key()?)?;

        let result = codec.decrypt(&ciphertext, &key);
        assert!(matches!(
            result,
            Err(EciesError::UnsupportedAlgorithm {
                operation: Operation::Decrypt,
                ..
            })
        ));
        Ok(())
    }

    #[test]
    fn test_gate_runs_before_parsing() -> EciesResult<()> {
        // Garbage input still yields the capability error, not Decryption
        let key = handle(KeyUsage::SIGN)?;
        let result = EciesCodec::default().decrypt_bytes([0u8; 3], &key);
        assert!(matches!(result, Err(EciesError::UnsupportedAlgorithm { .. })));
        Ok(())
    }

    #[test]
    fn test_non_utf8_plaintext() -> EciesResult<()> {
        let key = handle(KeyUsage::PRIVATE_DEFAULT)?;
        let codec = EciesCodec::default();
        let ciphertext = codec.encrypt(&[0xff, 0xfe, 0xfd], &key.public_key()?)?;

        assert_eq!(codec.decrypt_bytes(&ciphertext, &key)?, vec![0xff, 0xfe, 0xfd]);
        assert!(matches!(
            codec.decrypt(&ciphertext, &key),
            Err(EciesError::Encoding(_))
        ));
        Ok(())
    }

    #[test]
    fn test_algorithm_mismatch_fails() -> EciesResult<()> {
        let key = handle(KeyUsage::PRIVATE_DEFAULT)?;
        let ciphertext = EciesCodec::new(Algorithm::EciesCofactorX963Sha256AesGcm)
            .encrypt(b"x", &key.public_key()?)?;

        let result = EciesCodec::default().decrypt(&ciphertext, &key);
        assert!(matches!(result, Err(EciesError::Decryption)));
        Ok(())
    }
}
