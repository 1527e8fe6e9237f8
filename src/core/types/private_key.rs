//! `PrivateKeyHandle` - opaque reference to a non-extractable private key.
//!
//! A handle is only produced by a [`KeyStore`](crate::keystore::KeyStore). It
//! can derive its public key and decrypt, and offers no way to read the
//! private scalar.

use core::fmt::{self, Debug};
use std::sync::Arc;

use p256::SecretKey;
use rand_core::OsRng;
use subtle::ConstantTimeEq;
use zeroize::{Zeroize, Zeroizing};

use crate::core::algorithm::{Algorithm, Curve, KeyUsage, Operation};
use crate::core::error::{EciesError, EciesResult};
use crate::core::operations::encoder;
use crate::core::types::{KeyAttributes, PublicKey};

struct KeyMaterial {
    // SecretKey zeroizes itself on drop
    secret: SecretKey,
    attributes: KeyAttributes,
}

/// Opaque handle to a P-256 private key held by a key store.
///
/// Cloning a handle shares the same key.
///
/// # Security
///
/// - No method returns the private scalar
/// - Debug output redacts key material
/// - Equality comparison uses constant-time comparison
#[derive(Clone)]
pub struct PrivateKeyHandle {
    inner: Arc<KeyMaterial>,
}

impl PrivateKeyHandle {
    /// Generates a fresh random key for `attributes`.
    pub(crate) fn generate(attributes: KeyAttributes) -> Self {
        Self::from_secret(SecretKey::random(&mut OsRng), attributes)
    }

    pub(crate) fn from_secret(secret: SecretKey, attributes: KeyAttributes) -> Self {
        Self {
            inner: Arc::new(KeyMaterial { secret, attributes }),
        }
    }

    /// Restores a handle from a stored scalar.
    #[cfg_attr(not(feature = "os-keyring"), allow(dead_code))]
    pub(crate) fn from_scalar_bytes(bytes: &[u8], attributes: KeyAttributes) -> EciesResult<Self> {
        let secret = SecretKey::from_slice(bytes)
            .map_err(|_| EciesError::KeyGeneration("stored key material is invalid".to_string()))?;
        Ok(Self::from_secret(secret, attributes))
    }

    /// Copies the scalar out for a persistent backend. Crate-internal only.
    #[cfg_attr(not(feature = "os-keyring"), allow(dead_code))]
    pub(crate) fn scalar_bytes(&self) -> Zeroizing<Vec<u8>> {
        let mut bytes = self.inner.secret.to_bytes();
        let out = Zeroizing::new(bytes.to_vec());
        bytes.as_mut_slice().zeroize();
        out
    }

    pub(crate) fn secret_key(&self) -> &SecretKey {
        &self.inner.secret
    }

    /// Application tag the key was created under.
    #[must_use]
    pub fn tag(&self) -> &str {
        self.inner.attributes.tag()
    }

    /// Attributes the key was created with.
    #[must_use]
    pub fn attributes(&self) -> &KeyAttributes {
        &self.inner.attributes
    }

    /// Curve of the key.
    #[must_use]
    pub fn curve(&self) -> Curve {
        self.inner.attributes.curve()
    }

    /// Permitted usages.
    #[must_use]
    pub fn usage(&self) -> KeyUsage {
        self.inner.attributes.usage()
    }

    /// Always `true`: the private scalar cannot be read through this API.
    #[must_use]
    pub const fn is_non_extractable(&self) -> bool {
        true
    }

    /// Whether this key can run `operation` with `algorithm`.
    #[must_use]
    pub fn is_algorithm_supported(&self, operation: Operation, algorithm: Algorithm) -> bool {
        operation == Operation::Decrypt && self.usage().permits(self.curve(), operation, algorithm)
    }

    /// Derives the public key. See [`encoder::derive_public_key`].
    ///
    /// # Errors
    ///
    /// Returns `EciesError::Derivation` if the public point cannot be computed.
    pub fn public_key(&self) -> EciesResult<PublicKey> {
        encoder::derive_public_key(self)
    }
}

// =============================================================================
// Debug (security: don't expose key material)
// =============================================================================

impl Debug for PrivateKeyHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PrivateKeyHandle")
            .field("tag", &self.tag())
            .field("curve", &self.curve())
            .field("key", &"[REDACTED]")
            .finish()
    }
}

// =============================================================================
// PartialEq (constant-time comparison)
// =============================================================================

impl PartialEq for PrivateKeyHandle {
    fn eq(&self, other: &Self) -> bool {
        if Arc::ptr_eq(&self.inner, &other.inner) {
            return true;
        }
        let mut a = self.inner.secret.to_bytes();
        let mut b = other.inner.secret.to_bytes();
        let equal: bool = a.as_slice().ct_eq(b.as_slice()).into();
        a.as_mut_slice().zeroize();
        b.as_mut_slice().zeroize();
        equal && self.tag() == other.tag()
    }
}

impl Eq for PrivateKeyHandle {}
