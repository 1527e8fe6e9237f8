//! Protected storage for non-extractable private keys.
//!
//! A [`KeyStore`] creates P-256 private keys and retains them under an
//! application tag. Callers only ever receive a [`PrivateKeyHandle`]; no
//! store operation returns private key bytes.
//!
//! Backends:
//!   - [`InMemoryKeyStore`]: process-local, always available
//!   - [`KeyringStore`]: platform keyring (feature `os-keyring`)
//!
//! Neither backend is a hardware enclave. Both keep the non-extractable
//! contract through the API surface only.

mod memory;

#[cfg(feature = "os-keyring")]
mod keyring_store;

pub use memory::InMemoryKeyStore;

#[cfg(feature = "os-keyring")]
pub use keyring_store::KeyringStore;

use crate::core::error::{EciesError, EciesResult};
use crate::core::types::{KeyAttributes, PrivateKeyHandle};

/// Abstraction over protected private-key storage, enabling platform-specific
/// backends and in-memory stores for testing.
pub trait KeyStore: Send + Sync {
    /// Creates a new private key described by `attributes`.
    ///
    /// Permanent keys are retained under `attributes.tag()`; non-permanent
    /// keys are returned without being recorded.
    ///
    /// # Errors
    ///
    /// - `EciesError::DuplicateTag` if a key is already stored under the tag
    /// - `EciesError::KeyGeneration` if the backend is unavailable or rejects
    ///   the key
    fn create_private_key(&self, attributes: &KeyAttributes) -> EciesResult<PrivateKeyHandle>;

    /// Looks up the key retained under `tag`.
    ///
    /// # Errors
    ///
    /// - `EciesError::KeyNotFound` if no key is stored under the tag
    /// - `EciesError::KeyGeneration` if the backend is unavailable
    fn private_key(&self, tag: &str) -> EciesResult<PrivateKeyHandle>;

    /// Removes the key retained under `tag`. Removing an absent key succeeds.
    ///
    /// # Errors
    ///
    /// Returns `EciesError::KeyGeneration` if the backend is unavailable.
    fn delete_private_key(&self, tag: &str) -> EciesResult<()>;

    /// Whether a key is retained under `tag`.
    ///
    /// # Errors
    ///
    /// Returns `EciesError::KeyGeneration` if the backend is unavailable.
    fn contains(&self, tag: &str) -> EciesResult<bool>;
}

/// Returns the key retained under `attributes.tag()`, creating it on first use.
///
/// # Errors
///
/// Propagates lookup and creation failures other than a missing key.
pub fn get_or_create_private_key(
    store: &dyn KeyStore,
    attributes: &KeyAttributes,
) -> EciesResult<PrivateKeyHandle> {
    match store.private_key(attributes.tag()) {
        Ok(handle) => {
            tracing::debug!(tag = attributes.tag(), "Reusing stored private key");
            Ok(handle)
        }
        Err(EciesError::KeyNotFound(_)) => {
            tracing::info!(tag = attributes.tag(), "No stored key found, creating one");
            store.create_private_key(attributes)
        }
        Err(e) => Err(e),
    }
}
