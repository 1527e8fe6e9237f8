//! In-memory key store.
//!
//! Keys live in process memory for the lifetime of the store. The map is
//! guarded by a mutex, so create-under-tag is atomic.

use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard};

use super::KeyStore;
use crate::core::error::{EciesError, EciesResult};
use crate::core::types::{KeyAttributes, PrivateKeyHandle};

/// Process-local [`KeyStore`].
#[derive(Debug, Default)]
pub struct InMemoryKeyStore {
    keys: Mutex<HashMap<String, PrivateKeyHandle>>,
}

impl InMemoryKeyStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of retained keys.
    ///
    /// # Errors
    ///
    /// Returns `EciesError::KeyGeneration` if the store lock is poisoned.
    pub fn len(&self) -> EciesResult<usize> {
        Ok(self.lock()?.len())
    }

    /// Whether the store holds no keys.
    ///
    /// # Errors
    ///
    /// Returns `EciesError::KeyGeneration` if the store lock is poisoned.
    pub fn is_empty(&self) -> EciesResult<bool> {
        Ok(self.lock()?.is_empty())
    }

    fn lock(&self) -> EciesResult<MutexGuard<'_, HashMap<String, PrivateKeyHandle>>> {
        self.keys
            .lock()
            .map_err(|_| EciesError::KeyGeneration("key store lock poisoned".to_string()))
    }
}

impl KeyStore for InMemoryKeyStore {
    fn create_private_key(&self, attributes: &KeyAttributes) -> EciesResult<PrivateKeyHandle> {
        let mut keys = self.lock()?;
        if keys.contains_key(attributes.tag()) {
            tracing::warn!(tag = attributes.tag(), "Refusing to overwrite existing key");
            return Err(EciesError::DuplicateTag(attributes.tag().to_string()));
        }

        let handle = PrivateKeyHandle::generate(attributes.clone());
        if attributes.is_permanent() {
            keys.insert(attributes.tag().to_string(), handle.clone());
            tracing::info!(
                tag = attributes.tag(),
                curve = %attributes.curve(),
                "Private key created and stored"
            );
        } else {
            tracing::info!(tag = attributes.tag(), "Transient private key created");
        }
        Ok(handle)
    }

    fn private_key(&self, tag: &str) -> EciesResult<PrivateKeyHandle> {
        self.lock()?
            .get(tag)
            .cloned()
            .ok_or_else(|| EciesError::KeyNotFound(tag.to_string()))
    }

    fn delete_private_key(&self, tag: &str) -> EciesResult<()> {
        if self.lock()?.remove(tag).is_some() {
            tracing::warn!(tag, "Private key deleted");
        } else {
            tracing::debug!(tag, "No private key to delete");
        }
        Ok(())
    }

    fn contains(&self, tag: &str) -> EciesResult<bool> {
        Ok(self.lock()?.contains_key(tag))
    }
}
