//! Platform keyring key store.
//!
//! Stores the P-256 scalar in the platform's native keyring through the
//! `keyring` crate:
//!   - macOS / iOS: Security.framework Keychain
//!   - Windows: Credential Manager
//!   - Linux: D-Bus Secret Service (GNOME Keyring / KDE Wallet)
//!
//! The keyring entry is addressed by `(service, tag)` and holds one record:
//!
//! ```text
//! version (1) || usage bits (1) || accessibility (1) || scalar (32)
//! ```
//!
//! A key loaded back keeps the usage set and accessibility it was created
//! with.

use zeroize::Zeroizing;

use super::KeyStore;
use crate::core::algorithm::{Accessibility, KeyUsage};
use crate::core::error::{EciesError, EciesResult};
use crate::core::types::{KeyAttributes, PrivateKeyHandle};

/// Default service name used to identify entries in the platform keyring.
const DEFAULT_SERVICE: &str = "secure-ecies";

/// Length of a stored P-256 scalar.
const SCALAR_LEN: usize = 32;

/// Current record format.
const RECORD_VERSION: u8 = 1;

/// Version, usage and accessibility bytes.
const RECORD_HEADER_LEN: usize = 3;

/// Length of a stored record.
const RECORD_LEN: usize = RECORD_HEADER_LEN + SCALAR_LEN;

/// Serializes a key and its attributes into a keyring record.
fn encode_record(handle: &PrivateKeyHandle) -> Zeroizing<Vec<u8>> {
    let attributes = handle.attributes();
    let scalar = handle.scalar_bytes();

    let mut record = Zeroizing::new(Vec::with_capacity(RECORD_LEN));
    record.push(RECORD_VERSION);
    record.push(attributes.usage().bits());
    record.push(attributes.accessibility().to_byte());
    record.extend_from_slice(&scalar);
    record
}

/// Rebuilds the key stored under `tag` from its keyring record.
fn decode_record(tag: &str, record: &[u8]) -> EciesResult<PrivateKeyHandle> {
    if record.len() != RECORD_LEN {
        return Err(EciesError::KeyGeneration(format!(
            "keyring entry has invalid length: {} (expected {RECORD_LEN})",
            record.len()
        )));
    }
    let (header, scalar) = record.split_at(RECORD_HEADER_LEN);
    if header[0] != RECORD_VERSION {
        return Err(EciesError::KeyGeneration(format!(
            "unsupported keyring record version {}",
            header[0]
        )));
    }
    let accessibility = Accessibility::from_byte(header[2]).ok_or_else(|| {
        EciesError::KeyGeneration(format!("unknown accessibility code {}", header[2]))
    })?;

    // Re-validated, so a tampered entry cannot widen the key's capabilities
    let attributes = KeyAttributes::builder(tag)
        .usage(KeyUsage::from_bits_truncate(header[1]))
        .accessibility(accessibility)
        .build()?;
    PrivateKeyHandle::from_scalar_bytes(scalar, attributes)
}

/// [`KeyStore`] backed by the platform keyring.
#[derive(Debug, Clone)]
pub struct KeyringStore {
    service: String,
}

impl KeyringStore {
    /// Creates a store under the default service name.
    #[must_use]
    pub fn new() -> Self {
        Self::with_service(DEFAULT_SERVICE)
    }

    /// Creates a store under a custom service name (useful for isolation).
    #[must_use]
    pub fn with_service(service: &str) -> Self {
        Self {
            service: service.to_string(),
        }
    }

    fn entry(&self, tag: &str) -> EciesResult<keyring::Entry> {
        keyring::Entry::new(&self.service, tag).map_err(|e| {
            EciesError::KeyGeneration(format!("failed to create keyring entry: {e}"))
        })
    }

    fn load(&self, tag: &str) -> EciesResult<Option<Zeroizing<Vec<u8>>>> {
        match self.entry(tag)?.get_secret() {
            Ok(secret) => Ok(Some(Zeroizing::new(secret))),
            Err(keyring::Error::NoEntry) => Ok(None),
            Err(e) => Err(EciesError::KeyGeneration(format!(
                "failed to read keyring entry: {e}"
            ))),
        }
    }
}

impl Default for KeyringStore {
    fn default() -> Self {
        Self::new()
    }
}

impl KeyStore for KeyringStore {
    fn create_private_key(&self, attributes: &KeyAttributes) -> EciesResult<PrivateKeyHandle> {
        let tag = attributes.tag();
        if self.load(tag)?.is_some() {
            tracing::warn!(tag, "Refusing to overwrite existing keyring entry");
            return Err(EciesError::DuplicateTag(tag.to_string()));
        }

        let handle = PrivateKeyHandle::generate(attributes.clone());
        if attributes.is_permanent() {
            let record = encode_record(&handle);
            self.entry(tag)?.set_secret(&record).map_err(|e| {
                EciesError::KeyGeneration(format!("failed to store private key: {e}"))
            })?;
            tracing::info!(tag, service = %self.service, "Private key stored in platform keyring");
        }
        Ok(handle)
    }

    fn private_key(&self, tag: &str) -> EciesResult<PrivateKeyHandle> {
        let record = self
            .load(tag)?
            .ok_or_else(|| EciesError::KeyNotFound(tag.to_string()))?;
        let handle = decode_record(tag, &record)?;
        tracing::debug!(tag, "Retrieved private key from platform keyring");
        Ok(handle)
    }

    fn delete_private_key(&self, tag: &str) -> EciesResult<()> {
        match self.entry(tag)?.delete_credential() {
            Ok(()) => {
                tracing::warn!(tag, "Private key deleted from platform keyring");
                Ok(())
            }
            Err(keyring::Error::NoEntry) => {
                tracing::debug!(tag, "No private key to delete");
                Ok(())
            }
            Err(e) => Err(EciesError::KeyGeneration(format!(
                "failed to delete keyring entry: {e}"
            ))),
        }
    }

    fn contains(&self, tag: &str) -> EciesResult<bool> {
        Ok(self.load(tag)?.is_some())
    }
}
