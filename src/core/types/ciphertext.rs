//! `Ciphertext` - output of ECIES encryption.
//!
//! Format: `ephemeral_pk (65) || body (len(plaintext)) || tag (16)`
//!
//! Text form: standard Base64 of the raw bytes.

use core::fmt::{self, Debug, Display};

use base64::prelude::*;

use crate::core::error::EciesError;
use crate::core::operations::ecies::{EPHEMERAL_PK_SIZE, MIN_SEALED_SIZE, TAG_SIZE};

/// An ECIES ciphertext.
///
/// The bytes are opaque; segment accessors return `None` if the blob is too
/// short to contain an ephemeral key and a tag.
#[derive(Clone, PartialEq, Eq)]
pub struct Ciphertext {
    bytes: Vec<u8>,
}

impl Ciphertext {
    /// Returns the raw bytes.
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Consumes the `Ciphertext` and returns the raw bytes.
    #[must_use]
    pub fn into_bytes(self) -> Vec<u8> {
        self.bytes
    }

    /// Total length in bytes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    /// Whether the blob is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    fn is_well_sized(&self) -> bool {
        self.bytes.len() >= MIN_SEALED_SIZE
    }

    /// The ephemeral public key segment.
    #[must_use]
    pub fn ephemeral_public_key(&self) -> Option<&[u8]> {
        self.is_well_sized().then(|| &self.bytes[..EPHEMERAL_PK_SIZE])
    }

    /// The encrypted body segment.
    #[must_use]
    pub fn body(&self) -> Option<&[u8]> {
        self.is_well_sized()
            .then(|| &self.bytes[EPHEMERAL_PK_SIZE..self.bytes.len() - TAG_SIZE])
    }

    /// The authentication tag segment.
    #[must_use]
    pub fn tag(&self) -> Option<&[u8]> {
        self.is_well_sized()
            .then(|| &self.bytes[self.bytes.len() - TAG_SIZE..])
    }
}

impl From<Vec<u8>> for Ciphertext {
    fn from(bytes: Vec<u8>) -> Self {
        Self { bytes }
    }
}

impl From<&[u8]> for Ciphertext {
    fn from(bytes: &[u8]) -> Self {
        Self {
            bytes: bytes.to_vec(),
        }
    }
}

impl AsRef<[u8]> for Ciphertext {
    fn as_ref(&self) -> &[u8] {
        &self.bytes
    }
}

impl Display for Ciphertext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&BASE64_STANDARD.encode(&self.bytes))
    }
}

impl Debug for Ciphertext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Ciphertext")
            .field("len", &self.bytes.len())
            .finish()
    }
}

impl TryFrom<&str> for Ciphertext {
    type Error = EciesError;

    fn try_from(encoded: &str) -> Result<Self, Self::Error> {
        let bytes = BASE64_STANDARD
            .decode(encoded.trim())
            .map_err(|e| EciesError::InvalidEncoding(format!("Base64: {e}")))?;
        if bytes.len() < MIN_SEALED_SIZE {
            return Err(EciesError::InvalidEncoding(format!(
                "ciphertext must be at least {MIN_SEALED_SIZE} bytes, got {}",
                bytes.len()
            )));
        }
        Ok(Self { bytes })
    }
}

impl TryFrom<String> for Ciphertext {
    type Error = EciesError;

    fn try_from(encoded: String) -> Result<Self, Self::Error> {
        Self::try_from(encoded.as_str())
    }
}
