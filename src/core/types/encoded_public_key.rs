//! `EncodedPublicKey` - DER SubjectPublicKeyInfo for a P-256 key.
//!
//! Presentation forms:
//! - DER: 91 raw bytes
//! - Base64: standard alphabet, padded
//! - PEM: RFC 7468 `PUBLIC KEY` document, body wrapped at 64 columns
//! - single-line PEM: the same framing with the body on one line

use core::fmt::{self, Debug, Display};

use base64::prelude::*;
use p256::pkcs8::der::Document;
use p256::pkcs8::LineEnding;

use crate::core::error::{EciesError, EciesResult};
use crate::core::operations::encoder::{SPKI_P256_HEADER, SPKI_P256_HEADER_SIZE, SPKI_P256_SIZE};
use crate::core::types::PublicKey;

/// PEM header line.
pub const PEM_HEADER: &str = "-----BEGIN PUBLIC KEY-----";

/// PEM footer line.
pub const PEM_FOOTER: &str = "-----END PUBLIC KEY-----";

/// RFC 7468 label of a SubjectPublicKeyInfo document.
const PEM_LABEL: &str = "PUBLIC KEY";

/// A P-256 public key in DER SubjectPublicKeyInfo form.
///
/// # Example
///
/// ```rust
/// use secure_ecies::core::operations::encoder::encode_x509;
/// use secure_ecies::core::types::{EncodedPublicKey, KeyAttributes};
/// use secure_ecies::keystore::{InMemoryKeyStore, KeyStore};
///
/// let store = InMemoryKeyStore::new();
/// let attributes = KeyAttributes::new("doc.example").expect("valid attributes");
/// let handle = store.create_private_key(&attributes).expect("key created");
///
/// let encoded = encode_x509(&handle.public_key().expect("public key"));
/// assert_eq!(encoded.as_bytes().len(), 91);
///
/// let pem = encoded.to_pem().expect("PEM encodes");
/// let parsed = EncodedPublicKey::from_pem(&pem).expect("PEM parses");
/// assert_eq!(parsed, encoded);
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct EncodedPublicKey {
    der: [u8; SPKI_P256_SIZE],
}

impl EncodedPublicKey {
    pub(crate) const fn from_der_unchecked(der: [u8; SPKI_P256_SIZE]) -> Self {
        Self { der }
    }

    /// Parses DER bytes, checking the header bit-exactly and the point.
    ///
    /// # Errors
    ///
    /// Returns `EciesError::InvalidEncoding` if the length, header or point
    /// is wrong.
    pub fn from_der(der: &[u8]) -> EciesResult<Self> {
        if der.len() != SPKI_P256_SIZE {
            return Err(EciesError::InvalidEncoding(format!(
                "SubjectPublicKeyInfo must be {SPKI_P256_SIZE} bytes, got {}",
                der.len()
            )));
        }
        if der[..SPKI_P256_HEADER_SIZE] != SPKI_P256_HEADER {
            return Err(EciesError::InvalidEncoding(
                "not a P-256 SubjectPublicKeyInfo".to_string(),
            ));
        }
        // Validates the point
        PublicKey::from_sec1_bytes(&der[SPKI_P256_HEADER_SIZE..])?;

        let mut out = [0u8; SPKI_P256_SIZE];
        out.copy_from_slice(der);
        Ok(Self { der: out })
    }

    /// Parses the Base64 form.
    ///
    /// # Errors
    ///
    /// Returns `EciesError::InvalidEncoding` on bad Base64 or bad DER.
    pub fn from_base64(encoded: &str) -> EciesResult<Self> {
        let der = BASE64_STANDARD
            .decode(encoded.trim())
            .map_err(|e| EciesError::InvalidEncoding(format!("Base64: {e}")))?;
        Self::from_der(&der)
    }

    /// Parses the PEM form, wrapped or single-line.
    ///
    /// # Errors
    ///
    /// Returns `EciesError::InvalidEncoding` if the framing, Base64 or DER is
    /// wrong.
    pub fn from_pem(pem: &str) -> EciesResult<Self> {
        match Document::from_pem(pem) {
            Ok((label, document)) => {
                if label != PEM_LABEL {
                    return Err(EciesError::InvalidEncoding(format!(
                        "unexpected PEM label {label:?}"
                    )));
                }
                Self::from_der(document.as_bytes())
            }
            // RFC 7468 caps body lines at 64 columns
            Err(e) => Self::from_single_line_pem(pem)
                .map_err(|_| EciesError::InvalidEncoding(format!("PEM: {e}"))),
        }
    }

    fn from_single_line_pem(pem: &str) -> EciesResult<Self> {
        let mut lines = pem.trim().lines().map(str::trim);
        match (lines.next(), lines.next(), lines.next(), lines.next()) {
            (Some(PEM_HEADER), Some(body), Some(PEM_FOOTER), None) => Self::from_base64(body),
            _ => Err(EciesError::InvalidEncoding(
                "not a single-line PEM public key".to_string(),
            )),
        }
    }

    /// Returns the DER bytes.
    #[must_use]
    pub const fn as_bytes(&self) -> &[u8; SPKI_P256_SIZE] {
        &self.der
    }

    /// Returns the 26-byte header.
    #[must_use]
    pub fn header(&self) -> &[u8] {
        &self.der[..SPKI_P256_HEADER_SIZE]
    }

    /// Returns the 65-byte raw point.
    #[must_use]
    pub fn raw_point(&self) -> &[u8] {
        &self.der[SPKI_P256_HEADER_SIZE..]
    }

    /// Returns the public key carried by this encoding.
    ///
    /// # Errors
    ///
    /// Returns `EciesError::InvalidEncoding` if the point is invalid.
    pub fn public_key(&self) -> EciesResult<PublicKey> {
        PublicKey::from_sec1_bytes(self.raw_point())
    }

    /// Standard Base64 of the DER bytes.
    #[must_use]
    pub fn to_base64(&self) -> String {
        BASE64_STANDARD.encode(self.der)
    }

    /// RFC 7468 PEM with the body wrapped at 64 columns and LF line endings.
    ///
    /// # Errors
    ///
    /// Returns `EciesError::InvalidEncoding` if the PEM encoder rejects the
    /// DER bytes.
    pub fn to_pem(&self) -> EciesResult<String> {
        Document::try_from(self.der.as_slice())
            .and_then(|document| document.to_pem(PEM_LABEL, LineEnding::LF))
            .map_err(|e| EciesError::InvalidEncoding(format!("PEM: {e}")))
    }

    /// PEM with the whole Base64 body on one line.
    #[must_use]
    pub fn to_pem_single_line(&self) -> String {
        format!("{PEM_HEADER}\n{}\n{PEM_FOOTER}", self.to_base64())
    }
}

impl AsRef<[u8]> for EncodedPublicKey {
    fn as_ref(&self) -> &[u8] {
        &self.der
    }
}

impl Display for EncodedPublicKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_base64())
    }
}

impl Debug for EncodedPublicKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EncodedPublicKey")
            .field("format", &"spki-der")
            .field("len", &self.der.len())
            .finish()
    }
}

impl TryFrom<&[u8]> for EncodedPublicKey {
    type Error = EciesError;

    fn try_from(der: &[u8]) -> Result<Self, Self::Error> {
        Self::from_der(der)
    }
}

impl TryFrom<&str> for EncodedPublicKey {
    type Error = EciesError;

    fn try_from(encoded: &str) -> Result<Self, Self::Error> {
        if encoded.trim_start().starts_with(PEM_HEADER) {
            Self::from_pem(encoded)
        } else {
            Self::from_base64(encoded)
        }
    }
}
