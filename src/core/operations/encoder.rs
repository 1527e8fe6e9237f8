//! Public key derivation and X.509 SubjectPublicKeyInfo encoding.
//!
//! The encoding is a fixed 26-byte DER header followed by the 65-byte
//! uncompressed point:
//!
//! ```text
//! 30 59                            SEQUENCE (89 bytes)
//!    30 13                         SEQUENCE (19 bytes)
//!       06 07 2A8648CE3D0201       OID 1.2.840.10045.2.1 (id-ecPublicKey)
//!       06 08 2A8648CE3D030107     OID 1.2.840.10045.3.1.7 (prime256v1)
//!    03 42 00                      BIT STRING (66 bytes, 0 unused bits)
//!       04 || X || Y
//! ```

use crate::core::algorithm::Curve;
use crate::core::error::{EciesError, EciesResult};
use crate::core::types::{EncodedPublicKey, PrivateKeyHandle, PublicKey};

/// Length of the SPKI header for a P-256 key.
pub const SPKI_P256_HEADER_SIZE: usize = 26;

/// DER header preceding the raw point in a P-256 SubjectPublicKeyInfo.
pub const SPKI_P256_HEADER: [u8; SPKI_P256_HEADER_SIZE] = [
    0x30, 0x59, // SEQUENCE
    0x30, 0x13, // SEQUENCE (AlgorithmIdentifier)
    0x06, 0x07, 0x2a, 0x86, 0x48, 0xce, 0x3d, 0x02, 0x01, // id-ecPublicKey
    0x06, 0x08, 0x2a, 0x86, 0x48, 0xce, 0x3d, 0x03, 0x01, 0x07, // prime256v1
    0x03, 0x42, 0x00, // BIT STRING, no unused bits
];

/// Total length of an encoded P-256 SubjectPublicKeyInfo.
pub const SPKI_P256_SIZE: usize = SPKI_P256_HEADER_SIZE + 65;

/// Derives the public key of `handle`.
///
/// The public key may encrypt if the private key may decrypt or agree, and
/// may verify if the private key may sign.
///
/// # Errors
///
/// Returns `EciesError::Derivation` if the handle's curve is not P-256 or the
/// public point cannot be computed.
pub fn derive_public_key(handle: &PrivateKeyHandle) -> EciesResult<PublicKey> {
    if handle.curve() != Curve::P256 {
        return Err(EciesError::Derivation(format!(
            "unsupported curve {}",
            handle.curve()
        )));
    }
    let point = handle.secret_key().public_key();
    PublicKey::from_p256(&point, handle.usage().public_counterpart())
}

/// Encodes `public_key` as a DER SubjectPublicKeyInfo.
#[must_use]
pub fn encode_x509(public_key: &PublicKey) -> EncodedPublicKey {
    let mut der = [0u8; SPKI_P256_SIZE];
    der[..SPKI_P256_HEADER_SIZE].copy_from_slice(&SPKI_P256_HEADER);
    der[SPKI_P256_HEADER_SIZE..].copy_from_slice(public_key.as_bytes());
    EncodedPublicKey::from_der_unchecked(der)
}
