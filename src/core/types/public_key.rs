//! `PublicKey` - uncompressed P-256 public point.
//!
//! Format: `0x04 || X (32 bytes) || Y (32 bytes)`

use core::fmt::{self, Debug};

use p256::elliptic_curve::sec1::ToEncodedPoint;

use crate::core::algorithm::{Algorithm, Curve, KeyUsage, Operation};
use crate::core::error::{EciesError, EciesResult};

/// Size of an uncompressed P-256 public point.
pub const PUBLIC_POINT_SIZE: usize = 65;

/// Uncompressed SEC1 point prefix.
const UNCOMPRESSED_TAG: u8 = 0x04;

/// A P-256 public key with the usages it may be used for.
#[derive(Clone)]
pub struct PublicKey {
    point: [u8; PUBLIC_POINT_SIZE],
    usage: KeyUsage,
}

impl PublicKey {
    /// Builds a public key from a validated `p256` key.
    pub(crate) fn from_p256(key: &p256::PublicKey, usage: KeyUsage) -> EciesResult<Self> {
        let encoded = key.to_encoded_point(false);
        let point: [u8; PUBLIC_POINT_SIZE] = encoded
            .as_bytes()
            .try_into()
            .map_err(|_| EciesError::Derivation("unexpected public point length".to_string()))?;
        Ok(Self { point, usage })
    }

    /// Parses an uncompressed SEC1 point.
    ///
    /// The key gets encrypt and verify usage.
    ///
    /// # Errors
    ///
    /// Returns `EciesError::InvalidEncoding` if the bytes are not a 65-byte
    /// uncompressed point on P-256.
    pub fn from_sec1_bytes(bytes: &[u8]) -> EciesResult<Self> {
        if bytes.len() != PUBLIC_POINT_SIZE || bytes[0] != UNCOMPRESSED_TAG {
            return Err(EciesError::InvalidEncoding(
                "expected a 65-byte uncompressed P-256 point".to_string(),
            ));
        }
        let key = p256::PublicKey::from_sec1_bytes(bytes)
            .map_err(|_| EciesError::InvalidEncoding("point is not on P-256".to_string()))?;
        let mut point = [0u8; PUBLIC_POINT_SIZE];
        point.copy_from_slice(key.to_encoded_point(false).as_bytes());
        Ok(Self {
            point,
            usage: KeyUsage::PUBLIC_DEFAULT,
        })
    }

    /// Returns the raw point bytes.
    #[must_use]
    pub const fn as_bytes(&self) -> &[u8; PUBLIC_POINT_SIZE] {
        &self.point
    }

    /// X coordinate.
    #[must_use]
    pub fn x(&self) -> &[u8] {
        &self.point[1..33]
    }

    /// Y coordinate.
    #[must_use]
    pub fn y(&self) -> &[u8] {
        &self.point[33..]
    }

    /// Curve of the key.
    #[must_use]
    pub const fn curve(&self) -> Curve {
        Curve::P256
    }

    /// Permitted usages.
    #[must_use]
    pub const fn usage(&self) -> KeyUsage {
        self.usage
    }

    /// Whether this key can run `operation` with `algorithm`.
    #[must_use]
    pub fn is_algorithm_supported(&self, operation: Operation, algorithm: Algorithm) -> bool {
        operation == Operation::Encrypt && self.usage.permits(self.curve(), operation, algorithm)
    }

    pub(crate) fn to_p256(&self) -> EciesResult<p256::PublicKey> {
        p256::PublicKey::from_sec1_bytes(&self.point)
            .map_err(|_| EciesError::InvalidEncoding("point is not on P-256".to_string()))
    }
}

impl AsRef<[u8]> for PublicKey {
    fn as_ref(&self) -> &[u8] {
        &self.point
    }
}

impl Debug for PublicKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PublicKey")
            .field("curve", &self.curve())
            .field("key_len", &self.point.len())
            .field("usage", &self.usage)
            .finish()
    }
}

impl PartialEq for PublicKey {
    fn eq(&self, other: &Self) -> bool {
        // Public keys don't need constant-time comparison
        self.point == other.point
    }
}

impl Eq for PublicKey {}

#[cfg(test)]
mod tests {
    use super::*;

    // P-256 base point G
    const GENERATOR: [u8; PUBLIC_POINT_SIZE] = [
        0x04, 0x6b, 0x17, 0xd1, 0xf2, 0xe1, 0x2c, 0x42, 0x47, 0xf8, 0xbc, 0xe6, 0xe5, 0x63, 0xa4,
        0x40, 0xf2, 0x77, 0x03, 0x7d, 0x81, 0x2d, 0xeb, 0x33, 0xa0, 0xf4, 0xa1, 0x39, 0x45, 0xd8,
        0x98, 0xc2, 0x96, 0x4f, 0xe3, 0x42, 0xe2, 0xfe, 0x1a, 0x7f, 0x9b, 0x8e, 0xe7, 0xeb, 0x4a,
        0x7c, 0x0f, 0x9e, 0x16, 0x2b, 0xce, 0x33, 0x57, 0x6b, 0x31, 0x5e, 0xce, 0xcb, 0xb6, 0x40,
        0x68, 0x37, 0xbf, 0x51, 0xf5,
    ];

    #[test]
    fn test_from_sec1_bytes() -> EciesResult<()> {
        let key = PublicKey::from_sec1_bytes(&GENERATOR)?;
        assert_eq!(key.as_bytes(), &GENERATOR);
        assert_eq!(key.x(), &GENERATOR[1..33]);
        assert_eq!(key.y(), &GENERATOR[33..]);
        assert_eq!(key.usage(), KeyUsage::PUBLIC_DEFAULT);
        Ok(())
    }

    #[test]
    fn test_rejects_compressed() {
        let mut compressed = [0u8; 33];
        compressed[0] = 0x03;
        compressed[1..].copy_from_slice(&GENERATOR[1..33]);
        let result = PublicKey::from_sec1_bytes(&compressed);
        assert!(matches!(result, Err(EciesError::InvalidEncoding(_))));
    }

    #[test]
    fn test_rejects_point_off_curve() {
        let mut bad = GENERATOR;
        bad[64] ^= 0x01;
        let result = PublicKey::from_sec1_bytes(&bad);
        assert!(matches!(result, Err(EciesError::InvalidEncoding(_))));
    }

    #[test]
    fn test_capability_query() -> EciesResult<()> {
        let key = PublicKey::from_sec1_bytes(&GENERATOR)?;
        assert!(key.is_algorithm_supported(Operation::Encrypt, Algorithm::default()));
        assert!(!key.is_algorithm_supported(Operation::Decrypt, Algorithm::default()));
        Ok(())
    }

    #[test]
    fn test_debug() -> EciesResult<()> {
        let key = PublicKey::from_sec1_bytes(&GENERATOR)?;
        let debug_str = format!("{key:?}");
        assert!(debug_str.contains("PublicKey"));
        assert!(debug_str.contains("key_len"));
        Ok(())
    }
}
