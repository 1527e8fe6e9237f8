//! Curve, algorithm and key-usage descriptors.
//!
//! These small value types describe what a key is and what it may be used
//! for. The capability query on keys ([`KeyUsage::permits`]) is expressed in
//! terms of them.

use core::fmt::{self, Display};
use core::ops::BitOr;

// =============================================================================
// Curve
// =============================================================================

/// Elliptic curve of a key.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Curve {
    /// NIST P-256 (secp256r1 / prime256v1).
    #[default]
    P256,
}

impl Curve {
    /// Key size in bits.
    #[must_use]
    pub const fn key_size_bits(self) -> u16 {
        match self {
            Self::P256 => 256,
        }
    }

    /// Length of an uncompressed SEC1 public point (`0x04 || X || Y`).
    #[must_use]
    pub const fn public_point_len(self) -> usize {
        match self {
            Self::P256 => 65,
        }
    }

    /// Length of the scalar and of each point coordinate.
    #[must_use]
    pub const fn field_len(self) -> usize {
        match self {
            Self::P256 => 32,
        }
    }

    /// DER-encoded named-curve OID (tag and length included).
    #[must_use]
    pub const fn oid_der(self) -> &'static [u8] {
        match self {
            // 1.2.840.10045.3.1.7
            Self::P256 => &[0x06, 0x08, 0x2a, 0x86, 0x48, 0xce, 0x3d, 0x03, 0x01, 0x07],
        }
    }
}

impl Display for Curve {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::P256 => f.write_str("P-256"),
        }
    }
}

// =============================================================================
// Algorithm
// =============================================================================

/// Integrated encryption scheme variants.
///
/// Both variants use cofactor ECDH (equal to plain ECDH on P-256), the
/// ANSI X9.63 KDF with SHA-256 and the ephemeral public key as shared info,
/// and AES-128-GCM with a 16-byte nonce.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Algorithm {
    /// The KDF yields both the AES key and the 16-byte IV.
    #[default]
    EciesCofactorVariableIvX963Sha256AesGcm,
    /// The KDF yields only the AES key; the IV is all zeros.
    EciesCofactorX963Sha256AesGcm,
}

impl Algorithm {
    /// Whether the IV is derived alongside the key.
    #[must_use]
    pub const fn variable_iv(self) -> bool {
        matches!(self, Self::EciesCofactorVariableIvX963Sha256AesGcm)
    }

    /// Whether the algorithm is defined for keys on `curve`.
    #[must_use]
    pub const fn supports_curve(self, curve: Curve) -> bool {
        matches!(curve, Curve::P256)
    }

    /// Canonical algorithm name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::EciesCofactorVariableIvX963Sha256AesGcm => {
                "eciesEncryptionCofactorVariableIVX963SHA256AESGCM"
            }
            Self::EciesCofactorX963Sha256AesGcm => "eciesEncryptionCofactorX963SHA256AESGCM",
        }
    }
}

impl Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

// =============================================================================
// Operation
// =============================================================================

/// The operation a capability query is made for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    /// Encryption with a public key.
    Encrypt,
    /// Decryption with a private key.
    Decrypt,
}

impl Operation {
    /// The key usage an operation requires.
    #[must_use]
    pub const fn required_usage(self) -> KeyUsage {
        match self {
            Self::Encrypt => KeyUsage::ENCRYPT,
            Self::Decrypt => KeyUsage::DECRYPT,
        }
    }
}

impl Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Encrypt => f.write_str("encrypt"),
            Self::Decrypt => f.write_str("decrypt"),
        }
    }
}

// =============================================================================
// KeyUsage
// =============================================================================

/// Set of permitted key usages.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct KeyUsage(u8);

impl KeyUsage {
    /// No usage at all.
    pub const NONE: Self = Self(0);
    /// Decrypt with the private key.
    pub const DECRYPT: Self = Self(1);
    /// Raw key agreement with the private key.
    pub const KEY_AGREEMENT: Self = Self(1 << 1);
    /// Sign with the private key.
    pub const SIGN: Self = Self(1 << 2);
    /// Encrypt with the public key.
    pub const ENCRYPT: Self = Self(1 << 3);
    /// Verify with the public key.
    pub const VERIFY: Self = Self(1 << 4);

    /// Default private-key usage.
    pub const PRIVATE_DEFAULT: Self = Self(Self::DECRYPT.0 | Self::KEY_AGREEMENT.0 | Self::SIGN.0);

    /// Usage of a public key not bound to a stored private key.
    pub const PUBLIC_DEFAULT: Self = Self(Self::ENCRYPT.0 | Self::VERIFY.0);

    /// Raw bit representation.
    #[must_use]
    pub const fn bits(self) -> u8 {
        self.0
    }

    /// Rebuilds a set from [`KeyUsage::bits`]. Unknown bits are dropped.
    #[must_use]
    pub const fn from_bits_truncate(bits: u8) -> Self {
        Self(bits & (Self::PRIVATE_DEFAULT.0 | Self::PUBLIC_DEFAULT.0))
    }

    /// Whether every usage in `other` is present.
    #[must_use]
    pub const fn contains(self, other: Self) -> bool {
        self.0 & other.0 == other.0
    }

    /// Whether the set is empty.
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Whether only private-key usages are present.
    #[must_use]
    pub const fn is_private_only(self) -> bool {
        self.0 & !Self::PRIVATE_DEFAULT.0 == 0
    }

    /// Usage a public key inherits from its private key.
    ///
    /// Decrypt or key agreement on the private side enables encryption;
    /// signing enables verification.
    #[must_use]
    pub const fn public_counterpart(self) -> Self {
        let mut bits = 0;
        if self.0 & (Self::DECRYPT.0 | Self::KEY_AGREEMENT.0) != 0 {
            bits |= Self::ENCRYPT.0;
        }
        if self.0 & Self::SIGN.0 != 0 {
            bits |= Self::VERIFY.0;
        }
        Self(bits)
    }

    /// Capability query: may a key with this usage, on `curve`, run
    /// `operation` with `algorithm`?
    #[must_use]
    pub const fn permits(self, curve: Curve, operation: Operation, algorithm: Algorithm) -> bool {
        algorithm.supports_curve(curve) && self.contains(operation.required_usage())
    }
}

impl BitOr for KeyUsage {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        Self(self.0 | rhs.0)
    }
}

// =============================================================================
// Accessibility
// =============================================================================

/// When and where a stored key is accessible.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Accessibility {
    /// Only while the device is unlocked; never leaves the device.
    #[default]
    WhenUnlockedThisDeviceOnly,
    /// After the first unlock since boot; never leaves the device.
    AfterFirstUnlockThisDeviceOnly,
    /// Only while the device is unlocked; may be synced or restored from a
    /// backup onto another device. Key stores reject it.
    WhenUnlocked,
}

impl Accessibility {
    /// Whether the key is bound to this device.
    #[must_use]
    pub const fn is_device_only(self) -> bool {
        matches!(
            self,
            Self::WhenUnlockedThisDeviceOnly | Self::AfterFirstUnlockThisDeviceOnly
        )
    }

    /// Stable one-byte code, used by persistent stores.
    #[must_use]
    pub const fn to_byte(self) -> u8 {
        match self {
            Self::WhenUnlockedThisDeviceOnly => 0,
            Self::AfterFirstUnlockThisDeviceOnly => 1,
            Self::WhenUnlocked => 2,
        }
    }

    /// Inverse of [`Accessibility::to_byte`].
    #[must_use]
    pub const fn from_byte(byte: u8) -> Option<Self> {
        match byte {
            0 => Some(Self::WhenUnlockedThisDeviceOnly),
            1 => Some(Self::AfterFirstUnlockThisDeviceOnly),
            2 => Some(Self::WhenUnlocked),
            _ => None,
        }
    }
}
