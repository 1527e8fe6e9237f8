//! `KeyAttributes` - creation parameters for a stored private key.
//!
//! Attributes can only be obtained from [`KeyAttributesBuilder::build`], which
//! validates them, so every `KeyAttributes` value is one a key store accepts.

use crate::core::algorithm::{Accessibility, Curve, KeyUsage};
use crate::core::error::{EciesError, EciesResult};

/// Parameters for creating a private key in a key store.
///
/// # Example
///
/// ```rust
/// use secure_ecies::core::algorithm::{Accessibility, KeyUsage};
/// use secure_ecies::core::types::KeyAttributes;
///
/// let attributes = KeyAttributes::builder("com.example.app.keypair")
///     .accessibility(Accessibility::WhenUnlockedThisDeviceOnly)
///     .usage(KeyUsage::DECRYPT | KeyUsage::KEY_AGREEMENT)
///     .build()
///     .expect("attributes should be valid");
///
/// assert_eq!(attributes.tag(), "com.example.app.keypair");
/// assert!(attributes.is_permanent());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyAttributes {
    tag: String,
    curve: Curve,
    key_size_bits: u16,
    accessibility: Accessibility,
    permanent: bool,
    usage: KeyUsage,
}

impl KeyAttributes {
    /// Starts a builder with default attributes for `tag`.
    #[must_use]
    pub fn builder(tag: impl Into<String>) -> KeyAttributesBuilder {
        KeyAttributesBuilder::new(tag)
    }

    /// Default attributes for `tag`.
    ///
    /// # Errors
    ///
    /// Returns `EciesError::KeyGeneration` if `tag` is empty.
    pub fn new(tag: impl Into<String>) -> EciesResult<Self> {
        Self::builder(tag).build()
    }

    /// Application tag the key is stored under.
    #[must_use]
    pub fn tag(&self) -> &str {
        &self.tag
    }

    /// Curve of the key.
    #[must_use]
    pub const fn curve(&self) -> Curve {
        self.curve
    }

    /// Key size in bits.
    #[must_use]
    pub const fn key_size_bits(&self) -> u16 {
        self.key_size_bits
    }

    /// Accessibility policy.
    #[must_use]
    pub const fn accessibility(&self) -> Accessibility {
        self.accessibility
    }

    /// Whether the store retains the key.
    #[must_use]
    pub const fn is_permanent(&self) -> bool {
        self.permanent
    }

    /// Permitted private-key usages.
    #[must_use]
    pub const fn usage(&self) -> KeyUsage {
        self.usage
    }
}

/// Fluent builder for [`KeyAttributes`].
///
/// Defaults: P-256, 256 bits, `WhenUnlockedThisDeviceOnly`, permanent,
/// decrypt + key agreement + sign.
#[derive(Debug, Clone)]
pub struct KeyAttributesBuilder {
    tag: String,
    curve: Curve,
    key_size_bits: u16,
    accessibility: Accessibility,
    permanent: bool,
    usage: KeyUsage,
}

impl KeyAttributesBuilder {
    /// Creates a builder with default attributes.
    #[must_use]
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            curve: Curve::P256,
            key_size_bits: Curve::P256.key_size_bits(),
            accessibility: Accessibility::default(),
            permanent: true,
            usage: KeyUsage::PRIVATE_DEFAULT,
        }
    }

    /// Sets the curve.
    #[must_use]
    pub const fn curve(mut self, curve: Curve) -> Self {
        self.curve = curve;
        self
    }

    /// Sets the key size in bits.
    #[must_use]
    pub const fn key_size_bits(mut self, bits: u16) -> Self {
        self.key_size_bits = bits;
        self
    }

    /// Sets the accessibility policy.
    #[must_use]
    pub const fn accessibility(mut self, accessibility: Accessibility) -> Self {
        self.accessibility = accessibility;
        self
    }

    /// Sets whether the store retains the key.
    #[must_use]
    pub const fn permanent(mut self, permanent: bool) -> Self {
        self.permanent = permanent;
        self
    }

    /// Sets the permitted private-key usages.
    #[must_use]
    pub const fn usage(mut self, usage: KeyUsage) -> Self {
        self.usage = usage;
        self
    }

    /// Validates and builds the attributes.
    ///
    /// # Errors
    ///
    /// Returns `EciesError::KeyGeneration` if the tag is empty, the key size
    /// does not match the curve, the accessibility is not device-only, or the
    /// usage set is empty or contains public-key usages.
    pub fn build(self) -> EciesResult<KeyAttributes> {
        if self.tag.is_empty() {
            return Err(EciesError::KeyGeneration("empty application tag".to_string()));
        }
        if self.key_size_bits != self.curve.key_size_bits() {
            return Err(EciesError::KeyGeneration(format!(
                "key size {} does not match curve {}",
                self.key_size_bits, self.curve
            )));
        }
        if !self.accessibility.is_device_only() {
            return Err(EciesError::KeyGeneration(
                "accessibility must be device-only".to_string(),
            ));
        }
        if self.usage.is_empty() || !self.usage.is_private_only() {
            return Err(EciesError::KeyGeneration(
                "private key usage must be a non-empty set of private-key operations".to_string(),
            ));
        }

        Ok(KeyAttributes {
            tag: self.tag,
            curve: self.curve,
            key_size_bits: self.key_size_bits,
            accessibility: self.accessibility,
            permanent: self.permanent,
            usage: self.usage,
        })
    }
}
