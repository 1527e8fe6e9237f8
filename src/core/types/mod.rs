//! Key and message types.
//!
//! - [`KeyAttributes`] - Creation parameters for a stored key
//! - [`PrivateKeyHandle`] - Opaque, non-extractable private key
//! - [`PublicKey`] - Uncompressed P-256 point
//! - [`EncodedPublicKey`] - DER SubjectPublicKeyInfo (Base64/PEM presentation)
//! - [`Ciphertext`] - ECIES output

mod attributes;
mod ciphertext;
mod encoded_public_key;
mod private_key;
mod public_key;

pub use attributes::{KeyAttributes, KeyAttributesBuilder};
pub use ciphertext::Ciphertext;
pub use encoded_public_key::{EncodedPublicKey, PEM_FOOTER, PEM_HEADER};
pub use private_key::PrivateKeyHandle;
pub use public_key::{PublicKey, PUBLIC_POINT_SIZE};
