//! Ergonomic imports for the common workflow.
//!
//! # Usage
//!
//! ```rust
//! use secure_ecies::prelude::*;
//!
//! let store = InMemoryKeyStore::new();
//! let handle = store
//!     .create_private_key(&KeyAttributes::new("prelude.example").expect("valid attributes"))
//!     .expect("key created");
//! let spki = encode_x509(&derive_public_key(&handle).expect("public key"));
//! assert_eq!(spki.header(), &SPKI_P256_HEADER);
//! ```

// Re-export core types for convenience
pub use crate::core::algorithm::{Accessibility, Algorithm, Curve, KeyUsage, Operation};
pub use crate::core::codec::EciesCodec;
pub use crate::core::error::{EciesError, EciesResult};
pub use crate::core::operations::encoder::{
    derive_public_key, encode_x509, SPKI_P256_HEADER, SPKI_P256_SIZE,
};
pub use crate::core::types::{
    Ciphertext, EncodedPublicKey, KeyAttributes, KeyAttributesBuilder, PrivateKeyHandle, PublicKey,
};
pub use crate::keystore::{get_or_create_private_key, InMemoryKeyStore, KeyStore};

#[cfg(feature = "os-keyring")]
pub use crate::keystore::KeyringStore;
