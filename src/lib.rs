//! Non-extractable P-256 keys, SPKI public key export and ECIES encryption.
//!
//! This crate covers one workflow end to end:
//!
//! 1. create a P-256 private key in a [`KeyStore`](keystore::KeyStore) that
//!    never hands out the private scalar,
//! 2. derive the public key and encode it as an X.509 SubjectPublicKeyInfo
//!    (DER, Base64 or PEM),
//! 3. encrypt to that public key and decrypt with the key handle using ECIES
//!    (ephemeral ECDH + ANSI X9.63 KDF with SHA-256 + AES-GCM).
//!
//! # Quick Start
//!
//! ```rust
//! use secure_ecies::core::operations::encoder::encode_x509;
//! use secure_ecies::core::types::KeyAttributes;
//! use secure_ecies::keystore::{InMemoryKeyStore, KeyStore};
//! use secure_ecies::EciesCodec;
//!
//! let store = InMemoryKeyStore::new();
//! let attributes = KeyAttributes::new("com.example.app.keypair")?;
//! let handle = store.create_private_key(&attributes)?;
//!
//! // Export the public key
//! let public_key = handle.public_key()?;
//! let spki = encode_x509(&public_key);
//! assert_eq!(spki.as_bytes().len(), 91);
//! assert!(spki.to_pem()?.starts_with("-----BEGIN PUBLIC KEY-----"));
//!
//! // Round trip
//! let codec = EciesCodec::default();
//! let ciphertext = codec.encrypt("Bu gizli bir mesajdır!".as_bytes(), &public_key)?;
//! assert_eq!(codec.decrypt(&ciphertext, &handle)?, "Bu gizli bir mesajdır!");
//! # Ok::<(), secure_ecies::EciesError>(())
//! ```
//!
//! # Ciphertext format
//!
//! | Segment | Size | Content |
//! |---------|------|---------|
//! | ephemeral key | 65 | uncompressed SEC1 P-256 point |
//! | body | len(plaintext) | AES-128-GCM ciphertext |
//! | tag | 16 | GCM authentication tag |
//!
//! # Features
//!
//! - `prelude` (default): the [`prelude`] module
//! - `demo` (default): the `demo` module and the `secure-ecies-demo` binary
//! - `os-keyring`: `KeyringStore`, backed by the platform keyring
//!
//! # Security
//!
//! - Key handles never expose private key material
//! - Debug output redacts sensitive key material
//! - Derived symmetric keys are zeroized after use
//! - All decryption failures are reported as one error kind
//! - No unsafe code
//!
//! The bundled stores are software stores. They keep the non-extractable
//! contract through the API only, which is a lower protection level than a
//! hardware enclave.

pub mod core;
#[cfg(feature = "demo")]
pub mod demo;
pub mod keystore;

#[cfg(feature = "prelude")]
pub mod prelude;

// Re-export commonly used items at crate root
pub use core::codec::EciesCodec;
pub use core::error::{EciesError, EciesResult};
pub use core::types::{Ciphertext, EncodedPublicKey, KeyAttributes, PrivateKeyHandle, PublicKey};
