//! Integration tests for the key store -> SPKI -> ECIES workflow.
//!
//! SPKI encoding is checked against the JSON vectors in `tests/vectors` and
//! against the `p256` crate's own SubjectPublicKeyInfo parser.

// Test code legitimately uses panic patterns for test failure reporting
#![allow(clippy::expect_used, clippy::panic, clippy::unwrap_used)]

mod vectors;

use std::path::PathBuf;

use p256::pkcs8::{DecodePublicKey, EncodePublicKey};
use secure_ecies::core::algorithm::{Algorithm, KeyUsage, Operation};
use secure_ecies::core::operations::encoder::{
    derive_public_key, encode_x509, SPKI_P256_HEADER, SPKI_P256_SIZE,
};
use secure_ecies::core::types::{Ciphertext, EncodedPublicKey, KeyAttributes, PublicKey};
use secure_ecies::keystore::{InMemoryKeyStore, KeyStore};
use secure_ecies::{EciesCodec, EciesError};
use vectors::*;

const MESSAGE: &str = "Bu gizli bir mesajdır!";

/// Get the path to the test vectors directory.
fn vectors_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/vectors")
}

fn new_key(store: &InMemoryKeyStore, tag: &str) -> secure_ecies::PrivateKeyHandle {
    let attributes = KeyAttributes::new(tag).expect("valid attributes");
    store.create_private_key(&attributes).expect("key created")
}

// =============================================================================
// SPKI Test Vectors
// =============================================================================

#[test]
fn test_spki_vectors() {
    let path = vectors_dir().join("spki.json");
    let suite: TestVectorSuite<SpkiTestVector> = load_vectors(path.to_str().expect("valid path"));

    for test in suite.tests {
        let point = hex_decode(&test.point).expect("valid hex");

        if test.expect_fail {
            let result = PublicKey::from_sec1_bytes(&point);
            assert!(
                result.is_err(),
                "Test '{}' should have failed but succeeded",
                test.name
            );
            continue;
        }

        let public_key = PublicKey::from_sec1_bytes(&point)
            .unwrap_or_else(|e| panic!("Test '{}' failed to parse point: {e}", test.name));
        let encoded = encode_x509(&public_key);

        let expected = hex_decode(test.spki.as_ref().expect("spki required")).expect("valid hex");
        assert_eq!(
            encoded.as_bytes().as_slice(),
            expected.as_slice(),
            "Test '{}' DER mismatch",
            test.name
        );
        assert_eq!(
            Some(encoded.to_base64()),
            test.base64,
            "Test '{}' Base64 mismatch",
            test.name
        );
    }
}

// =============================================================================
// Demo scenario
// =============================================================================

#[test]
fn test_full_scenario() {
    let store = InMemoryKeyStore::new();
    let handle = new_key(&store, "com.example.secureapp.keypair");

    let public_key = derive_public_key(&handle).expect("public key derived");
    let encoded = encode_x509(&public_key);
    assert_eq!(encoded.as_bytes().len(), 91);
    assert_eq!(&encoded.as_bytes()[..26], &SPKI_P256_HEADER);

    let codec = EciesCodec::default();
    let ciphertext = codec
        .encrypt(MESSAGE.as_bytes(), &public_key)
        .expect("encrypt");
    let decrypted = codec.decrypt(&ciphertext, &handle).expect("decrypt");
    assert_eq!(decrypted, MESSAGE);
}

// =============================================================================
// Encoding properties
// =============================================================================

#[test]
fn test_encoding_is_deterministic_and_fixed_size() {
    let store = InMemoryKeyStore::new();
    for i in 0..8 {
        let handle = new_key(&store, &format!("determinism.{i}"));
        let public_key = handle.public_key().expect("public key");

        let a = encode_x509(&public_key);
        let b = encode_x509(&derive_public_key(&handle).expect("public key"));
        assert_eq!(a, b);
        assert_eq!(a.as_bytes().len(), SPKI_P256_SIZE);
        assert_eq!(a.header(), &SPKI_P256_HEADER);
    }
}

#[test]
fn test_spki_matches_independent_encoder() {
    let store = InMemoryKeyStore::new();
    let handle = new_key(&store, "independent.encoder");
    let public_key = handle.public_key().expect("public key");
    let encoded = encode_x509(&public_key);

    // Standard parser accepts our DER and yields the same point
    let parsed = p256::PublicKey::from_public_key_der(encoded.as_bytes()).expect("standard parser");
    let reference = parsed.to_public_key_der().expect("reference encoding");
    assert_eq!(reference.as_bytes(), encoded.as_bytes().as_slice());

    // And our PEM
    let pem = encoded.to_pem().expect("pem");
    let from_pem = p256::PublicKey::from_public_key_pem(&pem).expect("standard PEM");
    assert_eq!(from_pem, parsed);
}

#[test]
fn test_spki_presentation_roundtrips() {
    let store = InMemoryKeyStore::new();
    let encoded = encode_x509(
        &new_key(&store, "presentation")
            .public_key()
            .expect("public key"),
    );

    assert_eq!(EncodedPublicKey::from_der(encoded.as_bytes()).expect("der"), encoded);
    assert_eq!(EncodedPublicKey::from_base64(&encoded.to_base64()).expect("base64"), encoded);
    let pem = encoded.to_pem().expect("pem");
    assert_eq!(EncodedPublicKey::from_pem(&pem).expect("pem"), encoded);
    assert_eq!(
        EncodedPublicKey::from_pem(&encoded.to_pem_single_line()).expect("single-line pem"),
        encoded
    );
}

// =============================================================================
// ECIES properties
// =============================================================================

#[test]
fn test_roundtrip_various_plaintexts() {
    let store = InMemoryKeyStore::new();
    let handle = new_key(&store, "roundtrip");
    let public_key = handle.public_key().expect("public key");

    let long = "ğüşıöç ".repeat(2048);
    let plaintexts = ["a", MESSAGE, "🔐 emoji and ascii", long.as_str(), ""];

    for algorithm in [
        Algorithm::EciesCofactorVariableIvX963Sha256AesGcm,
        Algorithm::EciesCofactorX963Sha256AesGcm,
    ] {
        let codec = EciesCodec::new(algorithm);
        for plaintext in plaintexts {
            let ciphertext = codec
                .encrypt(plaintext.as_bytes(), &public_key)
                .expect("encrypt");
            assert_eq!(ciphertext.len(), 65 + plaintext.len() + 16);
            assert_eq!(codec.decrypt(&ciphertext, &handle).expect("decrypt"), plaintext);
        }
    }
}

#[test]
fn test_ciphertext_text_form_roundtrip() {
    let store = InMemoryKeyStore::new();
    let handle = new_key(&store, "text.form");
    let codec = EciesCodec::default();

    let ciphertext = codec
        .encrypt(MESSAGE.as_bytes(), &handle.public_key().expect("public key"))
        .expect("encrypt");
    let parsed = Ciphertext::try_from(ciphertext.to_string()).expect("base64 parses");

    assert_eq!(codec.decrypt(&parsed, &handle).expect("decrypt"), MESSAGE);
}

#[test]
fn test_every_single_bit_flip_is_detected() {
    let store = InMemoryKeyStore::new();
    let handle = new_key(&store, "tamper");
    let codec = EciesCodec::default();

    let ciphertext = codec
        .encrypt(MESSAGE.as_bytes(), &handle.public_key().expect("public key"))
        .expect("encrypt")
        .into_bytes();

    for byte in 0..ciphertext.len() {
        for bit in 0..8 {
            let mut tampered = ciphertext.clone();
            tampered[byte] ^= 1 << bit;

            let result = codec.decrypt(&tampered, &handle);
            assert!(
                matches!(result, Err(EciesError::Decryption)),
                "flip of byte {byte} bit {bit} was not detected"
            );
        }
    }
}

#[test]
fn test_truncation_is_detected() {
    let store = InMemoryKeyStore::new();
    let handle = new_key(&store, "truncate");
    let codec = EciesCodec::default();

    let ciphertext = codec
        .encrypt(MESSAGE.as_bytes(), &handle.public_key().expect("public key"))
        .expect("encrypt")
        .into_bytes();

    for len in [0, 1, 64, 65, 80, ciphertext.len() - 1] {
        let result = codec.decrypt(&ciphertext[..len], &handle);
        assert!(matches!(result, Err(EciesError::Decryption)), "length {len}");
    }
}

#[test]
fn test_wrong_key_is_rejected() {
    let store = InMemoryKeyStore::new();
    let alice = new_key(&store, "alice");
    let bob = new_key(&store, "bob");
    let codec = EciesCodec::default();

    let ciphertext = codec
        .encrypt(MESSAGE.as_bytes(), &alice.public_key().expect("public key"))
        .expect("encrypt");

    assert!(matches!(codec.decrypt(&ciphertext, &bob), Err(EciesError::Decryption)));
}

#[test]
fn test_encrypt_to_imported_spki() {
    let store = InMemoryKeyStore::new();
    let handle = new_key(&store, "imported");
    let pem = encode_x509(&handle.public_key().expect("public key"))
        .to_pem()
        .expect("pem");

    // A peer only sees the PEM
    let peer_view = EncodedPublicKey::from_pem(&pem)
        .and_then(|encoded| encoded.public_key())
        .expect("peer parses PEM");
    let ciphertext = EciesCodec::default()
        .encrypt(MESSAGE.as_bytes(), &peer_view)
        .expect("encrypt");

    assert_eq!(
        EciesCodec::default().decrypt(&ciphertext, &handle).expect("decrypt"),
        MESSAGE
    );
}

// =============================================================================
// Capability gate and key store contract
// =============================================================================

#[test]
fn test_capability_gate() {
    let store = InMemoryKeyStore::new();
    let attributes = KeyAttributes::builder("signing.key")
        .usage(KeyUsage::SIGN)
        .build()
        .expect("valid attributes");
    let signing_key = store.create_private_key(&attributes).expect("key created");
    let signing_public = signing_key.public_key().expect("public key");
    let codec = EciesCodec::default();

    assert!(!signing_public.is_algorithm_supported(Operation::Encrypt, codec.algorithm()));
    assert!(matches!(
        codec.encrypt(b"x", &signing_public),
        Err(EciesError::UnsupportedAlgorithm {
            operation: Operation::Encrypt,
            ..
        })
    ));

    // Valid ciphertext from another key still hits the gate first
    let other = new_key(&store, "other");
    let ciphertext = codec
        .encrypt(b"x", &other.public_key().expect("public key"))
        .expect("encrypt");
    assert!(matches!(
        codec.decrypt(&ciphertext, &signing_key),
        Err(EciesError::UnsupportedAlgorithm {
            operation: Operation::Decrypt,
            ..
        })
    ));
}

#[test]
fn test_duplicate_tag_and_lookup() {
    let store = InMemoryKeyStore::new();
    let created = new_key(&store, "duplicate");

    let attributes = KeyAttributes::new("duplicate").expect("valid attributes");
    assert!(matches!(
        store.create_private_key(&attributes),
        Err(EciesError::DuplicateTag(_))
    ));

    let found = store.private_key("duplicate").expect("lookup");
    assert_eq!(found, created);
    assert_eq!(
        found.public_key().expect("public key"),
        created.public_key().expect("public key")
    );
}

#[test]
fn test_handle_never_shows_key_material() {
    let store = InMemoryKeyStore::new();
    let handle = new_key(&store, "redaction");

    assert!(handle.is_non_extractable());
    let debug_str = format!("{handle:?}");
    assert!(debug_str.contains("[REDACTED]"));

    let store_debug = format!("{store:?}");
    assert!(store_debug.contains("[REDACTED]"));
}
