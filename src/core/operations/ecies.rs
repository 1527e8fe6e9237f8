//! P-256 ECIES seal/open.
//!
//! This module implements the integrated encryption scheme using:
//! - P-256 ephemeral-static ECDH (cofactor 1, so cofactor ECDH is plain ECDH)
//! - ANSI X9.63 KDF with SHA-256, shared info = ephemeral public key
//! - AES-128-GCM with a 16-byte IV and a 16-byte tag
//!
//! Output layout:
//!
//! ```text
//! ephemeral_pk (65, uncompressed SEC1) || ciphertext (len(plaintext)) || tag (16)
//! ```

use aes::Aes128;
use aes_gcm::aead::consts::U16;
use aes_gcm::aead::generic_array::GenericArray;
use aes_gcm::aead::{Aead, KeyInit};
use aes_gcm::AesGcm;
use p256::ecdh::{diffie_hellman, EphemeralSecret};
use p256::elliptic_curve::sec1::ToEncodedPoint;
use p256::{PublicKey, SecretKey};
use rand_core::OsRng;
use zeroize::Zeroizing;

use crate::core::algorithm::Algorithm;
use crate::core::error::{EciesError, EciesResult};
use crate::core::operations::kdf::x963_kdf_sha256;

/// Size of the ephemeral public key (P-256 uncompressed SEC1: 1 + 32 + 32 bytes).
pub const EPHEMERAL_PK_SIZE: usize = 65;

/// Size of the AES-GCM authentication tag.
pub const TAG_SIZE: usize = 16;

/// Size of the derived AES key (AES-128 for 256-bit curves).
pub const AES_KEY_SIZE: usize = 16;

/// Size of the GCM IV.
pub const IV_SIZE: usize = 16;

/// Smallest valid sealed blob: ephemeral key and tag around an empty body.
pub const MIN_SEALED_SIZE: usize = EPHEMERAL_PK_SIZE + TAG_SIZE;

/// AES-128-GCM with a 16-byte nonce.
type Aes128Gcm16 = AesGcm<Aes128, U16>;

/// Derived symmetric material: AES key followed by the IV.
type KeyMaterial = Zeroizing<[u8; AES_KEY_SIZE + IV_SIZE]>;

/// Derives the AES key and IV from the ECDH shared secret.
///
/// For the variable-IV variant the KDF yields 32 bytes (key || IV). Otherwise
/// it yields the 16-byte key and the IV stays zero.
fn derive_key_material(
    shared_secret: &[u8],
    ephemeral_pk: &[u8],
    algorithm: Algorithm,
) -> EciesResult<KeyMaterial> {
    let mut material = Zeroizing::new([0u8; AES_KEY_SIZE + IV_SIZE]);
    let len = if algorithm.variable_iv() {
        AES_KEY_SIZE + IV_SIZE
    } else {
        AES_KEY_SIZE
    };
    x963_kdf_sha256(shared_secret, ephemeral_pk, &mut material[..len])?;
    Ok(material)
}

fn cipher_for(material: &KeyMaterial) -> Option<Aes128Gcm16> {
    Aes128Gcm16::new_from_slice(&material[..AES_KEY_SIZE]).ok()
}

/// Seals `plaintext` for the holder of `recipient`'s private key.
///
/// # Errors
///
/// Returns `EciesError::Encryption` if key derivation or AES-GCM fails.
pub fn seal_p256(
    plaintext: &[u8],
    recipient: &PublicKey,
    algorithm: Algorithm,
) -> EciesResult<Vec<u8>> {
    // Generate ephemeral keypair
    let ephemeral_secret = EphemeralSecret::random(&mut OsRng);
    let ephemeral_point = ephemeral_secret.public_key().to_encoded_point(false);
    let ephemeral_pk = ephemeral_point.as_bytes();
    if ephemeral_pk.len() != EPHEMERAL_PK_SIZE {
        return Err(EciesError::Encryption(format!(
            "unexpected ephemeral key length {}",
            ephemeral_pk.len()
        )));
    }

    // Compute shared secret via ECDH
    let shared_secret = ephemeral_secret.diffie_hellman(recipient);
    let material = derive_key_material(
        shared_secret.raw_secret_bytes().as_slice(),
        ephemeral_pk,
        algorithm,
    )
    .map_err(|e| EciesError::Encryption(format!("key derivation: {e}")))?;

    let cipher = cipher_for(&material)
        .ok_or_else(|| EciesError::Encryption("invalid AES key length".to_string()))?;
    let iv = GenericArray::<u8, U16>::from_slice(&material[AES_KEY_SIZE..]);

    // ciphertext || tag
    let sealed_body = cipher
        .encrypt(iv, plaintext)
        .map_err(|e| EciesError::Encryption(format!("AES-GCM: {e}")))?;

    let mut out = Vec::with_capacity(EPHEMERAL_PK_SIZE + sealed_body.len());
    out.extend_from_slice(ephemeral_pk);
    out.extend_from_slice(&sealed_body);
    Ok(out)
}

/// Opens a blob produced by [`seal_p256`] with the recipient's secret key.
///
/// # Errors
///
/// Returns `EciesError::Decryption` for every failure: short input, invalid
/// ephemeral point, wrong key or tampered data.
pub fn open_p256(sealed: &[u8], recipient: &SecretKey, algorithm: Algorithm) -> EciesResult<Vec<u8>> {
    if sealed.len() < MIN_SEALED_SIZE {
        return Err(EciesError::Decryption);
    }
    let (ephemeral_pk, sealed_body) = sealed.split_at(EPHEMERAL_PK_SIZE);

    // Only the uncompressed form is ever produced
    if ephemeral_pk[0] != 0x04 {
        return Err(EciesError::Decryption);
    }
    let ephemeral_public =
        PublicKey::from_sec1_bytes(ephemeral_pk).map_err(|_| EciesError::Decryption)?;

    let shared_secret = diffie_hellman(recipient.to_nonzero_scalar(), ephemeral_public.as_affine());
    let material = derive_key_material(
        shared_secret.raw_secret_bytes().as_slice(),
        ephemeral_pk,
        algorithm,
    )
    .map_err(|_| EciesError::Decryption)?;

    let cipher = cipher_for(&material).ok_or(EciesError::Decryption)?;
    let iv = GenericArray::<u8, U16>::from_slice(&material[AES_KEY_SIZE..]);

    cipher
        .decrypt(iv, sealed_body)
        .map_err(|_| EciesError::Decryption)
}
