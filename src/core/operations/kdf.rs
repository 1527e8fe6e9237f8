//! ANSI X9.63 key derivation with SHA-256.
//!
//! ```text
//! K = H(Z || 00000001 || SharedInfo) || H(Z || 00000002 || SharedInfo) || ...
//! ```
//!
//! truncated to the requested length. The counter is a 32-bit big-endian
//! integer starting at 1.

use sha2::{Digest, Sha256};

use crate::core::error::{EciesError, EciesResult};

/// SHA-256 output size.
const HASH_LEN: usize = 32;

/// Maximum output length: `(2^32 - 1) * hash_len`.
const MAX_OUTPUT_LEN: u64 = (u32::MAX as u64) * HASH_LEN as u64;

/// Fills `out` with X9.63 key material derived from the shared secret `z`.
///
/// # Errors
///
/// Returns `EciesError::Encryption` if `out` exceeds the maximum length the
/// 32-bit counter allows.
pub fn x963_kdf_sha256(z: &[u8], shared_info: &[u8], out: &mut [u8]) -> EciesResult<()> {
    if out.len() as u64 > MAX_OUTPUT_LEN {
        return Err(EciesError::Encryption(format!(
            "X9.63 KDF output too long: {} bytes",
            out.len()
        )));
    }

    for (index, chunk) in out.chunks_mut(HASH_LEN).enumerate() {
        // Bounded by MAX_OUTPUT_LEN above
        let counter = (index as u32).wrapping_add(1);

        let mut hasher = Sha256::new();
        hasher.update(z);
        hasher.update(counter.to_be_bytes());
        hasher.update(shared_info);
        let block = hasher.finalize();

        chunk.copy_from_slice(&block[..chunk.len()]);
    }

    Ok(())
}
