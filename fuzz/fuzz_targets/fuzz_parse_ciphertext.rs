#![no_main]

use libfuzzer_sys::fuzz_target;
use secure_ecies::core::types::Ciphertext;

fuzz_target!(|data: &str| {
    // Should never panic
    if let Ok(ciphertext) = Ciphertext::try_from(data) {
        let _ = ciphertext.ephemeral_public_key();
        let _ = ciphertext.body();
        let _ = ciphertext.tag();
    }
});
