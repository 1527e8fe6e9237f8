#![no_main]

use libfuzzer_sys::fuzz_target;
use secure_ecies::core::types::EncodedPublicKey;

fuzz_target!(|data: &[u8]| {
    if let Ok(encoded) = EncodedPublicKey::from_der(data) {
        // Anything accepted must survive its own text forms
        assert!(encoded.public_key().is_ok());
        let pem = encoded.to_pem().expect("accepted DER must encode as PEM");
        assert_eq!(EncodedPublicKey::from_pem(&pem).ok(), Some(encoded));
    }

    if let Ok(text) = core::str::from_utf8(data) {
        let _ = EncodedPublicKey::try_from(text);
    }
});
