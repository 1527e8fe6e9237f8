#![no_main]

use std::sync::OnceLock;

use libfuzzer_sys::fuzz_target;
use secure_ecies::core::types::{KeyAttributes, PrivateKeyHandle};
use secure_ecies::keystore::{InMemoryKeyStore, KeyStore};
use secure_ecies::{EciesCodec, EciesError};

fn handle() -> &'static PrivateKeyHandle {
    static HANDLE: OnceLock<PrivateKeyHandle> = OnceLock::new();
    HANDLE.get_or_init(|| {
        let store = InMemoryKeyStore::new();
        let attributes = KeyAttributes::new("fuzz.decrypt").expect("valid attributes");
        store.create_private_key(&attributes).expect("key created")
    })
}

fuzz_target!(|data: &[u8]| {
    // Random input must fail closed with the opaque error
    match EciesCodec::default().decrypt_bytes(data, handle()) {
        Err(EciesError::Decryption) => {}
        other => panic!("unexpected result: {other:?}"),
    }
});
