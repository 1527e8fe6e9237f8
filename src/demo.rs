//! Key generation and ECIES round-trip demonstration.
//!
//! [`run`] walks the full workflow once:
//!
//! 1. create (or reuse) the private key under the configured tag
//! 2. derive and encode its public key
//! 3. encrypt the message to the public key
//! 4. decrypt with the private key and compare
//!
//! A failing stage is recorded in the report and its dependents are skipped;
//! results from earlier stages are kept.

use core::fmt::{self, Display};

use crate::core::algorithm::Algorithm;
use crate::core::codec::EciesCodec;
use crate::core::error::EciesError;
use crate::core::operations::encoder::{derive_public_key, encode_x509};
use crate::core::types::{Ciphertext, EncodedPublicKey, KeyAttributes};
use crate::keystore::{get_or_create_private_key, KeyStore};

/// Tag the demo key is stored under by default.
pub const DEFAULT_TAG: &str = "com.example.secureapp.keypair";

/// Message encrypted by default.
pub const DEFAULT_MESSAGE: &str = "Bu gizli bir mesajdır!";

/// Demo parameters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DemoConfig {
    /// Key store tag.
    pub tag: String,
    /// Message to encrypt.
    pub message: String,
    /// ECIES variant.
    pub algorithm: Algorithm,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            tag: DEFAULT_TAG.to_string(),
            message: DEFAULT_MESSAGE.to_string(),
            algorithm: Algorithm::default(),
        }
    }
}

/// Workflow stage, used to label failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    /// Key creation or lookup.
    KeyCreation,
    /// Public key derivation.
    PublicKey,
    /// Encryption.
    Encrypt,
    /// Decryption.
    Decrypt,
}

impl Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::KeyCreation => f.write_str("key creation"),
            Self::PublicKey => f.write_str("public key export"),
            Self::Encrypt => f.write_str("encryption"),
            Self::Decrypt => f.write_str("decryption"),
        }
    }
}

/// Outcome of a demo run.
#[derive(Debug)]
pub struct DemoReport {
    /// The message that was encrypted.
    pub message: String,
    /// The encoded public key, if export succeeded.
    pub public_key: Option<EncodedPublicKey>,
    /// The ciphertext, if encryption succeeded.
    pub ciphertext: Option<Ciphertext>,
    /// The decrypted text, if decryption succeeded.
    pub decrypted: Option<String>,
    /// Failed stages, in order.
    pub failures: Vec<(Stage, EciesError)>,
}

impl DemoReport {
    fn new(message: &str) -> Self {
        Self {
            message: message.to_string(),
            public_key: None,
            ciphertext: None,
            decrypted: None,
            failures: Vec::new(),
        }
    }

    fn fail(&mut self, stage: Stage, error: EciesError) {
        tracing::error!(%stage, %error, "Demo stage failed");
        self.failures.push((stage, error));
    }

    /// Whether the decrypted text equals the original message.
    #[must_use]
    pub fn round_trip_ok(&self) -> bool {
        self.decrypted.as_deref() == Some(self.message.as_str())
    }
}

impl Display for DemoReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(public_key) = &self.public_key {
            writeln!(f, "Public key (Base64): {public_key}")?;
            if let Ok(pem) = public_key.to_pem() {
                writeln!(f, "Public key (PEM):")?;
                writeln!(f, "{}", pem.trim_end())?;
            }
        }
        if let Some(ciphertext) = &self.ciphertext {
            writeln!(f, "Ciphertext (Base64): {ciphertext}")?;
        }
        if let Some(decrypted) = &self.decrypted {
            writeln!(f, "Decrypted: {decrypted}")?;
        }
        for (stage, error) in &self.failures {
            writeln!(f, "{stage} failed: {error}")?;
        }
        if self.round_trip_ok() {
            writeln!(f, "Round trip: OK")
        } else {
            writeln!(f, "Round trip: FAILED")
        }
    }
}

/// Runs the workflow against `store`.
#[must_use]
pub fn run(store: &dyn KeyStore, config: &DemoConfig) -> DemoReport {
    let mut report = DemoReport::new(&config.message);

    let handle = match KeyAttributes::new(config.tag.as_str())
        .and_then(|attributes| get_or_create_private_key(store, &attributes))
    {
        Ok(handle) => handle,
        Err(e) => {
            report.fail(Stage::KeyCreation, e);
            return report;
        }
    };
    tracing::info!(tag = handle.tag(), "Private key ready");

    let public_key = match derive_public_key(&handle) {
        Ok(public_key) => public_key,
        Err(e) => {
            report.fail(Stage::PublicKey, e);
            return report;
        }
    };
    report.public_key = Some(encode_x509(&public_key));

    let codec = EciesCodec::new(config.algorithm);
    let ciphertext = match codec.encrypt(config.message.as_bytes(), &public_key) {
        Ok(ciphertext) => ciphertext,
        Err(e) => {
            report.fail(Stage::Encrypt, e);
            return report;
        }
    };
    tracing::debug!(len = ciphertext.len(), "Message encrypted");

    match codec.decrypt(&ciphertext, &handle) {
        Ok(decrypted) => report.decrypted = Some(decrypted),
        Err(e) => report.fail(Stage::Decrypt, e),
    }
    report.ciphertext = Some(ciphertext);

    if report.round_trip_ok() {
        tracing::info!("Round trip succeeded");
    } else {
        tracing::warn!("Round trip did not reproduce the original message");
    }
    report
}
