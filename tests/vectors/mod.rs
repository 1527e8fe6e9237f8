//! Test vector types for SubjectPublicKeyInfo encoding tests.
//!
//! The vectors live next to this module as JSON and follow the same
//! `name` / `expect-fail` / `comment` layout for every suite.

// Some fields are required for deserialization but not directly used in tests
#![allow(dead_code)]

use serde::Deserialize;

/// A test vector suite (top-level JSON structure).
#[derive(Debug, Deserialize)]
pub struct TestVectorSuite<T> {
    pub name: String,
    pub tests: Vec<T>,
}

/// Test vector for SPKI encoding of a raw public point.
#[derive(Debug, Deserialize)]
pub struct SpkiTestVector {
    pub name: String,
    #[serde(rename = "expect-fail")]
    pub expect_fail: bool,
    #[serde(default)]
    pub comment: Option<String>,
    /// Hex-encoded SEC1 point
    pub point: String,
    /// Expected hex-encoded DER (null for fail tests)
    pub spki: Option<String>,
    /// Expected Base64 of the DER (null for fail tests)
    pub base64: Option<String>,
}

/// Loads a test vector suite from a JSON file.
pub fn load_vectors<T: serde::de::DeserializeOwned>(path: &str) -> TestVectorSuite<T> {
    let content = std::fs::read_to_string(path)
        .unwrap_or_else(|e| panic!("Failed to read test vector file {path}: {e}"));
    serde_json::from_str(&content)
        .unwrap_or_else(|e| panic!("Failed to parse test vector file {path}: {e}"))
}

/// Decodes a hex string to bytes.
pub fn hex_decode(s: &str) -> Option<Vec<u8>> {
    hex::decode(s).ok()
}
