//! Test vector types for encoded Argon2id hashes.
//!
//! The success vectors were computed with an independent Argon2id
//! implementation; the failure vectors are hand-built malformed strings.

// Many fields are required for deserialization but not directly used in tests
#![allow(dead_code)]

use serde::Deserialize;

/// A test vector suite (top-level JSON structure).
#[derive(Debug, Deserialize)]
pub struct TestVectorSuite<T> {
    pub name: String,
    pub tests: Vec<T>,
}

/// Cost parameters as written in the vector file.
#[derive(Debug, Deserialize)]
pub struct VectorParams {
    pub memory_kib: u32,
    pub iterations: u32,
    pub parallelism: u8,
}

/// Test vector for an encoded Argon2id hash.
#[derive(Debug, Deserialize)]
pub struct HashTestVector {
    pub name: String,
    #[serde(rename = "expect-fail")]
    pub expect_fail: bool,
    #[serde(default)]
    pub comment: Option<String>,
    /// Plaintext password
    pub password: String,
    /// Cost parameters (null for fail tests)
    pub params: Option<VectorParams>,
    /// Hex-encoded salt (null for fail tests)
    pub salt: Option<String>,
    /// Hex-encoded derived key (null for fail tests)
    pub key: Option<String>,
    /// Encoded PHC string
    pub hash: String,
    /// Expected error kind for fail tests: "malformed" or "incompatible-version"
    pub error: Option<String>,
}

// =============================================================================
// Helper functions
// =============================================================================

/// Decode a hex string to bytes.
/// Returns `None` if the string is not valid hex.
pub fn hex_decode(s: &str) -> Option<Vec<u8>> {
    hex::decode(s).ok()
}

/// Load a test vector suite from a JSON file.
pub fn load_vectors<T: serde::de::DeserializeOwned>(path: &str) -> TestVectorSuite<T> {
    let content = std::fs::read_to_string(path)
        .unwrap_or_else(|e| panic!("Failed to read test vector file {path}: {e}"));
    serde_json::from_str(&content)
        .unwrap_or_else(|e| panic!("Failed to parse test vector file {path}: {e}"))
}
