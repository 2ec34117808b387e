//! Core types and operations.
//!
//! This module provides the fundamental building blocks:
//!
//! - [`version`] - Algorithm marker (Argon2id) and the supported KDF version
//! - [`error`] - Error types for hashing, verification and decoding
//! - [`params`] - KDF cost parameters and presets
//! - [`codec`] - PHC string encoding and decoding
//! - [`types`] - Typed encoded hash
//! - [`operations`] - Key derivation, salt generation, verification, digests

pub mod codec;
pub mod error;
pub mod operations;
pub mod params;
pub mod types;
pub mod version;

// Re-export commonly used items
pub use error::{PhcError, PhcResult};
pub use version::{Argon2id, PhcAlgorithm, SUPPORTED_VERSION};
