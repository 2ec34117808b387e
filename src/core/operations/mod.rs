//! Password hashing operations.
//!
//! This module provides the operations built on top of the codec:
//!
//! - [`kdf`] - Key derivation (Argon2id)
//! - [`random`] - Salt generation (OS CSPRNG)
//! - [`verify`] - Hashing and constant-time verification
//! - [`digest`] - Plain content digests (requires the `digest` feature)

pub mod kdf;
pub mod random;
pub mod verify;

#[cfg(feature = "digest")]
pub mod digest;
