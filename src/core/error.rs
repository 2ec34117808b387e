//! Error types for password hashing operations.
//!
//! This module provides a unified error type for hashing, verification and
//! PHC string decoding. Messages are deliberately short: a decode failure
//! never echoes the offending input back to the caller.

use thiserror::Error;

/// Errors that can occur when hashing, verifying or decoding a password hash.
#[derive(Debug, Error)]
pub enum PhcError {
    /// The encoded hash is not a well-formed PHC string.
    #[error("The encoded hash is not in the correct format")]
    MalformedHash,

    /// The encoded hash is well-formed but was produced by a KDF version
    /// this crate does not support.
    #[error("Incompatible Argon2 version: {found}")]
    IncompatibleVersion {
        /// The version number found in the encoded hash.
        found: u32,
    },

    /// The system random source failed to produce a salt.
    #[error("Random source failure")]
    RandomSourceFailure,

    /// The KDF rejected its inputs (cost parameters, salt or output length).
    #[error("Key derivation failed")]
    KeyDerivationFailed,

    /// A parameter set was constructed with an invalid value.
    #[error("Invalid hash parameters: {0}")]
    InvalidParameters(&'static str),

    /// Reading content for a digest failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for password hashing operations.
pub type PhcResult<T> = Result<T, PhcError>;
