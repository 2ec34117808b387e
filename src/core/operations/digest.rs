//! Plain content digests.
//!
//! Unparameterized pass-through hashing of streams, files and strings, with
//! lowercase hex output. SHA-1 is used for compatibility with existing
//! content fingerprints; it is not suitable for passwords or signatures.

use std::fs::File;
use std::io::{self, Read, Write};
use std::path::Path;

use sha1::{Digest, Sha1};

use crate::core::error::PhcResult;

/// Hashes everything readable from `reader` with `D` and returns lowercase hex.
///
/// # Errors
///
/// Returns `PhcError::Io` if reading fails.
pub fn hex_digest<D: Digest + Write, R: Read>(mut reader: R) -> PhcResult<String> {
    let mut hasher = D::new();
    io::copy(&mut reader, &mut hasher)?;
    Ok(hex::encode(hasher.finalize()))
}

/// SHA-1 of a stream, as lowercase hex.
///
/// # Errors
///
/// Returns `PhcError::Io` if reading fails.
pub fn sha1_reader<R: Read>(reader: R) -> PhcResult<String> {
    hex_digest::<Sha1, R>(reader)
}

/// SHA-1 of a file's contents, as lowercase hex.
///
/// # Errors
///
/// Returns `PhcError::Io` if the file cannot be opened or read.
pub fn sha1_file(path: impl AsRef<Path>) -> PhcResult<String> {
    let file = File::open(path)?;
    sha1_reader(file)
}

/// SHA-1 of the concatenation of `parts`, in order, as lowercase hex.
#[must_use]
pub fn sha1_concat<I, S>(parts: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<[u8]>,
{
    let mut hasher = Sha1::new();
    for part in parts {
        hasher.update(part.as_ref());
    }
    hex::encode(hasher.finalize())
}
