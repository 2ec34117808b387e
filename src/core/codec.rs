//! PHC string encoding and decoding.
//!
//! Encoded hashes follow the format:
//!
//! ```text
//! $argon2id$v=<version>$m=<memory>,t=<iterations>,p=<parallelism>$<salt>$<key>
//! ```
//!
//! where `<salt>` and `<key>` are standard-alphabet base64 without padding.
//! Splitting on `$` always yields exactly six fields, the first one empty.
//!
//! Salt and key lengths are not written anywhere: they are recovered from the
//! decoded byte counts. A field truncated to a shorter but still valid base64
//! string therefore decodes successfully and only fails later, at
//! verification.

use base64::prelude::*;

use crate::core::error::{PhcError, PhcResult};
use crate::core::params::ParameterSet;
use crate::core::version::{Argon2id, PhcAlgorithm, SUPPORTED_VERSION};

/// Separator between the fields of an encoded hash.
pub const FIELD_DELIMITER: char = '$';

/// Decoded components of a PHC string: (params, salt, key).
///
/// The salt and key lengths inside `params` equal the lengths of the two
/// byte vectors.
pub type DecodedParts = (ParameterSet, Vec<u8>, Vec<u8>);

/// Encodes a version, parameter set, salt and key as a PHC string.
///
/// The salt and key lengths recorded in `params` are not written; the
/// lengths of `salt` and `key` are what a decoder will recover.
///
/// # Example
///
/// ```rust
/// use phc_hash::core::codec::encode;
/// use phc_hash::core::params::ParameterSet;
///
/// let encoded = encode(19, &ParameterSet::default(), b"somesaltsomesalt", &[0u8; 32]);
/// assert!(encoded.starts_with("$argon2id$v=19$m=65536,t=3,p=2$c29tZXNhbHRzb21lc2FsdA$"));
/// ```
#[must_use]
pub fn encode(version: u32, params: &ParameterSet, salt: &[u8], key: &[u8]) -> String {
    format!(
        "${tag}$v={version}$m={memory},t={iterations},p={parallelism}${salt}${key}",
        tag = Argon2id::TAG,
        memory = params.memory_kib(),
        iterations = params.iterations(),
        parallelism = params.parallelism(),
        salt = BASE64_STANDARD_NO_PAD.encode(salt),
        key = BASE64_STANDARD_NO_PAD.encode(key),
    )
}

/// Decodes a PHC string into its parameter set, salt and key.
///
/// # Errors
///
/// Returns `PhcError::MalformedHash` if the string does not have exactly six
/// `$`-separated fields, names another algorithm, has a version or cost field
/// that does not match its exact pattern, carries a zero or out-of-range cost,
/// or has an empty or invalid base64 salt or key.
///
/// Returns `PhcError::IncompatibleVersion` if the string is well-formed up to
/// its version field but the version is not the supported one.
pub fn decode(encoded: &str) -> PhcResult<DecodedParts> {
    let fields: Vec<&str> = encoded.split(FIELD_DELIMITER).collect();

    let [marker, tag, version, costs, salt, key] = fields.as_slice() else {
        return Err(PhcError::MalformedHash);
    };

    if !marker.is_empty() || *tag != Argon2id::TAG {
        return Err(PhcError::MalformedHash);
    }

    let version = parse_version(version)?;
    if version != SUPPORTED_VERSION {
        return Err(PhcError::IncompatibleVersion { found: version });
    }

    let (memory_kib, iterations, parallelism) = parse_costs(costs)?;

    let salt = decode_bytes(salt)?;
    let key = decode_bytes(key)?;

    let params = ParameterSet::new(
        memory_kib,
        iterations,
        parallelism,
        byte_len(&salt)?,
        byte_len(&key)?,
    )
    .map_err(|_| PhcError::MalformedHash)?;

    Ok((params, salt, key))
}

/// Parses `v=<digits>`.
fn parse_version(field: &str) -> PhcResult<u32> {
    let digits = field.strip_prefix("v=").ok_or(PhcError::MalformedHash)?;
    parse_decimal(digits)
}

/// Parses `m=<digits>,t=<digits>,p=<digits>`.
fn parse_costs(field: &str) -> PhcResult<(u32, u32, u8)> {
    let mut parts = field.split(',');

    let memory_kib = parse_decimal(named_value(parts.next(), "m=")?)?;
    let iterations = parse_decimal(named_value(parts.next(), "t=")?)?;
    let parallelism = parse_decimal(named_value(parts.next(), "p=")?)?;

    if parts.next().is_some() {
        return Err(PhcError::MalformedHash);
    }

    Ok((memory_kib, iterations, parallelism))
}

fn named_value<'a>(part: Option<&'a str>, name: &str) -> PhcResult<&'a str> {
    part.and_then(|p| p.strip_prefix(name))
        .ok_or(PhcError::MalformedHash)
}

/// Parses a non-empty run of ASCII digits into `T`, rejecting signs,
/// whitespace, leading zeros and values that overflow `T`.
fn parse_decimal<T: core::str::FromStr>(digits: &str) -> PhcResult<T> {
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(PhcError::MalformedHash);
    }
    // One canonical spelling per value.
    if digits.len() > 1 && digits.starts_with('0') {
        return Err(PhcError::MalformedHash);
    }
    digits.parse().map_err(|_| PhcError::MalformedHash)
}

// The engine rejects non-zero trailing bits, so editing the final character
// of a field can turn a valid hash into `MalformedHash` rather than a
// mismatch. A lenient decoder would map both spellings to the same bytes and
// accept the edited string.
fn decode_bytes(field: &str) -> PhcResult<Vec<u8>> {
    let bytes = BASE64_STANDARD_NO_PAD
        .decode(field)
        .map_err(|_| PhcError::MalformedHash)?;

    if bytes.is_empty() {
        return Err(PhcError::MalformedHash);
    }

    Ok(bytes)
}

fn byte_len(bytes: &[u8]) -> PhcResult<u32> {
    u32::try_from(bytes.len()).map_err(|_| PhcError::MalformedHash)
}
