//! EncodedHash - A parsed, self-describing password hash.
//!
//! Format: `$argon2id$v=19$m={memory},t={iterations},p={parallelism}${salt}${key}`

use core::fmt::{self, Debug, Display};
use core::str::FromStr;

use crate::core::codec;
use crate::core::error::{PhcError, PhcResult};
use crate::core::params::ParameterSet;
use crate::core::version::SUPPORTED_VERSION;

/// A password hash together with everything needed to verify it.
///
/// Values are produced by [`PasswordHasher::hash`] or parsed from storage
/// with `TryFrom<&str>` or [`FromStr`]. The string form is written with
/// [`Display`] and is what callers persist.
///
/// # Example
///
/// ```rust
/// use phc_hash::EncodedHash;
///
/// let stored = "$argon2id$v=19$m=1024,t=1,p=1$c29tZXNhbHRzb21lc2FsdA$FiU+I6KbINfHoMBfkVDnS6qmzxgy7cg41IT8JQoCvvk";
/// let parsed = EncodedHash::try_from(stored).expect("valid hash");
///
/// assert_eq!(parsed.params().memory_kib(), 1024);
/// assert_eq!(parsed.salt(), b"somesaltsomesalt");
/// assert_eq!(parsed.to_string(), stored);
/// ```
///
/// [`PasswordHasher::hash`]: crate::core::operations::verify::PasswordHasher::hash
#[derive(Clone)]
pub struct EncodedHash {
    params: ParameterSet,
    salt: Vec<u8>,
    key: Vec<u8>,
}

impl EncodedHash {
    /// Assembles a hash from its parts, recomputing the salt and key lengths
    /// from the byte slices.
    ///
    /// # Errors
    ///
    /// Returns `PhcError::InvalidParameters` if `salt` or `key` is empty.
    pub fn from_parts(params: &ParameterSet, salt: Vec<u8>, key: Vec<u8>) -> PhcResult<Self> {
        let salt_length = u32::try_from(salt.len())
            .map_err(|_| PhcError::InvalidParameters("salt is too long"))?;
        let key_length = u32::try_from(key.len())
            .map_err(|_| PhcError::InvalidParameters("key is too long"))?;

        let params = ParameterSet::new(
            params.memory_kib(),
            params.iterations(),
            params.parallelism(),
            salt_length,
            key_length,
        )?;

        Ok(Self { params, salt, key })
    }

    /// The KDF version of this hash.
    #[must_use]
    pub const fn version(&self) -> u32 {
        SUPPORTED_VERSION
    }

    /// The parameters the hash was created with.
    #[must_use]
    pub const fn params(&self) -> &ParameterSet {
        &self.params
    }

    /// The raw salt bytes.
    #[must_use]
    pub fn salt(&self) -> &[u8] {
        &self.salt
    }

    /// The raw derived key bytes.
    #[must_use]
    pub fn key(&self) -> &[u8] {
        &self.key
    }

    /// Consumes the hash and returns (params, salt, key).
    #[must_use]
    pub fn into_parts(self) -> codec::DecodedParts {
        (self.params, self.salt, self.key)
    }
}

// =============================================================================
// Display (serialization to PHC string)
// =============================================================================

impl Display for EncodedHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&codec::encode(
            SUPPORTED_VERSION,
            &self.params,
            &self.salt,
            &self.key,
        ))
    }
}

// =============================================================================
// Debug
// =============================================================================

impl Debug for EncodedHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EncodedHash")
            .field("version", &SUPPORTED_VERSION)
            .field("params", &self.params)
            .field("salt_len", &self.salt.len())
            .field("key", &"[REDACTED]")
            .finish()
    }
}

// =============================================================================
// Parsing from PHC string
// =============================================================================

impl TryFrom<&str> for EncodedHash {
    type Error = PhcError;

    fn try_from(encoded: &str) -> Result<Self, Self::Error> {
        let (params, salt, key) = codec::decode(encoded)?;
        Ok(Self { params, salt, key })
    }
}

impl TryFrom<String> for EncodedHash {
    type Error = PhcError;

    fn try_from(encoded: String) -> Result<Self, Self::Error> {
        Self::try_from(encoded.as_str())
    }
}

impl FromStr for EncodedHash {
    type Err = PhcError;

    fn from_str(encoded: &str) -> Result<Self, Self::Err> {
        Self::try_from(encoded)
    }
}

// =============================================================================
// PartialEq
// =============================================================================

impl PartialEq for EncodedHash {
    fn eq(&self, other: &Self) -> bool {
        use subtle::ConstantTimeEq;
        self.params == other.params
            && bool::from(self.salt.ct_eq(&other.salt) & self.key.ct_eq(&other.key))
    }
}

impl Eq for EncodedHash {}
