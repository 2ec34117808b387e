//! Password hashing and verification.
//!
//! [`PasswordHasher`] ties the codec to a KDF and a random source:
//!
//! - `hash` draws a fresh salt, derives a key with the configured
//!   [`ParameterSet`] and returns the [`EncodedHash`].
//! - `verify` decodes a stored hash, re-derives a key with the parameters
//!   *embedded in that hash* and compares the two keys in constant time.
//!
//! Decode errors are returned unchanged from `verify`, so a caller can tell a
//! wrong password (`Ok(false)`) from a corrupted stored hash (`Err(_)`).
//!
//! # Example
//!
//! ```rust
//! use phc_hash::{ParameterSet, PasswordHasher};
//!
//! let params = ParameterSet::new(1024, 1, 1, 16, 32).expect("valid params");
//! let hasher = PasswordHasher::new(params);
//!
//! let stored = hasher.hash("hunter2").expect("hash should succeed").to_string();
//!
//! assert!(hasher.verify("hunter2", &stored).expect("well-formed hash"));
//! assert!(!hasher.verify("hunter3", &stored).expect("well-formed hash"));
//! ```

use subtle::ConstantTimeEq;

use crate::core::codec;
use crate::core::error::PhcResult;
use crate::core::operations::kdf::{Argon2idKdf, KeyDerivation};
use crate::core::operations::random::{random_bytes, OsRandom, RandomSource};
use crate::core::params::ParameterSet;
use crate::core::types::EncodedHash;

/// Hashes and verifies passwords with a fixed parameter set.
///
/// The parameter set only governs new hashes; verification always uses the
/// parameters decoded from the stored hash, so hashes made under older
/// settings keep verifying after the configuration changes.
#[derive(Debug, Clone, Default)]
pub struct PasswordHasher<K = Argon2idKdf, R = OsRandom> {
    params: ParameterSet,
    kdf: K,
    rng: R,
}

impl PasswordHasher {
    /// Creates a hasher using Argon2id and the OS random source.
    #[must_use]
    pub const fn new(params: ParameterSet) -> Self {
        Self {
            params,
            kdf: Argon2idKdf,
            rng: OsRandom,
        }
    }
}

impl<K: KeyDerivation, R: RandomSource> PasswordHasher<K, R> {
    /// Creates a hasher with custom KDF and random source implementations.
    #[must_use]
    pub const fn with_parts(params: ParameterSet, kdf: K, rng: R) -> Self {
        Self { params, kdf, rng }
    }

    /// The parameters used for new hashes.
    #[must_use]
    pub const fn params(&self) -> &ParameterSet {
        &self.params
    }

    /// Hashes `plaintext` with a fresh random salt.
    ///
    /// # Errors
    ///
    /// Returns `PhcError::RandomSourceFailure` if no salt could be generated
    /// and `PhcError::KeyDerivationFailed` if the KDF rejects the parameters.
    pub fn hash(&self, plaintext: impl AsRef<[u8]>) -> PhcResult<EncodedHash> {
        let salt = random_bytes(&self.rng, self.params.salt_length())?;
        let key = self.kdf.derive(plaintext.as_ref(), &salt, &self.params)?;

        tracing::debug!(
            memory_kib = self.params.memory_kib(),
            iterations = self.params.iterations(),
            parallelism = self.params.parallelism(),
            "created password hash"
        );

        EncodedHash::from_parts(&self.params, salt, key.to_vec())
    }

    /// Checks `plaintext` against a stored PHC string.
    ///
    /// Returns `Ok(true)` only if the re-derived key equals the stored key.
    ///
    /// The costs embedded in `encoded` are used as-is, including `m=`, which
    /// is allocated in KiB. Only pass hashes from storage you control: a
    /// string such as `m=4294967295` asks for about 4 TiB. Callers accepting
    /// hashes from elsewhere should check [`codec::decode`]'s parameters
    /// against their own limits first.
    ///
    /// # Errors
    ///
    /// Returns `PhcError::MalformedHash` or `PhcError::IncompatibleVersion`
    /// if `encoded` cannot be decoded, and `PhcError::KeyDerivationFailed` if
    /// the decoded parameters are rejected by the KDF.
    pub fn verify(&self, plaintext: impl AsRef<[u8]>, encoded: &str) -> PhcResult<bool> {
        let (params, salt, key) = codec::decode(encoded)?;
        verify_decoded(&self.kdf, plaintext.as_ref(), &params, &salt, &key)
    }

    /// Returns true if `encoded` was created with a different cost than the
    /// parameters this hasher would use today.
    ///
    /// # Errors
    ///
    /// Returns the decode error if `encoded` is not a valid PHC string.
    pub fn needs_rehash(&self, encoded: &str) -> PhcResult<bool> {
        let (params, _, _) = codec::decode(encoded)?;
        Ok(!params.same_cost(&self.params))
    }
}

/// Hashes `plaintext` with Argon2id, the OS random source and `params`,
/// returning the PHC string.
///
/// # Errors
///
/// See [`PasswordHasher::hash`].
pub fn hash_password(plaintext: impl AsRef<[u8]>, params: &ParameterSet) -> PhcResult<String> {
    PasswordHasher::new(*params)
        .hash(plaintext)
        .map(|hash| hash.to_string())
}

/// Checks `plaintext` against a stored PHC string using Argon2id.
///
/// The stored costs are trusted; see [`PasswordHasher::verify`].
///
/// # Errors
///
/// See [`PasswordHasher::verify`].
pub fn verify_password(plaintext: impl AsRef<[u8]>, encoded: &str) -> PhcResult<bool> {
    let (params, salt, key) = codec::decode(encoded)?;
    verify_decoded(&Argon2idKdf, plaintext.as_ref(), &params, &salt, &key)
}

fn verify_decoded<K: KeyDerivation + ?Sized>(
    kdf: &K,
    plaintext: &[u8],
    params: &ParameterSet,
    salt: &[u8],
    expected: &[u8],
) -> PhcResult<bool> {
    // `params.key_length()` was taken from `expected`, so both slices have
    // the same length and `ct_eq` compares every byte.
    let derived = kdf.derive(plaintext, salt, params)?;
    let matched: bool = derived.as_slice().ct_eq(expected).into();

    tracing::debug!(
        memory_kib = params.memory_kib(),
        iterations = params.iterations(),
        parallelism = params.parallelism(),
        matched,
        "verified password hash"
    );

    Ok(matched)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::core::error::PhcError;

    const PASSWORD: &str = "strongP@S$w0rd";

    // Use minimal params for fast tests
    fn test_params() -> ParameterSet {
        ParameterSet::new(1024, 1, 1, 16, 32).unwrap()
    }

    fn test_hasher() -> PasswordHasher {
        PasswordHasher::new(test_params())
    }

    /// Writes a fixed byte into every salt.
    struct FixedSource(u8);

    impl RandomSource for FixedSource {
        fn fill_bytes(&self, dest: &mut [u8]) -> PhcResult<()> {
            dest.fill(self.0);
            Ok(())
        }
    }

    struct FailingSource;

    impl RandomSource for FailingSource {
        fn fill_bytes(&self, _dest: &mut [u8]) -> PhcResult<()> {
            Err(PhcError::RandomSourceFailure)
        }
    }

    #[test]
    fn test_verify_true() -> PhcResult<()> {
        let hasher = test_hasher();
        let encoded = hasher.hash(PASSWORD)?.to_string();
        assert!(hasher.verify(PASSWORD, &encoded)?);
        Ok(())
    }

    #[test]
    fn test_verify_false() -> PhcResult<()> {
        let hasher = test_hasher();
        let encoded = hasher.hash(PASSWORD)?.to_string();
        assert!(!hasher.verify(format!("{PASSWORD}1"), &encoded)?);
        Ok(())
    }

    #[test]
    fn test_hash_twice_gives_distinct_salts() -> PhcResult<()> {
        let hasher = test_hasher();
        let first = hasher.hash(PASSWORD)?.to_string();
        let second = hasher.hash(PASSWORD)?.to_string();

        assert_ne!(first, second);
        assert!(hasher.verify(PASSWORD, &first)?);
        assert!(hasher.verify(PASSWORD, &second)?);
        Ok(())
    }

    #[test]
    fn test_hash_layout() -> PhcResult<()> {
        let hash = test_hasher().hash(PASSWORD)?;
        assert_eq!(hash.salt().len(), 16);
        assert_eq!(hash.key().len(), 32);
        assert!(hash
            .to_string()
            .starts_with("$argon2id$v=19$m=1024,t=1,p=1$"));
        Ok(())
    }

    #[test]
    fn test_hash_with_fixed_salt_matches_vector() -> PhcResult<()> {
        let params = ParameterSet::new(1024, 2, 2, 16, 32)?;
        let hasher = PasswordHasher::with_parts(params, Argon2idKdf, FixedSource(0xff));
        assert_eq!(
            hasher.hash(PASSWORD)?.to_string(),
            "$argon2id$v=19$m=1024,t=2,p=2$/////////////////////w$Llr75XDb0OCP9MrF1FJ8ClzRMUFpkGglQ4X/vP0e3aU"
        );
        Ok(())
    }

    #[test]
    fn test_random_failure_propagates() {
        let hasher = PasswordHasher::with_parts(test_params(), Argon2idKdf, FailingSource);
        assert!(matches!(
            hasher.hash(PASSWORD),
            Err(PhcError::RandomSourceFailure)
        ));
    }

    #[test]
    fn test_verify_uses_decoded_params() -> PhcResult<()> {
        let old = PasswordHasher::new(ParameterSet::new(512, 2, 1, 8, 16)?);
        let encoded = old.hash(PASSWORD)?.to_string();

        // A hasher configured differently still verifies the old hash.
        assert!(test_hasher().verify(PASSWORD, &encoded)?);
        assert!(verify_password(PASSWORD, &encoded)?);
        Ok(())
    }

    #[test]
    fn test_stored_costs_visible_before_verify() -> PhcResult<()> {
        let stored = "$argon2id$v=19$m=4294967295,t=1,p=1$c29tZXNhbHRzb21lc2FsdA$FiU+I6KbINfHoMBfkVDnS6qmzxgy7cg41IT8JQoCvvk";

        // A caller capping memory can reject this without running the KDF.
        let (params, _, _) = codec::decode(stored)?;
        assert_eq!(params.memory_kib(), u32::MAX);
        assert!(params.memory_kib() > test_params().memory_kib());
        assert!(test_hasher().needs_rehash(stored)?);
        Ok(())
    }

    #[test]
    fn test_verify_propagates_decode_errors() {
        let hasher = test_hasher();
        assert!(matches!(
            hasher.verify(PASSWORD, ""),
            Err(PhcError::MalformedHash)
        ));
        assert!(matches!(
            hasher.verify(
                PASSWORD,
                "$argon2id$v=16$m=1024,t=1,p=1$c29tZXNhbHRzb21lc2FsdA$FiU+I6KbINfHoMBfkVDnS6qmzxgy7cg41IT8JQoCvvk"
            ),
            Err(PhcError::IncompatibleVersion { found: 16 })
        ));
    }

    #[test]
    fn test_mutated_key_is_mismatch_not_error() -> PhcResult<()> {
        let hasher = test_hasher();
        let encoded = hasher.hash(PASSWORD)?.to_string();

        // Flip the first character of the key field; it stays valid base64.
        let key_start = encoded.rfind('$').map_or(0, |i| i + 1);
        let mut mutated = encoded.clone();
        let replacement = if encoded[key_start..].starts_with('A') { "B" } else { "A" };
        mutated.replace_range(key_start..=key_start, replacement);

        assert_ne!(mutated, encoded);
        assert!(!hasher.verify(PASSWORD, &mutated)?);
        Ok(())
    }

    #[test]
    fn test_free_functions() -> PhcResult<()> {
        let encoded = hash_password(PASSWORD, &test_params())?;
        assert!(verify_password(PASSWORD, &encoded)?);
        assert!(!verify_password("wrong", &encoded)?);
        Ok(())
    }

    #[test]
    fn test_needs_rehash() -> PhcResult<()> {
        let hasher = test_hasher();
        let current = hasher.hash(PASSWORD)?.to_string();
        assert!(!hasher.needs_rehash(&current)?);

        let stronger = PasswordHasher::new(ParameterSet::new(2048, 1, 1, 16, 32)?);
        assert!(stronger.needs_rehash(&current)?);
        Ok(())
    }

    #[test]
    fn test_hasher_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<PasswordHasher>();
    }
}
