//! Argon2id cost parameters.
//!
//! A [`ParameterSet`] is the immutable record of the five tunable KDF
//! inputs. New hashes are produced with whatever set the caller configures;
//! hashes decoded from storage carry their own set, whose salt and key
//! lengths are always taken from the decoded bytes.
//!
//! # Presets
//!
//! | Preset | Memory | Iterations | Parallelism |
//! |--------|--------|------------|-------------|
//! | `default()` | 64 MiB | 3 | 2 |
//! | `interactive()` | 64 MiB | 2 | 1 |
//! | `moderate()` | 256 MiB | 3 | 1 |
//! | `sensitive()` | 1 GiB | 4 | 1 |
//!
//! All presets use a 16-byte salt and a 32-byte key.

use crate::core::error::{PhcError, PhcResult};

/// Default salt length in bytes.
pub const DEFAULT_SALT_LENGTH: u32 = 16;

/// Default derived key length in bytes.
pub const DEFAULT_KEY_LENGTH: u32 = 32;

/// Argon2id cost parameters plus salt and key lengths.
///
/// Every field is positive. Use [`ParameterSet::new`] to build a custom set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "RawParameterSet"))]
pub struct ParameterSet {
    memory_kib: u32,
    iterations: u32,
    parallelism: u8,
    salt_length: u32,
    key_length: u32,
}

impl Default for ParameterSet {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl ParameterSet {
    /// Recommended parameters for new hashes.
    /// - Memory: 64 MiB
    /// - Iterations: 3
    /// - Parallelism: 2
    pub const DEFAULT: Self = Self {
        memory_kib: 64 * 1024,
        iterations: 3,
        parallelism: 2,
        salt_length: DEFAULT_SALT_LENGTH,
        key_length: DEFAULT_KEY_LENGTH,
    };

    /// Creates a parameter set, rejecting zero values.
    ///
    /// # Errors
    ///
    /// Returns `PhcError::InvalidParameters` if any field is zero.
    pub fn new(
        memory_kib: u32,
        iterations: u32,
        parallelism: u8,
        salt_length: u32,
        key_length: u32,
    ) -> PhcResult<Self> {
        if memory_kib == 0 {
            return Err(PhcError::InvalidParameters("memory_kib must be positive"));
        }
        if iterations == 0 {
            return Err(PhcError::InvalidParameters("iterations must be positive"));
        }
        if parallelism == 0 {
            return Err(PhcError::InvalidParameters("parallelism must be positive"));
        }
        if salt_length == 0 {
            return Err(PhcError::InvalidParameters("salt_length must be positive"));
        }
        if key_length == 0 {
            return Err(PhcError::InvalidParameters("key_length must be positive"));
        }

        Ok(Self {
            memory_kib,
            iterations,
            parallelism,
            salt_length,
            key_length,
        })
    }

    /// Interactive profile: fast enough for user logins.
    #[must_use]
    pub const fn interactive() -> Self {
        Self {
            memory_kib: 64 * 1024,
            iterations: 2,
            parallelism: 1,
            salt_length: DEFAULT_SALT_LENGTH,
            key_length: DEFAULT_KEY_LENGTH,
        }
    }

    /// Moderate profile: balanced security and performance.
    #[must_use]
    pub const fn moderate() -> Self {
        Self {
            memory_kib: 256 * 1024,
            iterations: 3,
            parallelism: 1,
            salt_length: DEFAULT_SALT_LENGTH,
            key_length: DEFAULT_KEY_LENGTH,
        }
    }

    /// Sensitive profile: high security, slower computation.
    #[must_use]
    pub const fn sensitive() -> Self {
        Self {
            memory_kib: 1024 * 1024,
            iterations: 4,
            parallelism: 1,
            salt_length: DEFAULT_SALT_LENGTH,
            key_length: DEFAULT_KEY_LENGTH,
        }
    }

    /// Memory cost in KiB.
    #[must_use]
    pub const fn memory_kib(&self) -> u32 {
        self.memory_kib
    }

    /// Number of passes over memory.
    #[must_use]
    pub const fn iterations(&self) -> u32 {
        self.iterations
    }

    /// Number of parallel lanes.
    #[must_use]
    pub const fn parallelism(&self) -> u8 {
        self.parallelism
    }

    /// Salt length in bytes.
    #[must_use]
    pub const fn salt_length(&self) -> u32 {
        self.salt_length
    }

    /// Derived key length in bytes.
    #[must_use]
    pub const fn key_length(&self) -> u32 {
        self.key_length
    }

    /// Returns true if the three cost parameters and the key length match.
    ///
    /// Salt length is ignored: it does not change the work needed to verify.
    #[must_use]
    pub const fn same_cost(&self, other: &Self) -> bool {
        self.memory_kib == other.memory_kib
            && self.iterations == other.iterations
            && self.parallelism == other.parallelism
            && self.key_length == other.key_length
    }
}

#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct RawParameterSet {
    memory_kib: u32,
    iterations: u32,
    parallelism: u8,
    #[serde(default = "default_salt_length")]
    salt_length: u32,
    #[serde(default = "default_key_length")]
    key_length: u32,
}

#[cfg(feature = "serde")]
const fn default_salt_length() -> u32 {
    DEFAULT_SALT_LENGTH
}

#[cfg(feature = "serde")]
const fn default_key_length() -> u32 {
    DEFAULT_KEY_LENGTH
}

#[cfg(feature = "serde")]
impl TryFrom<RawParameterSet> for ParameterSet {
    type Error = PhcError;

    fn try_from(raw: RawParameterSet) -> Result<Self, Self::Error> {
        Self::new(
            raw.memory_kib,
            raw.iterations,
            raw.parallelism,
            raw.salt_length,
            raw.key_length,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let params = ParameterSet::default();
        assert_eq!(params.memory_kib(), 64 * 1024);
        assert_eq!(params.iterations(), 3);
        assert_eq!(params.parallelism(), 2);
        assert_eq!(params.salt_length(), 16);
        assert_eq!(params.key_length(), 32);
    }

    #[test]
    fn test_presets() {
        let interactive = ParameterSet::interactive();
        assert_eq!(interactive.memory_kib(), 64 * 1024);
        assert_eq!(interactive.iterations(), 2);
        assert_eq!(interactive.parallelism(), 1);

        let moderate = ParameterSet::moderate();
        assert_eq!(moderate.memory_kib(), 256 * 1024);
        assert_eq!(moderate.iterations(), 3);
        assert_eq!(moderate.parallelism(), 1);

        let sensitive = ParameterSet::sensitive();
        assert_eq!(sensitive.memory_kib(), 1024 * 1024);
        assert_eq!(sensitive.iterations(), 4);
        assert_eq!(sensitive.parallelism(), 1);
    }

    #[test]
    fn test_new_accepts_any_positive_values() -> PhcResult<()> {
        let params = ParameterSet::new(u32::MAX, u32::MAX, u8::MAX, 1, 1)?;
        assert_eq!(params.memory_kib(), u32::MAX);
        assert_eq!(params.parallelism(), u8::MAX);
        Ok(())
    }

    #[test]
    fn test_new_rejects_zero() {
        let cases = [
            (0, 3, 2, 16, 32),
            (1024, 0, 2, 16, 32),
            (1024, 3, 0, 16, 32),
            (1024, 3, 2, 0, 32),
            (1024, 3, 2, 16, 0),
        ];
        for (m, t, p, s, k) in cases {
            let result = ParameterSet::new(m, t, p, s, k);
            assert!(matches!(result, Err(PhcError::InvalidParameters(_))));
        }
    }

    #[test]
    fn test_same_cost_ignores_salt_length() -> PhcResult<()> {
        let a = ParameterSet::new(1024, 1, 1, 16, 32)?;
        let b = ParameterSet::new(1024, 1, 1, 8, 32)?;
        let c = ParameterSet::new(1024, 2, 1, 16, 32)?;
        assert!(a.same_cost(&b));
        assert!(!a.same_cost(&c));
        Ok(())
    }

    #[test]
    #[cfg(feature = "serde")]
    fn test_deserialize_from_config() -> Result<(), serde_json::Error> {
        let params: ParameterSet =
            serde_json::from_str(r#"{"memory_kib":19456,"iterations":2,"parallelism":1}"#)?;
        assert_eq!(params.memory_kib(), 19456);
        assert_eq!(params.iterations(), 2);
        assert_eq!(params.salt_length(), DEFAULT_SALT_LENGTH);
        assert_eq!(params.key_length(), DEFAULT_KEY_LENGTH);

        let zero: Result<ParameterSet, _> =
            serde_json::from_str(r#"{"memory_kib":0,"iterations":2,"parallelism":1}"#);
        assert!(zero.is_err());
        Ok(())
    }
}
