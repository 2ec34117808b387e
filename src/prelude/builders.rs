//! Builder for password hashers.
//!
//! [`HasherBuilder`] starts from the recommended defaults or a preset and
//! lets individual parameters be overridden before building a
//! [`PasswordHasher`].
//!
//! # Example
//!
//! ```rust
//! use phc_hash::prelude::*;
//!
//! // Use a preset profile
//! let hasher = HasherBuilder::interactive().build().expect("valid params");
//! assert_eq!(hasher.params().memory_kib(), 64 * 1024);
//!
//! // Or customize parameters
//! let hasher = HasherBuilder::new()
//!     .memory_kib(1024)
//!     .iterations(1)
//!     .parallelism(1)
//!     .build()
//!     .expect("valid params");
//!
//! let stored = hasher.hash("password").expect("hash should succeed").to_string();
//! assert!(hasher.verify("password", &stored).expect("well-formed hash"));
//! ```

use crate::core::error::PhcResult;
use crate::core::operations::verify::PasswordHasher;
use crate::core::params::ParameterSet;

/// Fluent builder for [`PasswordHasher`].
#[derive(Debug, Clone, Copy)]
pub struct HasherBuilder {
    memory_kib: u32,
    iterations: u32,
    parallelism: u8,
    salt_length: u32,
    key_length: u32,
}

impl Default for HasherBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl HasherBuilder {
    /// Creates a builder with the recommended default parameters
    /// (64 MiB, 3 iterations, 2 lanes, 16-byte salt, 32-byte key).
    #[must_use]
    pub const fn new() -> Self {
        Self::from_params(&ParameterSet::DEFAULT)
    }

    /// Interactive profile: 64 MiB, 2 iterations, 1 lane.
    #[must_use]
    pub const fn interactive() -> Self {
        Self::from_params(&ParameterSet::interactive())
    }

    /// Moderate profile: 256 MiB, 3 iterations, 1 lane.
    #[must_use]
    pub const fn moderate() -> Self {
        Self::from_params(&ParameterSet::moderate())
    }

    /// Sensitive profile: 1 GiB, 4 iterations, 1 lane.
    #[must_use]
    pub const fn sensitive() -> Self {
        Self::from_params(&ParameterSet::sensitive())
    }

    /// Starts from an existing parameter set, e.g. one loaded from config.
    #[must_use]
    pub const fn from_params(params: &ParameterSet) -> Self {
        Self {
            memory_kib: params.memory_kib(),
            iterations: params.iterations(),
            parallelism: params.parallelism(),
            salt_length: params.salt_length(),
            key_length: params.key_length(),
        }
    }

    /// Sets the memory cost in KiB.
    #[must_use]
    pub const fn memory_kib(mut self, memory_kib: u32) -> Self {
        self.memory_kib = memory_kib;
        self
    }

    /// Sets the number of iterations.
    #[must_use]
    pub const fn iterations(mut self, iterations: u32) -> Self {
        self.iterations = iterations;
        self
    }

    /// Sets the number of lanes.
    #[must_use]
    pub const fn parallelism(mut self, parallelism: u8) -> Self {
        self.parallelism = parallelism;
        self
    }

    /// Sets the salt length in bytes.
    #[must_use]
    pub const fn salt_length(mut self, salt_length: u32) -> Self {
        self.salt_length = salt_length;
        self
    }

    /// Sets the derived key length in bytes.
    #[must_use]
    pub const fn key_length(mut self, key_length: u32) -> Self {
        self.key_length = key_length;
        self
    }

    /// Validates the parameters.
    ///
    /// # Errors
    ///
    /// Returns `PhcError::InvalidParameters` if any value is zero.
    pub fn to_params(&self) -> PhcResult<ParameterSet> {
        ParameterSet::new(
            self.memory_kib,
            self.iterations,
            self.parallelism,
            self.salt_length,
            self.key_length,
        )
    }

    /// Builds a hasher using Argon2id and the OS random source.
    ///
    /// # Errors
    ///
    /// Returns `PhcError::InvalidParameters` if any value is zero.
    pub fn build(self) -> PhcResult<PasswordHasher> {
        Ok(PasswordHasher::new(self.to_params()?))
    }
}
