//! Ergonomic layer for password hashing.
//!
//! The prelude module re-exports the commonly used types together with the
//! [`HasherBuilder`] for configuring a hasher fluently.
//!
//! # Usage
//!
//! ```rust
//! use phc_hash::prelude::*;
//! ```

mod builders;

pub use builders::HasherBuilder;

// Re-export core types for convenience
pub use crate::core::codec::{decode, encode};
pub use crate::core::error::{PhcError, PhcResult};
pub use crate::core::operations::verify::{hash_password, verify_password, PasswordHasher};
pub use crate::core::params::ParameterSet;
pub use crate::core::types::EncodedHash;
pub use crate::core::version::{Argon2id, PhcAlgorithm, SUPPORTED_VERSION};
