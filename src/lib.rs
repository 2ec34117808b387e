//! Argon2id password hashing with a strict PHC string codec.
//!
//! Every hash this crate produces is a self-describing string carrying the
//! algorithm, the KDF version, the cost parameters, the salt and the derived
//! key. Verification decodes that string and recomputes the key with exactly
//! the parameters it was created with, so the cost settings for new hashes
//! can change without invalidating stored ones.
//!
//! # Quick Start
//!
//! ```rust
//! use phc_hash::{hash_password, verify_password, ParameterSet};
//!
//! // Small parameters keep the example fast; use `ParameterSet::default()`
//! // in production.
//! let params = ParameterSet::new(1024, 1, 1, 16, 32).expect("valid params");
//!
//! let stored = hash_password("strongP@S$w0rd", &params).expect("hash should succeed");
//! assert!(stored.starts_with("$argon2id$v=19$m=1024,t=1,p=1$"));
//!
//! assert!(verify_password("strongP@S$w0rd", &stored).expect("well-formed hash"));
//! assert!(!verify_password("strongP@S$w0rd1", &stored).expect("well-formed hash"));
//! ```
//!
//! # Format
//!
//! ```text
//! $argon2id$v=19$m=<memory KiB>,t=<iterations>,p=<parallelism>$<salt>$<key>
//! ```
//!
//! `<salt>` and `<key>` are standard base64 without padding. Their lengths
//! are not written separately; they are recovered from the decoded bytes.
//!
//! # Errors
//!
//! | Error | Meaning |
//! |-------|---------|
//! | `MalformedHash` | The string is not a well-formed PHC hash |
//! | `IncompatibleVersion` | Well-formed, but not `v=19` |
//! | `RandomSourceFailure` | No salt could be generated |
//! | `KeyDerivationFailed` | Argon2 rejected the parameters |
//!
//! A wrong password is `Ok(false)`, never an error.
//!
//! # Security
//!
//! - Keys are compared in constant time
//! - Re-derived keys are zeroized on drop
//! - Debug output redacts key material
//! - No unsafe code
//!
//! # Modules
//!
//! - [`core`] - Core types and operations
//! - [`prelude`] - Ergonomic imports and builder (requires `prelude` feature)

pub mod core;

#[cfg(feature = "prelude")]
pub mod prelude;

// Re-export commonly used items at crate root
pub use core::codec::{decode, encode};
pub use core::error::{PhcError, PhcResult};
pub use core::operations::kdf::{Argon2idKdf, KeyDerivation};
pub use core::operations::random::{OsRandom, RandomSource};
pub use core::operations::verify::{hash_password, verify_password, PasswordHasher};
pub use core::params::ParameterSet;
pub use core::types::EncodedHash;
pub use core::version::{Argon2id, PhcAlgorithm, SUPPORTED_VERSION};

#[cfg(feature = "digest")]
pub use core::operations::digest::{hex_digest, sha1_concat, sha1_file, sha1_reader};
