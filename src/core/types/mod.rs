//! Typed password hash values.
//!
//! - [`EncodedHash`] - Parsed PHC string (`$argon2id$v=19$m=..,t=..,p=..$salt$key`)

mod encoded;

pub use encoded::EncodedHash;
