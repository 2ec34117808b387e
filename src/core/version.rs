//! Algorithm markers for the PHC string format.
//!
//! Each supported KDF variant is a zero-sized marker implementing the sealed
//! [`PhcAlgorithm`] trait, which carries the algorithm tag written into the
//! second field of an encoded hash and the single KDF version this crate
//! accepts for it.

use core::fmt::{self, Display};

mod private {
    pub trait Sealed {}
}

/// Trait for PHC algorithm markers.
///
/// This trait is sealed and cannot be implemented outside of this crate.
pub trait PhcAlgorithm: private::Sealed + Default + Clone + Copy + Send + Sync + 'static {
    /// The algorithm identifier (e.g., "argon2id").
    const TAG: &'static str;

    /// The KDF version number written as `v=<VERSION>`.
    const VERSION: u32;
}

/// Argon2id marker, the only variant produced and accepted by this crate.
///
/// Uses Argon2 version 1.3 (`0x13`, written as `v=19`).
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Argon2id;

impl private::Sealed for Argon2id {}

impl PhcAlgorithm for Argon2id {
    const TAG: &'static str = "argon2id";
    const VERSION: u32 = 0x13;
}

impl Display for Argon2id {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", Self::TAG)
    }
}

/// The KDF version number this crate writes and accepts.
pub const SUPPORTED_VERSION: u32 = Argon2id::VERSION;
