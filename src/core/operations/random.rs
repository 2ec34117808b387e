//! Salt generation.

use rand_core::{OsRng, TryRngCore};

use crate::core::error::{PhcError, PhcResult};

/// A cryptographically secure source of random bytes.
///
/// Implementations must be safe to call concurrently from several threads.
pub trait RandomSource {
    /// Fills `dest` with random bytes.
    ///
    /// # Errors
    ///
    /// Returns `PhcError::RandomSourceFailure` if the entropy source fails.
    fn fill_bytes(&self, dest: &mut [u8]) -> PhcResult<()>;
}

/// The operating system CSPRNG.
#[derive(Debug, Default, Clone, Copy)]
pub struct OsRandom;

impl RandomSource for OsRandom {
    fn fill_bytes(&self, dest: &mut [u8]) -> PhcResult<()> {
        OsRng
            .try_fill_bytes(dest)
            .map_err(|_| PhcError::RandomSourceFailure)
    }
}

/// Returns `len` fresh random bytes from `source`.
pub(crate) fn random_bytes<R: RandomSource + ?Sized>(source: &R, len: u32) -> PhcResult<Vec<u8>> {
    let len = usize::try_from(len).map_err(|_| PhcError::RandomSourceFailure)?;
    let mut bytes = vec![0u8; len];
    source.fill_bytes(&mut bytes)?;
    Ok(bytes)
}
