//! Argon2id key derivation.
//!
//! The KDF is consumed as a black box through the [`KeyDerivation`] trait.
//! [`Argon2idKdf`] is the production implementation backed by the `argon2`
//! crate; tests and callers may substitute their own.

use argon2::{Algorithm, Argon2, ParamsBuilder, Version};
use zeroize::Zeroizing;

use crate::core::error::{PhcError, PhcResult};
use crate::core::params::ParameterSet;

/// A deterministic password-based key derivation function.
pub trait KeyDerivation {
    /// Derives `params.key_length()` bytes from `password` and `salt` using
    /// the cost parameters in `params`.
    ///
    /// # Errors
    ///
    /// Returns `PhcError::KeyDerivationFailed` if the KDF rejects its inputs.
    fn derive(
        &self,
        password: &[u8],
        salt: &[u8],
        params: &ParameterSet,
    ) -> PhcResult<Zeroizing<Vec<u8>>>;
}

/// Argon2id, version 1.3.
///
/// The `argon2` crate enforces its own lower bounds on top of
/// [`ParameterSet`]'s positivity: memory of at least 8 KiB per lane, a salt
/// of at least 8 bytes and a key of at least 4 bytes. Inputs below those
/// bounds fail with `PhcError::KeyDerivationFailed`.
#[derive(Debug, Default, Clone, Copy)]
pub struct Argon2idKdf;

impl KeyDerivation for Argon2idKdf {
    fn derive(
        &self,
        password: &[u8],
        salt: &[u8],
        params: &ParameterSet,
    ) -> PhcResult<Zeroizing<Vec<u8>>> {
        let key_length =
            usize::try_from(params.key_length()).map_err(|_| PhcError::KeyDerivationFailed)?;

        let argon2_params = ParamsBuilder::new()
            .m_cost(params.memory_kib())
            .t_cost(params.iterations())
            .p_cost(u32::from(params.parallelism()))
            .output_len(key_length)
            .build()
            .map_err(|_| PhcError::KeyDerivationFailed)?;

        let argon2 = Argon2::new(Algorithm::Argon2id, Version::V0x13, argon2_params);

        let mut key = Zeroizing::new(vec![0u8; key_length]);
        argon2
            .hash_password_into(password, salt, &mut key)
            .map_err(|_| PhcError::KeyDerivationFailed)?;

        Ok(key)
    }
}
