// src/crypto/random.rs
use rand::distributions::{Distribution, Uniform};
use rand_core::{CryptoRng, OsRng, RngCore};

use super::{CryptoError, Result};

/// Bounded random integers drawn from a cryptographically secure source.
///
/// Reduction to a range goes through rand's `Uniform`, which rejects
/// out-of-zone draws instead of taking a plain remainder, so every value in
/// `[0, bound)` is equally likely. `OsRng` is stateless and safe to use from
/// any number of threads at once.
#[derive(Debug, Clone)]
pub struct SecureRandom<R = OsRng> {
    rng: R,
}

impl SecureRandom<OsRng> {
    pub fn new() -> Self {
        Self { rng: OsRng }
    }
}

impl Default for SecureRandom<OsRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: RngCore + CryptoRng> SecureRandom<R> {
    /// Wrap a specific CSPRNG, e.g. a seeded `StdRng` for reproducible runs.
    pub fn from_rng(rng: R) -> Self {
        Self { rng }
    }

    /// Returns an integer in `[0, bound)`.
    pub fn uniform_int(&mut self, bound: usize) -> Result<usize> {
        if bound == 0 {
            return Err(CryptoError::InvalidArgument(
                "random bound must be positive".to_string(),
            ));
        }

        Ok(Uniform::from(0..bound).sample(&mut self.rng))
    }

    /// Pick one element uniformly.
    pub fn choose<T: Copy>(&mut self, items: &[T]) -> Result<T> {
        let index = self.uniform_int(items.len())?;
        Ok(items[index])
    }

    /// In-place Fisher-Yates shuffle, walking from the last index down to 1.
    pub fn shuffle<T>(&mut self, items: &mut [T]) -> Result<()> {
        for i in (1..items.len()).rev() {
            let j = self.uniform_int(i + 1)?;
            items.swap(i, j);
        }
        Ok(())
    }

    pub fn try_fill_bytes(&mut self, dest: &mut [u8]) -> std::result::Result<(), rand_core::Error> {
        self.rng.try_fill_bytes(dest)
    }
}
