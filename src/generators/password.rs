// src/generators/password.rs
use rand_core::{CryptoRng, OsRng, RngCore};

use super::{charset, PolicyError, Result};
use crate::crypto::SecureRandom;
use crate::models::PasswordPolicy;

pub struct PasswordGenerator<R = OsRng> {
    rng: SecureRandom<R>,
}

impl PasswordGenerator<OsRng> {
    pub fn new() -> Self {
        PasswordGenerator {
            rng: SecureRandom::new(),
        }
    }
}

impl Default for PasswordGenerator<OsRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: RngCore + CryptoRng> PasswordGenerator<R> {
    pub fn with_rng(rng: SecureRandom<R>) -> Self {
        PasswordGenerator { rng }
    }

    /// Generate a password containing at least one character of every enabled class.
    ///
    /// The output is `max(policy.length, enabled class count)` characters long:
    /// the seed characters are placed first, the rest is drawn from the combined
    /// alphabet, and the whole sequence is shuffled.
    pub fn generate_password(&mut self, policy: &PasswordPolicy) -> Result<String> {
        if policy.length == 0 {
            return Err(PolicyError::InvalidLength(policy.length));
        }

        let charset = charset::build(policy, &mut self.rng)?;
        let length = policy.length.max(charset.required.len());

        let mut password = Vec::with_capacity(length);
        password.extend_from_slice(&charset.required);
        for _ in charset.required.len()..length {
            password.push(self.rng.choose(&charset.alphabet)?);
        }

        self.rng.shuffle(&mut password)?;

        log::debug!(
            "Generated {}-character password from a {}-character alphabet",
            length,
            charset.alphabet.len()
        );

        Ok(password.into_iter().collect())
    }
}
