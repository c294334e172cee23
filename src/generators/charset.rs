// src/generators/charset.rs
// Character set building for password generation.

use rand_core::{CryptoRng, RngCore};
use serde::{Deserialize, Serialize};

use super::{PolicyError, Result};
use crate::crypto::SecureRandom;
use crate::models::PasswordPolicy;

pub const UPPERCASE: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";
pub const LOWERCASE: &str = "abcdefghijklmnopqrstuvwxyz";
pub const NUMBERS: &str = "0123456789";
pub const DEFAULT_SYMBOLS: &str = "!@#$%^&*()_+-=[]{}|;:,.<>?";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CharacterClass {
    Uppercase,
    Lowercase,
    Numbers,
    Symbols,
}

impl CharacterClass {
    pub const ALL: [CharacterClass; 4] = [
        CharacterClass::Uppercase,
        CharacterClass::Lowercase,
        CharacterClass::Numbers,
        CharacterClass::Symbols,
    ];

    /// The alphabet this class draws from under `policy`.
    pub fn alphabet<'a>(&self, policy: &'a PasswordPolicy) -> &'a str {
        match self {
            CharacterClass::Uppercase => UPPERCASE,
            CharacterClass::Lowercase => LOWERCASE,
            CharacterClass::Numbers => NUMBERS,
            CharacterClass::Symbols => policy.symbol_set(),
        }
    }
}

/// Combined alphabet plus one mandatory seed character per enabled class.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Charset {
    pub alphabet: Vec<char>,
    pub required: Vec<char>,
}

/// Assemble the alphabet of every enabled class in class order and draw one
/// seed character from each class's own alphabet.
pub fn build<R: RngCore + CryptoRng>(policy: &PasswordPolicy, rng: &mut SecureRandom<R>) -> Result<Charset> {
    let mut alphabet = Vec::new();
    let mut required = Vec::new();

    for class in policy.enabled_classes() {
        let chars: Vec<char> = class.alphabet(policy).chars().collect();
        required.push(rng.choose(&chars)?);
        alphabet.extend(chars);
    }

    if alphabet.is_empty() {
        return Err(PolicyError::NoCharacterClassEnabled);
    }

    Ok(Charset { alphabet, required })
}

/// Size of the combined alphabet (for entropy calculation).
pub fn size(policy: &PasswordPolicy) -> usize {
    policy
        .enabled_classes()
        .iter()
        .map(|class| class.alphabet(policy).chars().count())
        .sum()
}
