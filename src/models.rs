// src/models.rs
use serde::{Serialize, Deserialize};
use std::fmt;

use crate::generators::charset::{CharacterClass, DEFAULT_SYMBOLS};

// Password generation policy
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PasswordPolicy {
    pub length: usize,
    pub include_uppercase: bool,
    pub include_lowercase: bool,
    pub include_numbers: bool,
    pub include_symbols: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom_symbols: Option<String>,
}

impl Default for PasswordPolicy {
    fn default() -> Self {
        Self {
            length: 16,
            include_uppercase: true,
            include_lowercase: true,
            include_numbers: true,
            include_symbols: true,
            custom_symbols: Some(DEFAULT_SYMBOLS.to_string()),
        }
    }
}

impl PasswordPolicy {
    /// Enabled character classes in their fixed order
    /// (uppercase, lowercase, numbers, symbols).
    pub fn enabled_classes(&self) -> Vec<CharacterClass> {
        CharacterClass::ALL
            .into_iter()
            .filter(|class| self.is_enabled(*class))
            .collect()
    }

    pub fn is_enabled(&self, class: CharacterClass) -> bool {
        match class {
            CharacterClass::Uppercase => self.include_uppercase,
            CharacterClass::Lowercase => self.include_lowercase,
            CharacterClass::Numbers => self.include_numbers,
            CharacterClass::Symbols => self.include_symbols,
        }
    }

    /// The symbol alphabet in effect: the custom set unless it is empty or absent.
    pub fn symbol_set(&self) -> &str {
        match self.custom_symbols.as_deref() {
            Some(symbols) if !symbols.is_empty() => symbols,
            _ => DEFAULT_SYMBOLS,
        }
    }

    /// Output length after widening for mandatory seed characters.
    pub fn effective_length(&self) -> usize {
        self.length.max(self.enabled_classes().len())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StrengthTier {
    Weak,
    Fair,
    Good,
    Strong,
    Excellent,
}

impl StrengthTier {
    pub fn percentage(&self) -> u8 {
        match self {
            StrengthTier::Weak => 20,
            StrengthTier::Fair => 40,
            StrengthTier::Good => 60,
            StrengthTier::Strong => 80,
            StrengthTier::Excellent => 100,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            StrengthTier::Weak => "weak",
            StrengthTier::Fair => "fair",
            StrengthTier::Good => "good",
            StrengthTier::Strong => "strong",
            StrengthTier::Excellent => "excellent",
        }
    }
}

impl fmt::Display for StrengthTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StrengthResult {
    pub entropy_bits: f64,
    pub tier: StrengthTier,
    pub display_percentage: u8,
}

// Verification digests for one generated password
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DigestSet {
    pub sha256: String,
    pub sha512: String,
    pub pbkdf2: String,
}
