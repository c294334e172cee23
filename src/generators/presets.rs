// src/generators/presets.rs
use serde::Serialize;

use super::charset::DEFAULT_SYMBOLS;
use crate::models::PasswordPolicy;

pub const CONSERVATIVE_SYMBOLS: &str = "!@#$%&*";
pub const STANDARD_SYMBOLS: &str = DEFAULT_SYMBOLS;
pub const MAXIMUM_SYMBOLS: &str = "!@#$%^&*()_+-=[]{}|;:,.<>?/~`'\"\\ ";
pub const ALPHANUMERIC_SYMBOLS: &str = "";

/// A named, fixed password policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Preset {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub length: usize,
    pub include_uppercase: bool,
    pub include_lowercase: bool,
    pub include_numbers: bool,
    pub include_symbols: bool,
    pub symbols: &'static str,
}

pub const PRESETS: [Preset; 6] = [
    Preset {
        id: "conservative",
        name: "Conservative",
        description: "Safe for most systems - basic symbols only",
        length: 16,
        include_uppercase: true,
        include_lowercase: true,
        include_numbers: true,
        include_symbols: true,
        symbols: CONSERVATIVE_SYMBOLS,
    },
    Preset {
        id: "standard",
        name: "Standard Security",
        description: "Balanced security - commonly accepted symbols",
        length: 20,
        include_uppercase: true,
        include_lowercase: true,
        include_numbers: true,
        include_symbols: true,
        symbols: STANDARD_SYMBOLS,
    },
    Preset {
        id: "maximum",
        name: "Maximum Security",
        description: "Highest entropy - all printable symbols",
        length: 24,
        include_uppercase: true,
        include_lowercase: true,
        include_numbers: true,
        include_symbols: true,
        symbols: MAXIMUM_SYMBOLS,
    },
    Preset {
        id: "alphanumeric",
        name: "Alphanumeric Only",
        description: "No symbols - compatible with restrictive systems",
        length: 24,
        include_uppercase: true,
        include_lowercase: true,
        include_numbers: true,
        include_symbols: false,
        symbols: ALPHANUMERIC_SYMBOLS,
    },
    Preset {
        id: "pin",
        name: "PIN Code",
        description: "Numbers only - for PIN requirements",
        length: 6,
        include_uppercase: false,
        include_lowercase: false,
        include_numbers: true,
        include_symbols: false,
        symbols: ALPHANUMERIC_SYMBOLS,
    },
    Preset {
        id: "passphrase",
        name: "Long Passphrase",
        description: "Extended length for maximum security",
        length: 32,
        include_uppercase: true,
        include_lowercase: true,
        include_numbers: true,
        include_symbols: true,
        symbols: STANDARD_SYMBOLS,
    },
];

impl Preset {
    pub fn all() -> &'static [Preset] {
        &PRESETS
    }

    pub fn by_id(id: &str) -> Option<&'static Preset> {
        PRESETS.iter().find(|preset| preset.id.eq_ignore_ascii_case(id))
    }

    pub fn policy(&self) -> PasswordPolicy {
        PasswordPolicy {
            length: self.length,
            include_uppercase: self.include_uppercase,
            include_lowercase: self.include_lowercase,
            include_numbers: self.include_numbers,
            include_symbols: self.include_symbols,
            custom_symbols: Some(self.symbols.to_string()),
        }
    }

    /// True when `policy` is exactly this preset (length, class flags and symbol set).
    pub fn matches(&self, policy: &PasswordPolicy) -> bool {
        policy.length == self.length
            && policy.include_uppercase == self.include_uppercase
            && policy.include_lowercase == self.include_lowercase
            && policy.include_numbers == self.include_numbers
            && policy.include_symbols == self.include_symbols
            && policy.custom_symbols.as_deref().unwrap_or("") == self.symbols
    }
}

/// The preset `policy` currently corresponds to, if any.
pub fn matching(policy: &PasswordPolicy) -> Option<&'static Preset> {
    PRESETS.iter().find(|preset| preset.matches(policy))
}
