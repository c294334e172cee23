// src/generators/mod.rs
use thiserror::Error;

use crate::crypto::CryptoError;

pub mod charset;
pub mod password;
pub mod presets;
pub mod strength;

pub use password::PasswordGenerator;
pub use presets::Preset;

#[derive(Debug, Error)]
pub enum PolicyError {
    #[error("At least one character type must be selected")]
    NoCharacterClassEnabled,

    #[error("Password length must be at least 1, got {0}")]
    InvalidLength(usize),

    #[error("Random source error: {0}")]
    Random(#[from] CryptoError),
}

pub type Result<T> = std::result::Result<T, PolicyError>;
