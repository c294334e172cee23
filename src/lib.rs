//! Password generation under character-class policies, entropy scoring and
//! verification digests.

pub mod cli;
pub mod core;
pub mod crypto;
pub mod generators;
pub mod models;
pub mod utils;

pub use crate::crypto::{CryptoError, Pbkdf2Hash, SecureRandom};
pub use crate::generators::{PasswordGenerator, PolicyError, Preset};
pub use crate::models::{DigestSet, PasswordPolicy, StrengthResult, StrengthTier};
