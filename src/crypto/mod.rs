// src/crypto/mod.rs
use thiserror::Error;

pub mod digest;
pub mod random;

pub use digest::{digest, digest_blocking, Pbkdf2Hash};
pub use random::SecureRandom;

#[derive(Debug, Error)]
pub enum CryptoError {
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Digest error: {0}")]
    DigestError(String),

    #[error("Invalid data format: {0}")]
    InvalidFormat(String),
}

pub type Result<T> = std::result::Result<T, CryptoError>;
