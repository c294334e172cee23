// src/crypto/digest.rs
use std::fmt;
use std::str::FromStr;

use pbkdf2::pbkdf2_hmac;
use sha2::{Digest, Sha256, Sha512};
use subtle::ConstantTimeEq;

use super::{CryptoError, Result, SecureRandom};
use crate::models::DigestSet;

pub const PBKDF2_ALGORITHM: &str = "pbkdf2_sha256";
pub const PBKDF2_ITERATIONS: u32 = 100_000;
pub const SALT_LEN: usize = 16;
pub const DERIVED_KEY_LEN: usize = 32;
/// Upper bound on the iteration count accepted from a parsed record.
pub const MAX_PBKDF2_ITERATIONS: u32 = 10 * PBKDF2_ITERATIONS;

pub fn sha256_hex(data: &[u8]) -> String {
    hex::encode(Sha256::digest(data))
}

pub fn sha512_hex(data: &[u8]) -> String {
    hex::encode(Sha512::digest(data))
}

/// A salted PBKDF2-HMAC-SHA256 derivation, rendered as
/// `pbkdf2_sha256$<iterations>$<saltHex>$<derivedHex>`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pbkdf2Hash {
    iterations: u32,
    salt: Vec<u8>,
    hash: Vec<u8>,
}

impl Pbkdf2Hash {
    /// Derive with a fresh 16-byte salt and the standard iteration count.
    pub fn generate(password: &[u8]) -> Result<Self> {
        let mut salt = [0u8; SALT_LEN];
        SecureRandom::new()
            .try_fill_bytes(&mut salt)
            .map_err(|e| CryptoError::DigestError(format!("Failed to generate salt: {}", e)))?;

        Self::derive(password, &salt, PBKDF2_ITERATIONS)
    }

    pub fn derive(password: &[u8], salt: &[u8], iterations: u32) -> Result<Self> {
        let hash = derive_key(password, salt, iterations, DERIVED_KEY_LEN)?;
        Ok(Self {
            iterations,
            salt: salt.to_vec(),
            hash,
        })
    }

    pub fn iterations(&self) -> u32 {
        self.iterations
    }

    pub fn salt(&self) -> &[u8] {
        &self.salt
    }

    pub fn hash(&self) -> &[u8] {
        &self.hash
    }

    /// Re-derive with this record's salt and iteration count and compare in constant time.
    pub fn verify(&self, password: &str) -> Result<bool> {
        let candidate = derive_key(password.as_bytes(), &self.salt, self.iterations, self.hash.len())?;
        Ok(candidate.ct_eq(&self.hash).into())
    }
}

impl fmt::Display for Pbkdf2Hash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}${}${}${}",
            PBKDF2_ALGORITHM,
            self.iterations,
            hex::encode(&self.salt),
            hex::encode(&self.hash)
        )
    }
}

impl FromStr for Pbkdf2Hash {
    type Err = CryptoError;

    fn from_str(s: &str) -> Result<Self> {
        let parts: Vec<&str> = s.trim().split('$').collect();
        let [algorithm, iterations, salt, hash] = parts.as_slice() else {
            return Err(CryptoError::InvalidFormat(
                "expected algorithm$iterations$salt$hash".to_string(),
            ));
        };

        if *algorithm != PBKDF2_ALGORITHM {
            return Err(CryptoError::InvalidFormat(format!(
                "unsupported algorithm '{}'",
                algorithm
            )));
        }

        let iterations: u32 = iterations
            .parse()
            .map_err(|_| CryptoError::InvalidFormat(format!("invalid iteration count '{}'", iterations)))?;
        if iterations == 0 {
            return Err(CryptoError::InvalidFormat("iteration count must be non-zero".to_string()));
        }
        if iterations > MAX_PBKDF2_ITERATIONS {
            return Err(CryptoError::InvalidFormat(format!(
                "iteration count {} exceeds the limit of {}",
                iterations, MAX_PBKDF2_ITERATIONS
            )));
        }

        let salt = hex::decode(salt)
            .map_err(|e| CryptoError::InvalidFormat(format!("invalid salt: {}", e)))?;
        let hash = hex::decode(hash)
            .map_err(|e| CryptoError::InvalidFormat(format!("invalid hash: {}", e)))?;
        if salt.is_empty() || hash.is_empty() {
            return Err(CryptoError::InvalidFormat("salt and hash must not be empty".to_string()));
        }

        Ok(Self {
            iterations,
            salt,
            hash,
        })
    }
}

fn derive_key(password: &[u8], salt: &[u8], iterations: u32, len: usize) -> Result<Vec<u8>> {
    if password.is_empty() {
        return Err(CryptoError::DigestError("zero-length key material".to_string()));
    }
    if salt.is_empty() {
        return Err(CryptoError::DigestError("salt must not be empty".to_string()));
    }
    if iterations == 0 {
        return Err(CryptoError::DigestError("PBKDF2 iterations must be non-zero".to_string()));
    }

    let mut output = vec![0u8; len];
    pbkdf2_hmac::<Sha256>(password, salt, iterations, &mut output);
    Ok(output)
}

/// Compute the SHA-256, SHA-512 and salted PBKDF2 digests of a password.
///
/// Either all three digests are produced or an error is returned.
pub fn digest_blocking(password: &str) -> Result<DigestSet> {
    let data = password.as_bytes();
    let pbkdf2 = Pbkdf2Hash::generate(data)?;

    log::debug!(
        "Computed {} digest with {} iterations",
        PBKDF2_ALGORITHM,
        pbkdf2.iterations()
    );

    Ok(DigestSet {
        sha256: sha256_hex(data),
        sha512: sha512_hex(data),
        pbkdf2: pbkdf2.to_string(),
    })
}

/// Same as [`digest_blocking`], with the PBKDF2 work moved off the async executor.
pub async fn digest(password: &str) -> Result<DigestSet> {
    let password = password.to_owned();
    tokio::task::spawn_blocking(move || digest_blocking(&password))
        .await
        .map_err(|e| CryptoError::DigestError(format!("Digest task failed: {}", e)))?
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sha_digests_match_known_vectors() {
        assert_eq!(
            sha256_hex(b"abc"),
            "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad"
        );
        assert_eq!(
            sha512_hex(b"abc"),
            "ddaf35a193617abacc417349ae20413112e6fa4e89a97ea20a9eeee64b55d39a\
             2192992a274fc1a836ba3c23a3feebbd454d4423643ce80e2a9ac94fa54ca49f"
        );
    }

    #[test]
    fn pbkdf2_matches_rfc7914_vector() {
        // PBKDF2-HMAC-SHA256, P="passwd", S="salt", c=1, dkLen=32 (prefix of the 64-byte vector).
        let record = Pbkdf2Hash::derive(b"passwd", b"salt", 1).unwrap();
        assert_eq!(
            hex::encode(record.hash()),
            "55ac046e56e3089fec1691c22544b605f94185216dde0465e68b9d57c20dacbc"
        );
    }

    #[test]
    fn record_round_trips_through_text() {
        let record = Pbkdf2Hash::derive(b"hunter2", &[0xab; SALT_LEN], 1000).unwrap();
        let text = record.to_string();
        assert!(text.starts_with("pbkdf2_sha256$1000$abababab"));

        let parsed: Pbkdf2Hash = text.parse().unwrap();
        assert_eq!(parsed, record);
        assert!(parsed.verify("hunter2").unwrap());
        assert!(!parsed.verify("hunter3").unwrap());
    }

    #[test]
    fn malformed_records_are_rejected() {
        for bad in [
            "",
            "pbkdf2_sha256$1000$abcd",
            "argon2$1000$abcd$abcd",
            "pbkdf2_sha256$many$abcd$abcd",
            "pbkdf2_sha256$0$abcd$abcd",
            "pbkdf2_sha256$1000$zz$abcd",
            "pbkdf2_sha256$1000$$abcd",
            "pbkdf2_sha256$1000$abcd$abcd$extra",
        ] {
            assert!(
                matches!(bad.parse::<Pbkdf2Hash>(), Err(CryptoError::InvalidFormat(_))),
                "accepted {bad:?}"
            );
        }
    }

    #[test]
    fn excessive_iteration_counts_are_rejected() {
        let salt = "ab".repeat(SALT_LEN);
        let hash = "cd".repeat(DERIVED_KEY_LEN);

        let at_limit = format!("pbkdf2_sha256${}${}${}", MAX_PBKDF2_ITERATIONS, salt, hash);
        assert_eq!(at_limit.parse::<Pbkdf2Hash>().unwrap().iterations(), MAX_PBKDF2_ITERATIONS);

        for iterations in [MAX_PBKDF2_ITERATIONS + 1, u32::MAX] {
            let record = format!("pbkdf2_sha256${}${}${}", iterations, salt, hash);
            assert!(matches!(
                record.parse::<Pbkdf2Hash>(),
                Err(CryptoError::InvalidFormat(_))
            ));
        }
    }

    #[test]
    fn empty_password_is_a_digest_error() {
        assert!(matches!(digest_blocking(""), Err(CryptoError::DigestError(_))));
    }

    #[test]
    fn digest_set_has_expected_shape() {
        let set = digest_blocking("Tr0ub4dor&3").unwrap();
        assert_eq!(set.sha256.len(), 64);
        assert_eq!(set.sha512.len(), 128);

        let record: Pbkdf2Hash = set.pbkdf2.parse().unwrap();
        assert_eq!(record.iterations(), PBKDF2_ITERATIONS);
        assert_eq!(record.salt().len(), SALT_LEN);
        assert_eq!(record.hash().len(), DERIVED_KEY_LEN);

        let parts: Vec<&str> = set.pbkdf2.split('$').collect();
        assert_eq!(parts[0], "pbkdf2_sha256");
        assert_eq!(parts[1], "100000");
        assert_eq!(parts[2].len(), 32);
        assert_eq!(parts[3].len(), 64);
        assert!(parts[2..].iter().all(|p| p.chars().all(|c| c.is_ascii_digit() || ('a'..='f').contains(&c))));
    }

    #[tokio::test]
    async fn async_digest_is_deterministic_except_for_salt() {
        let first = digest("correct horse battery staple").await.unwrap();
        let second = digest("correct horse battery staple").await.unwrap();

        assert_eq!(first.sha256, second.sha256);
        assert_eq!(first.sha512, second.sha512);
        assert_ne!(first.pbkdf2, second.pbkdf2);

        let record: Pbkdf2Hash = first.pbkdf2.parse().unwrap();
        assert!(record.verify("correct horse battery staple").unwrap());
    }

    #[tokio::test]
    async fn concurrent_digests_are_independent() {
        let (a, b) = tokio::join!(digest("alpha-password"), digest("beta-password"));
        let (a, b) = (a.unwrap(), b.unwrap());
        assert_eq!(a.sha256, sha256_hex(b"alpha-password"));
        assert_eq!(b.sha256, sha256_hex(b"beta-password"));
    }
}
