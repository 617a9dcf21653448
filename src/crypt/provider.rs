//! Pluggable binding to the crypt primitives. `SecretHasher` only ever talks
//! to the `HashProvider` trait, so the digest implementation can be swapped
//! without touching the orchestration (tests use this to simulate a hardened
//! environment with a scheme missing).

use pwhash::{md5_crypt, sha256_crypt, sha512_crypt, HashSetup};
use rand::rngs::OsRng;
use rand::Rng;

use crate::crypt::{Algorithm, CryptError, HashRecord};
use crate::secret::Secret;

/// Characters a crypt-style salt may contain.
const SALT_ALPHABET: &[u8] = b"./0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz";

/// Capability seam over the platform hash primitives: fresh salt generation
/// plus the salted digest computation. The digest itself is always delegated
/// to a vetted implementation, never reimplemented here.
pub trait HashProvider {
    /// Generates a fresh random salt sized for the given scheme.
    fn generate_salt(&self, algorithm: Algorithm) -> String;

    /// Computes the encoded `$<id>$<salt>$<digest>` record for the secret.
    fn digest(
        &self,
        secret: &Secret,
        algorithm: Algorithm,
        salt: &str,
    ) -> Result<HashRecord, CryptError>;
}

/// Default provider backed by the `pwhash` crate's crypt implementations.
pub struct SystemCrypt;

impl HashProvider for SystemCrypt {
    fn generate_salt(&self, algorithm: Algorithm) -> String {
        let mut rng = OsRng;
        (0..algorithm.salt_len())
            .map(|_| SALT_ALPHABET[rng.gen_range(0..SALT_ALPHABET.len())] as char)
            .collect()
    }

    fn digest(
        &self,
        secret: &Secret,
        algorithm: Algorithm,
        salt: &str,
    ) -> Result<HashRecord, CryptError> {
        let setup = HashSetup {
            salt: Some(salt),
            rounds: None,
        };
        let encoded = match algorithm {
            Algorithm::Md5 => md5_crypt::hash_with(setup, secret.as_str()),
            Algorithm::Sha256 => sha256_crypt::hash_with(setup, secret.as_str()),
            Algorithm::Sha512 => sha512_crypt::hash_with(setup, secret.as_str()),
        }
        .map_err(|e| CryptError::DigestFailed {
            algorithm,
            reason: format!("{e}"),
        })?;
        Ok(HashRecord::new(encoded))
    }
}

/// Verifies an encoded record against a plaintext using the scheme's standard
/// verification routine. Exposed for tests and for callers that want to
/// double-check a record before committing it to a kickstart file.
pub fn verify(plaintext: &str, record: &HashRecord) -> bool {
    let encoded = record.as_str();
    if encoded.starts_with("$1$") {
        md5_crypt::verify(plaintext, encoded)
    } else if encoded.starts_with("$5$") {
        sha256_crypt::verify(plaintext, encoded)
    } else if encoded.starts_with("$6$") {
        sha512_crypt::verify(plaintext, encoded)
    } else {
        false
    }
}
