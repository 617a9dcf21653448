//! Crypt-style hashing for rootpw directives. Each submodule focuses on a
//! single responsibility: `provider` binds to the vetted hash primitives and
//! `hasher` orchestrates the fixed set of schemes.

pub mod hasher;
pub mod provider;

use thiserror::Error;

/// The crypt schemes a kickstart consumer expects, in output order.
/// MD5-crypt is cryptographically weak and is kept only because older
/// consumers still require a `$1$` record; do not drop it from the set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Algorithm {
    Md5,
    Sha256,
    Sha512,
}

impl Algorithm {
    /// Fixed output order: MD5, SHA-256, SHA-512.
    pub const ALL: [Algorithm; 3] = [Algorithm::Md5, Algorithm::Sha256, Algorithm::Sha512];

    /// The identifier embedded in the encoded record (`$<id>$salt$digest`).
    pub fn id(self) -> &'static str {
        match self {
            Algorithm::Md5 => "1",
            Algorithm::Sha256 => "5",
            Algorithm::Sha512 => "6",
        }
    }

    /// Human-readable name used in kickstart comment lines.
    pub fn label(self) -> &'static str {
        match self {
            Algorithm::Md5 => "md5",
            Algorithm::Sha256 => "sha256",
            Algorithm::Sha512 => "sha512",
        }
    }

    /// Salt length in characters; the maximum each scheme's encoding accepts.
    pub fn salt_len(self) -> usize {
        match self {
            Algorithm::Md5 => 8,
            Algorithm::Sha256 | Algorithm::Sha512 => 16,
        }
    }
}

impl std::fmt::Display for Algorithm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// One encoded salted hash, self-describing its algorithm and salt
/// (`$<id>$<salt>$<digest>`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HashRecord(String);

impl HashRecord {
    pub fn new(encoded: String) -> Self {
        Self(encoded)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for HashRecord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Error)]
pub enum CryptError {
    #[error("hash scheme {0} is not available in this environment")]
    UnsupportedAlgorithm(Algorithm),
    #[error("{algorithm} digest failed: {reason}")]
    DigestFailed { algorithm: Algorithm, reason: String },
}
