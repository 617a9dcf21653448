//! Orchestrates the fixed set of crypt schemes over one secret. The consumer
//! format expects exactly three records, so any failure aborts the whole run
//! rather than emitting a partial set.

use crate::crypt::provider::HashProvider;
use crate::crypt::{Algorithm, CryptError, HashRecord};
use crate::secret::Secret;

/// Hashes one secret with every supported scheme, in fixed order.
pub struct SecretHasher<P: HashProvider> {
    provider: P,
}

impl<P: HashProvider> SecretHasher<P> {
    pub fn new(provider: P) -> Self {
        Self { provider }
    }

    /// Returns one `(Algorithm, HashRecord)` pair per scheme, in the order
    /// MD5, SHA-256, SHA-512, each with a fresh random salt. An empty secret
    /// is hashed like any other; rejecting it is the input layer's decision.
    pub fn hash_all(&self, secret: &Secret) -> Result<Vec<(Algorithm, HashRecord)>, CryptError> {
        let mut records = Vec::with_capacity(Algorithm::ALL.len());
        for algorithm in Algorithm::ALL {
            let salt = self.provider.generate_salt(algorithm);
            let record = self.provider.digest(secret, algorithm, &salt)?;
            records.push((algorithm, record));
        }
        Ok(records)
    }
}
