//! Plaintext secret holder. The secret lives in memory only for the duration
//! of one run and is zeroed on drop so it never lingers longer than needed.

use zeroize::Zeroize;

/// An owned plaintext secret. Never written to disk, never logged, and wiped
/// when dropped.
#[derive(Debug)]
pub struct Secret {
    value: String,
}

impl Secret {
    pub fn new(value: String) -> Self {
        Self { value }
    }

    pub fn as_str(&self) -> &str {
        &self.value
    }

    pub fn is_empty(&self) -> bool {
        self.value.is_empty()
    }
}

impl Drop for Secret {
    fn drop(&mut self) {
        // Zero the plaintext on drop to reduce its lifetime in memory.
        self.value.zeroize();
    }
}

#[cfg(test)]
mod tests {
    use super::Secret;

    #[test]
    fn exposes_the_plaintext_while_alive() {
        let secret = Secret::new("hunter2".to_string());
        assert_eq!(secret.as_str(), "hunter2");
        assert!(!secret.is_empty());
    }

    #[test]
    fn reports_empty_secrets() {
        let secret = Secret::new(String::new());
        assert!(secret.is_empty());
    }
}
