//! Salted rootpw hash generator for kickstart provisioning files.
//! The crate is deliberately small and transparent so operators can audit
//! exactly how the plaintext secret is read, hashed, and discarded.

pub mod crypt;
pub mod input;
pub mod output;
pub mod secret;
